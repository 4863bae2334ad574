//! Segmented version ordering.
//!
//! RPM version and release strings are compared piecewise: the string is
//! split on `.` and `+`, and corresponding segments are compared as
//! integers when both are all-digits, as plain text otherwise. This is a
//! deliberately simplified ordering for inventory comparison, not a full
//! rpmvercmp reimplementation — no epoch handling, no tilde pre-releases.

use std::cmp::Ordering;
use std::fmt;

/// A version or release string with segment-aware ordering.
///
/// The original text is preserved byte-for-byte and is always used for
/// display; splitting happens only during comparison, so `1.2+git3` prints
/// exactly as it was read, never re-joined from segments.
///
/// Equality follows the ordering (`"1.09" == "1.9"` because the numeric
/// segments compare equal), which is why this type does not implement
/// `Hash` — index structures key on the raw text instead.
#[derive(Debug, Clone)]
pub struct SegmentedVersion {
    raw: String,
}

impl SegmentedVersion {
    /// Wrap a version or release string.
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }

    /// The original text, unmodified.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Consume the wrapper, returning the original text.
    pub fn into_string(self) -> String {
        self.raw
    }

    fn segments(&self) -> impl Iterator<Item = &str> {
        self.raw.split(['.', '+'])
    }
}

impl From<&str> for SegmentedVersion {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl fmt::Display for SegmentedVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl Ord for SegmentedVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        let mut left = self.segments();
        let mut right = other.segments();
        loop {
            match (left.next(), right.next()) {
                (None, None) => return Ordering::Equal,
                // The exhausted side sorts lower: a missing trailing
                // qualifier is the older variant, whatever the extra
                // segment contains.
                (None, Some(_)) => return Ordering::Less,
                (Some(_), None) => return Ordering::Greater,
                (Some(a), Some(b)) => match compare_segments(a, b) {
                    Ordering::Equal => {}
                    decided => return decided,
                },
            }
        }
    }
}

impl PartialOrd for SegmentedVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for SegmentedVersion {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SegmentedVersion {}

/// Compare one segment pair: numerically when both are all-digits,
/// case-sensitive code-point order otherwise.
fn compare_segments(a: &str, b: &str) -> Ordering {
    if is_numeric(a) && is_numeric(b) {
        compare_numeric(a, b)
    } else {
        a.cmp(b)
    }
}

fn is_numeric(segment: &str) -> bool {
    !segment.is_empty() && segment.bytes().all(|b| b.is_ascii_digit())
}

/// Integer comparison without parsing: strip leading zeros, then a longer
/// digit run wins, then byte order. Arbitrarily long runs cannot overflow.
fn compare_numeric(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}
