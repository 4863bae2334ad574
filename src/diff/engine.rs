//! Inventory diff engine.

use super::{DiffClass, DiffRecord};
use crate::model::{PackageIndex, SegmentedVersion};
use std::cmp::Ordering;
use std::collections::HashSet;

type VersionRelease = (SegmentedVersion, SegmentedVersion);

/// Reconciles two package indexes into an ordered list of classified
/// records.
///
/// The walk is deterministic: names in case-insensitive order, then
/// architectures in case-insensitive order, then — within multi-version
/// groups — ascending (version, release). Running the same two indexes
/// twice yields byte-identical output.
#[derive(Debug, Clone, Copy, Default)]
#[must_use]
pub struct DiffEngine {
    only_changes: bool,
}

impl DiffEngine {
    /// Create an engine that reports every record, unchanged ones
    /// included.
    pub const fn new() -> Self {
        Self {
            only_changes: false,
        }
    }

    /// Drop `==` and `:=` records from the output.
    pub const fn only_changes(mut self, only: bool) -> Self {
        self.only_changes = only;
        self
    }

    /// Compare two indexes.
    pub fn compare(&self, left: &PackageIndex, right: &PackageIndex) -> Vec<DiffRecord> {
        let mut records = Vec::new();

        for name in sorted_union(left.names(), right.names()) {
            let archs = sorted_union(
                left.architectures(name).into_iter(),
                right.architectures(name).into_iter(),
            );
            for arch in archs {
                let left_pairs = left.version_release_pairs(name, arch);
                let right_pairs = right.version_release_pairs(name, arch);

                // The crux: a (name, arch) with more than one occurrence
                // on either side is a multi-version install and gets the
                // richer per-pair record set. The threshold is purely
                // occurrence-count-driven — no package-name whitelist.
                if left_pairs.len() > 1 || right_pairs.len() > 1 {
                    self.multi_version_records(name, arch, &left_pairs, &right_pairs, &mut records);
                } else {
                    self.single_install_record(
                        name,
                        arch,
                        left_pairs.first(),
                        right_pairs.first(),
                        &mut records,
                    );
                }
            }
        }

        records
    }

    /// At most one occurrence per side: emit exactly one record.
    fn single_install_record(
        &self,
        name: &str,
        arch: &str,
        left: Option<&VersionRelease>,
        right: Option<&VersionRelease>,
        records: &mut Vec<DiffRecord>,
    ) {
        let record = match (left, right) {
            (Some(l), None) => {
                DiffRecord::new(DiffClass::LeftOnly, name, arch, display(l), "")
            }
            (None, Some(r)) => {
                DiffRecord::new(DiffClass::RightOnly, name, arch, "", display(r))
            }
            (Some(l), Some(r)) => {
                let class = match compare_pairs(l, r) {
                    Ordering::Equal => DiffClass::Unchanged,
                    Ordering::Less => DiffClass::Upgraded,
                    Ordering::Greater => DiffClass::Downgraded,
                };
                DiffRecord::new(class, name, arch, display(l), display(r))
            }
            // Neither side knows the (name, arch) pair; nothing to report.
            (None, None) => return,
        };
        self.emit(records, record);
    }

    /// More than one occurrence somewhere: one record per distinct
    /// (version, release) pair across both sides, ascending.
    fn multi_version_records(
        &self,
        name: &str,
        arch: &str,
        left_pairs: &[VersionRelease],
        right_pairs: &[VersionRelease],
        records: &mut Vec<DiffRecord>,
    ) {
        // Distinctness is by display text (dictionary-key behavior);
        // ordering is segmented with the raw text as tiebreak so equal-
        // comparing spellings still land in a fixed order.
        let mut seen: HashSet<(&str, &str)> = HashSet::new();
        let mut union: Vec<&VersionRelease> = Vec::new();
        for pair in left_pairs.iter().chain(right_pairs) {
            if seen.insert((pair.0.as_str(), pair.1.as_str())) {
                union.push(pair);
            }
        }
        union.sort_by(|a, b| {
            compare_pairs(a, b)
                .then_with(|| a.0.as_str().cmp(b.0.as_str()))
                .then_with(|| a.1.as_str().cmp(b.1.as_str()))
        });

        for pair in union {
            let in_left = contains(left_pairs, pair);
            let in_right = contains(right_pairs, pair);
            let class = if in_left && in_right {
                DiffClass::MultiBoth
            } else if in_left {
                DiffClass::MultiLeftOnly
            } else {
                DiffClass::MultiRightOnly
            };
            let shown = display(pair);
            let record = DiffRecord::new(
                class,
                name,
                arch,
                if in_left { shown.clone() } else { String::new() },
                if in_right { shown } else { String::new() },
            );
            self.emit(records, record);
        }
    }

    fn emit(&self, records: &mut Vec<DiffRecord>, record: DiffRecord) {
        if self.only_changes && !record.class.is_change() {
            return;
        }
        records.push(record);
    }
}

/// `version-release` display string from the preserved original texts.
fn display(pair: &VersionRelease) -> String {
    format!("{}-{}", pair.0, pair.1)
}

/// Compare (version, release) pairs: version first, then release.
fn compare_pairs(a: &VersionRelease, b: &VersionRelease) -> Ordering {
    a.0.cmp(&b.0).then_with(|| a.1.cmp(&b.1))
}

fn contains(pairs: &[VersionRelease], pair: &VersionRelease) -> bool {
    pairs
        .iter()
        .any(|p| p.0.as_str() == pair.0.as_str() && p.1.as_str() == pair.1.as_str())
}

/// Union of two key sets, sorted case-insensitively with the raw text as
/// tiebreak so the outcome is deterministic even for case-variant names.
fn sorted_union<'a>(
    left: impl Iterator<Item = &'a str>,
    right: impl Iterator<Item = &'a str>,
) -> Vec<&'a str> {
    let mut all: Vec<&str> = left.chain(right).collect();
    all.sort_by(|a, b| {
        a.to_lowercase()
            .cmp(&b.to_lowercase())
            .then_with(|| a.cmp(b))
    });
    all.dedup();
    all
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PackageIndex;

    fn index(descriptors: &[&str]) -> PackageIndex {
        PackageIndex::from_descriptors(descriptors.iter().copied())
    }

    fn classes(records: &[DiffRecord]) -> Vec<&'static str> {
        records.iter().map(|r| r.class.symbol()).collect()
    }

    #[test]
    fn single_install_upgrade() {
        let left = index(&["foo-1.0-1.x86_64"]);
        let right = index(&["foo-2.0-1.x86_64"]);
        let records = DiffEngine::new().compare(&left, &right);

        assert_eq!(records.len(), 1);
        let record = &records[0];
        assert_eq!(record.class, DiffClass::Upgraded);
        assert_eq!(record.name, "foo");
        assert_eq!(record.arch, "x86_64");
        assert_eq!(record.left, "1.0-1");
        assert_eq!(record.right, "2.0-1");
    }

    #[test]
    fn single_install_classifications() {
        let left = index(&[
            "gone-1.0-1.x86_64",
            "same-1.0-1.x86_64",
            "newer-2.0-1.x86_64",
        ]);
        let right = index(&[
            "added-1.0-1.x86_64",
            "same-1.0-1.x86_64",
            "newer-1.0-1.x86_64",
        ]);
        let records = DiffEngine::new().compare(&left, &right);

        // Case-insensitive name order: added, gone, newer, same.
        assert_eq!(classes(&records), ["--", "++", ">>", "=="]);
        assert_eq!(records[0].left, "");
        assert_eq!(records[1].right, "");
    }

    #[test]
    fn release_breaks_version_tie() {
        let left = index(&["foo-1.0-1.x86_64"]);
        let right = index(&["foo-1.0-2.x86_64"]);
        let records = DiffEngine::new().compare(&left, &right);
        assert_eq!(classes(&records), ["<<"]);
    }

    #[test]
    fn multi_version_branch_covers_whole_group() {
        // Two kernel versions on the left, one on the right: every record
        // for the group must come from the multi-version set.
        let left = index(&["kernel-6.4.0-1.x86_64", "kernel-6.7.1-1.x86_64"]);
        let right = index(&["kernel-6.7.1-1.x86_64"]);
        let records = DiffEngine::new().compare(&left, &right);

        assert_eq!(classes(&records), [":+", ":="]);
        assert_eq!(records[0].left, "6.4.0-1");
        assert_eq!(records[0].right, "");
        assert_eq!(records[1].left, "6.7.1-1");
        assert_eq!(records[1].right, "6.7.1-1");
    }

    #[test]
    fn multi_version_threshold_is_symmetric() {
        // One occurrence left, three right: still the multi-version
        // branch, because the max count across both sides exceeds one.
        let left = index(&["kernel-6.4.0-1.x86_64"]);
        let right = index(&[
            "kernel-6.4.0-1.x86_64",
            "kernel-6.7.1-1.x86_64",
            "kernel-6.9.2-1.x86_64",
        ]);
        let records = DiffEngine::new().compare(&left, &right);
        assert_eq!(classes(&records), [":=", ":-", ":-"]);
    }

    #[test]
    fn multi_version_pairs_sort_ascending() {
        let left = index(&["kernel-6.10.0-1.x86_64", "kernel-6.9.2-1.x86_64"]);
        let right = index(&["kernel-6.4.0-1.x86_64", "kernel-6.9.2-1.x86_64"]);
        let records = DiffEngine::new().compare(&left, &right);

        let shown: Vec<&str> = records
            .iter()
            .map(|r| if r.left.is_empty() { r.right.as_str() } else { r.left.as_str() })
            .collect();
        // Numeric-aware: 6.4.0 < 6.9.2 < 6.10.0.
        assert_eq!(shown, ["6.4.0-1", "6.9.2-1", "6.10.0-1"]);
        assert_eq!(classes(&records), [":-", ":=", ":+"]);
    }

    #[test]
    fn duplicate_occurrences_trigger_multi_branch() {
        // The same (version, release) twice on one side is still a
        // multi-version install: two occurrences.
        let left = index(&["foo-1.0-1.x86_64", "foo-1.0-1.x86_64"]);
        let right = index(&["foo-1.0-1.x86_64"]);
        let records = DiffEngine::new().compare(&left, &right);
        assert_eq!(classes(&records), [":="]);
    }

    #[test]
    fn architectures_are_separate_groups() {
        let left = index(&["bash-5.2-1.x86_64", "bash-5.2-1.aarch64"]);
        let right = index(&["bash-5.2-1.x86_64"]);
        let records = DiffEngine::new().compare(&left, &right);

        assert_eq!(records.len(), 2);
        // aarch64 sorts before x86_64.
        assert_eq!(records[0].arch, "aarch64");
        assert_eq!(records[0].class, DiffClass::LeftOnly);
        assert_eq!(records[1].arch, "x86_64");
        assert_eq!(records[1].class, DiffClass::Unchanged);
    }

    #[test]
    fn names_sort_case_insensitively() {
        let left = index(&["Zlib-1.0-1.x86_64", "apache-2.4-1.x86_64"]);
        let right = index(&[]);
        let records = DiffEngine::new().compare(&left, &right);

        let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["apache", "Zlib"]);
    }

    #[test]
    fn empty_sides_are_not_errors() {
        let empty = index(&[]);
        let full = index(&["foo-1.0-1.x86_64"]);

        assert!(DiffEngine::new().compare(&empty, &empty).is_empty());
        assert_eq!(classes(&DiffEngine::new().compare(&full, &empty)), ["++"]);
        assert_eq!(classes(&DiffEngine::new().compare(&empty, &full)), ["--"]);
    }

    #[test]
    fn only_changes_filters_identical_rows() {
        let left = index(&["same-1.0-1.x86_64", "kernel-6.4.0-1.x86_64", "kernel-6.7.1-1.x86_64"]);
        let right = index(&["same-1.0-1.x86_64", "kernel-6.4.0-1.x86_64"]);

        let all = DiffEngine::new().compare(&left, &right);
        assert_eq!(classes(&all), [":=", ":+", "=="]);

        let changed = DiffEngine::new().only_changes(true).compare(&left, &right);
        assert_eq!(classes(&changed), [":+"]);
    }

    #[test]
    fn output_is_deterministic() {
        let left = index(&[
            "kernel-6.4.0-1.x86_64",
            "kernel-6.7.1-1.x86_64",
            "Zlib-1.0-1.x86_64",
            "apache-2.4-1.noarch",
        ]);
        let right = index(&["kernel-6.7.1-1.x86_64", "apache-2.4-2.noarch"]);

        let first = DiffEngine::new().compare(&left, &right);
        let second = DiffEngine::new().compare(&left, &right);
        assert_eq!(first, second);
    }
}
