//! Diff record types.

use serde::{Serialize, Serializer};
use std::fmt;

/// Classification of one diff row — the closed set of report symbols.
///
/// | Code | Meaning |
/// |---|---|
/// | `++` | present in left only |
/// | `--` | present in right only |
/// | `==` | present in both, same version-release |
/// | `<<` | left version-release orders lower than right |
/// | `>>` | left version-release orders higher than right |
/// | `:+` | multi-version entry present in left only |
/// | `:-` | multi-version entry present in right only |
/// | `:=` | multi-version entry present in both |
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiffClass {
    /// `++`
    LeftOnly,
    /// `--`
    RightOnly,
    /// `==`
    Unchanged,
    /// `<<` — the right side carries the newer version-release
    Upgraded,
    /// `>>` — the right side carries the older version-release
    Downgraded,
    /// `:+`
    MultiLeftOnly,
    /// `:-`
    MultiRightOnly,
    /// `:=`
    MultiBoth,
}

impl DiffClass {
    /// The two-character report symbol.
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::LeftOnly => "++",
            Self::RightOnly => "--",
            Self::Unchanged => "==",
            Self::Upgraded => "<<",
            Self::Downgraded => ">>",
            Self::MultiLeftOnly => ":+",
            Self::MultiRightOnly => ":-",
            Self::MultiBoth => ":=",
        }
    }

    /// Whether the row represents an actual difference between the sides.
    pub const fn is_change(self) -> bool {
        !matches!(self, Self::Unchanged | Self::MultiBoth)
    }

    /// Whether the row came out of the multi-version branch.
    pub const fn is_multi_version(self) -> bool {
        matches!(self, Self::MultiLeftOnly | Self::MultiRightOnly | Self::MultiBoth)
    }
}

impl fmt::Display for DiffClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl Serialize for DiffClass {
    /// Serialized as the report symbol so JSON consumers see the same
    /// codes as the table output.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.symbol())
    }
}

/// One output row of a comparison.
///
/// `left` and `right` are `version-release` display strings built from the
/// preserved original texts; each is empty when the package is absent on
/// that side. Records are produced only by the diff engine and their order
/// in the output is significant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiffRecord {
    pub class: DiffClass,
    pub name: String,
    pub arch: String,
    pub left: String,
    pub right: String,
}

impl DiffRecord {
    pub fn new(
        class: DiffClass,
        name: impl Into<String>,
        arch: impl Into<String>,
        left: impl Into<String>,
        right: impl Into<String>,
    ) -> Self {
        Self {
            class,
            name: name.into(),
            arch: arch.into(),
            left: left.into(),
            right: right.into(),
        }
    }
}
