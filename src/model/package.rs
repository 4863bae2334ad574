//! Package identity parsing.
//!
//! An installed package occurrence is described by an NVRA descriptor,
//! `<name>-<version>-<release>.<arch>`, the form printed by `rpm -qa`.
//! Package file names carry the same descriptor with a trailing `.rpm`,
//! which is stripped before parsing.

use crate::error::{ParseErrorKind, PkgDeltaError, Result};
use crate::model::SegmentedVersion;
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

/// Package file extension stripped before matching.
const PACKAGE_EXTENSION: &str = ".rpm";

/// NVRA pattern: name and version greedy (names routinely contain
/// hyphens), release lazy, architecture anchored at the end of the string.
static DESCRIPTOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<name>.+)-(?P<version>.+)-(?P<release>.+?)\.(?P<arch>[a-z][a-z0-9_]*)$")
        .expect("static regex")
});

/// Looser shape used only to tell "bad architecture" apart from "not an
/// NVRA descriptor at all" in diagnostics.
static DESCRIPTOR_ANY_ARCH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^.+-.+-.+?\.[^.]+$").expect("static regex")
});

/// One installed package occurrence: name, version, release, architecture.
///
/// Ordering and equality are the lexicographic tuple
/// (name, version, release, arch), with version and release compared via
/// [`SegmentedVersion`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct PackageIdentity {
    pub name: String,
    pub version: SegmentedVersion,
    pub release: SegmentedVersion,
    pub arch: String,
}

impl PackageIdentity {
    /// Parse an NVRA descriptor such as
    /// `kernel-default-6.4.0-150600.23.7.3.x86_64`.
    ///
    /// Leading and trailing whitespace is ignored and a trailing `.rpm`
    /// extension is stripped first. The architecture token must start with
    /// a lowercase letter and contain only lowercase letters, digits, or
    /// underscores. Failure is a value the caller can log and skip; it is
    /// never fatal to a comparison run.
    pub fn parse(descriptor: &str) -> Result<Self> {
        let trimmed = descriptor.trim();
        let trimmed = trimmed.strip_suffix(PACKAGE_EXTENSION).unwrap_or(trimmed);

        let Some(captures) = DESCRIPTOR.captures(trimmed) else {
            let kind = if DESCRIPTOR_ANY_ARCH.is_match(trimmed) {
                ParseErrorKind::InvalidArchitecture
            } else {
                ParseErrorKind::MalformedDescriptor
            };
            return Err(PkgDeltaError::parse(format!("descriptor {trimmed:?}"), kind));
        };

        Ok(Self {
            name: captures["name"].to_string(),
            version: SegmentedVersion::new(&captures["version"]),
            release: SegmentedVersion::new(&captures["release"]),
            arch: captures["arch"].to_string(),
        })
    }

    /// The `version-release` display form used in diff reports, built from
    /// the preserved original texts.
    pub fn version_release(&self) -> String {
        format!("{}-{}", self.version, self.release)
    }
}

impl fmt::Display for PackageIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}.{}", self.name, self.version, self.release, self.arch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_simple_descriptor() {
        let pkg = PackageIdentity::parse("foo-1.2-3.x86_64").expect("should parse");
        assert_eq!(pkg.name, "foo");
        assert_eq!(pkg.version.as_str(), "1.2");
        assert_eq!(pkg.release.as_str(), "3");
        assert_eq!(pkg.arch, "x86_64");
    }

    #[test]
    fn strips_package_extension() {
        let plain = PackageIdentity::parse("foo-1.2-3.x86_64").expect("should parse");
        let with_ext = PackageIdentity::parse("foo-1.2-3.x86_64.rpm").expect("should parse");
        assert_eq!(plain, with_ext);
    }

    #[test]
    fn name_keeps_embedded_hyphens() {
        let pkg =
            PackageIdentity::parse("kernel-default-base-6.4.0-150600.23.7.3.x86_64").expect("should parse");
        assert_eq!(pkg.name, "kernel-default-base");
        assert_eq!(pkg.version.as_str(), "6.4.0");
        assert_eq!(pkg.release.as_str(), "150600.23.7.3");
    }

    #[test]
    fn trims_surrounding_whitespace() {
        let pkg = PackageIdentity::parse("  bash-5.2.15-3.1.noarch \n").expect("should parse");
        assert_eq!(pkg.name, "bash");
        assert_eq!(pkg.arch, "noarch");
    }

    #[test]
    fn rejects_descriptor_without_arch() {
        assert!(PackageIdentity::parse("foo-1.2-3").is_err());
    }

    #[test]
    fn rejects_uppercase_arch() {
        let err = PackageIdentity::parse("foo-1.2-3.X86_64").expect_err("must fail");
        assert!(err.to_string().contains("descriptor"));
    }

    #[test]
    fn rejects_garbage() {
        assert!(PackageIdentity::parse("gpg-pubkey").is_err());
        assert!(PackageIdentity::parse("").is_err());
    }

    #[test]
    fn orders_by_name_then_version() {
        let a = PackageIdentity::parse("foo-1.9-1.x86_64").expect("should parse");
        let b = PackageIdentity::parse("foo-1.10-1.x86_64").expect("should parse");
        let c = PackageIdentity::parse("zsh-1.0-1.x86_64").expect("should parse");
        assert!(a < b);
        assert!(b < c);
    }

    #[test]
    fn display_round_trips() {
        let raw = "kernel-default-6.4.0-150600.23.7.3.x86_64";
        let pkg = PackageIdentity::parse(raw).expect("should parse");
        assert_eq!(pkg.to_string(), raw);
    }
}
