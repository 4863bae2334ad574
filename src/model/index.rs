//! Multi-version-aware package index.
//!
//! The index is the bridge between parsing and diffing: every parsed
//! identity is filed under name, then architecture, then version, with a
//! list of releases at the bottom. Keeping a *list* (not a set) at the
//! release level is what represents multi-version installs — a kernel
//! present in three versions contributes three entries under one
//! (name, arch).

use crate::model::{PackageIdentity, SegmentedVersion};
use indexmap::IndexMap;

type ReleaseList = Vec<SegmentedVersion>;
/// Version text → releases installed at that version. Keys are the raw
/// version strings because `SegmentedVersion` equality is semantic and the
/// type has no `Hash`.
type VersionMap = IndexMap<String, ReleaseList>;
type ArchMap = IndexMap<String, VersionMap>;

/// In-memory index of one side's installed packages.
///
/// Built once from parsed identities and treated as read-only afterwards;
/// all queries return empty results for absent keys rather than failing.
#[derive(Debug, Clone, Default)]
#[must_use]
pub struct PackageIndex {
    packages: IndexMap<String, ArchMap>,
    occurrences: usize,
}

impl PackageIndex {
    /// Build an index from parsed identities. Nothing is rejected here:
    /// every identity that reached this point is filed, duplicates
    /// included — each occurrence is one install.
    pub fn build<I>(identities: I) -> Self
    where
        I: IntoIterator<Item = PackageIdentity>,
    {
        let mut index = Self::default();
        for identity in identities {
            index.insert(identity);
        }
        index
    }

    /// Parse raw descriptors and index every one that parses.
    ///
    /// Unparseable descriptors are logged at warn level and skipped; a bad
    /// line never aborts the run.
    pub fn from_descriptors<'a, I>(descriptors: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut index = Self::default();
        let mut skipped = 0usize;
        for descriptor in descriptors {
            match PackageIdentity::parse(descriptor) {
                Ok(identity) => index.insert(identity),
                Err(err) => {
                    skipped += 1;
                    tracing::warn!("skipping unparseable descriptor: {err}");
                }
            }
        }
        if skipped > 0 {
            tracing::warn!("{skipped} descriptor(s) could not be parsed and were skipped");
        }
        index
    }

    fn insert(&mut self, identity: PackageIdentity) {
        let PackageIdentity {
            name,
            version,
            release,
            arch,
        } = identity;
        self.packages
            .entry(name)
            .or_default()
            .entry(arch)
            .or_default()
            .entry(version.into_string())
            .or_default()
            .push(release);
        self.occurrences += 1;
    }

    /// All package names present, in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.packages.keys().map(String::as_str)
    }

    /// Architectures recorded for a name; empty when the name is absent.
    pub fn architectures(&self, name: &str) -> Vec<&str> {
        self.packages
            .get(name)
            .map(|archs| archs.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Flattened (version, release) pairs for a name and architecture, one
    /// per installed occurrence; empty when either key is absent. The
    /// order is stable but callers needing a particular order re-sort.
    pub fn version_release_pairs(
        &self,
        name: &str,
        arch: &str,
    ) -> Vec<(SegmentedVersion, SegmentedVersion)> {
        let Some(versions) = self.packages.get(name).and_then(|archs| archs.get(arch)) else {
            return Vec::new();
        };
        versions
            .iter()
            .flat_map(|(version, releases)| {
                releases
                    .iter()
                    .map(|release| (SegmentedVersion::new(version.as_str()), release.clone()))
            })
            .collect()
    }

    /// Number of distinct package names.
    pub fn package_count(&self) -> usize {
        self.packages.len()
    }

    /// Number of indexed occurrences (one per parsed identity).
    pub fn occurrence_count(&self) -> usize {
        self.occurrences
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pkg(descriptor: &str) -> PackageIdentity {
        PackageIdentity::parse(descriptor).expect("test descriptor should parse")
    }

    #[test]
    fn indexes_by_name_arch_version() {
        let index = PackageIndex::build([
            pkg("bash-5.2-1.x86_64"),
            pkg("bash-5.2-1.aarch64"),
            pkg("zlib-1.3-2.x86_64"),
        ]);

        assert_eq!(index.package_count(), 2);
        assert_eq!(index.occurrence_count(), 3);
        let mut archs = index.architectures("bash");
        archs.sort_unstable();
        assert_eq!(archs, ["aarch64", "x86_64"]);
    }

    #[test]
    fn preserves_duplicate_occurrences() {
        let index = PackageIndex::build([pkg("bash-5.2-1.x86_64"), pkg("bash-5.2-1.x86_64")]);
        assert_eq!(index.version_release_pairs("bash", "x86_64").len(), 2);
    }

    #[test]
    fn multi_version_installs_keep_every_pair() {
        let index = PackageIndex::build([
            pkg("kernel-default-6.4.0-1.x86_64"),
            pkg("kernel-default-6.4.0-2.x86_64"),
            pkg("kernel-default-6.7.1-1.x86_64"),
        ]);

        let pairs = index.version_release_pairs("kernel-default", "x86_64");
        assert_eq!(pairs.len(), 3);
    }

    #[test]
    fn absent_keys_yield_empty_results() {
        let index = PackageIndex::build([pkg("bash-5.2-1.x86_64")]);
        assert!(index.architectures("nope").is_empty());
        assert!(index.version_release_pairs("bash", "s390x").is_empty());
        assert!(index.version_release_pairs("nope", "x86_64").is_empty());
    }

    #[test]
    fn from_descriptors_skips_bad_lines() {
        let index =
            PackageIndex::from_descriptors(["bash-5.2-1.x86_64", "gpg-pubkey", "zlib-1.3-2.noarch"]);
        assert_eq!(index.occurrence_count(), 2);
        assert_eq!(index.package_count(), 2);
    }

    #[test]
    fn empty_input_builds_empty_index() {
        let index = PackageIndex::from_descriptors(Vec::<&str>::new());
        assert!(index.is_empty());
        assert_eq!(index.occurrence_count(), 0);
    }
}
