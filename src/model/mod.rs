//! Core data model: segmented versions, package identities, and the
//! multi-version-aware package index.

mod index;
mod package;
mod version;

pub use index::PackageIndex;
pub use package::PackageIdentity;
pub use version::SegmentedVersion;
