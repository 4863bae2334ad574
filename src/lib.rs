//! **Classified diff reports for installed-package inventories.**
//!
//! `pkgdelta` compares two inventories of installed packages — plain
//! `rpm -qa` listings, support-report bundles, directory trees, or tar
//! archives containing either — and reports which packages are added,
//! removed, unchanged, upgraded, downgraded, or installed in multiple
//! concurrent versions.
//!
//! ## Core Concepts & Modules
//!
//! - **[`model`]**: [`PackageIdentity`] (parsed NVRA descriptor),
//!   [`SegmentedVersion`] (dot/plus-segmented, numeric-aware ordering),
//!   and [`PackageIndex`] (multi-version-aware name/arch/version index).
//! - **[`diff`]**: the [`DiffEngine`], which reconciles two indexes into
//!   an ordered list of [`DiffRecord`]s classified by [`DiffClass`].
//! - **[`sources`]**: boundary glue resolving a path into a
//!   [`PackageSource`] and loading the raw descriptor strings.
//! - **[`reports`]**: table, JSON, and summary renderers over the record
//!   list.
//!
//! ## Example
//!
//! ```
//! use pkgdelta::{DiffEngine, PackageIndex};
//!
//! let before = PackageIndex::from_descriptors(["bash-5.1.16-1.x86_64"]);
//! let after = PackageIndex::from_descriptors(["bash-5.2.15-1.x86_64"]);
//!
//! let records = DiffEngine::new().compare(&before, &after);
//! assert_eq!(records.len(), 1);
//! assert_eq!(records[0].class.symbol(), "<<");
//! assert_eq!(records[0].right, "5.2.15-1");
//! ```
//!
//! The comparison itself is a bounded, in-memory computation: both sides
//! are fully indexed before the engine runs, nothing is mutated
//! afterwards, and the output order is deterministic.

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
#![allow(
    // Doc completeness: # Errors / # Panics sections are aspirational
    clippy::missing_errors_doc,
    clippy::missing_panics_doc
)]

pub mod cli;
pub mod diff;
pub mod error;
pub mod model;
pub mod reports;
pub mod sources;

// Re-export main types for convenience
pub use diff::{DiffClass, DiffEngine, DiffRecord};
pub use error::{PkgDeltaError, Result};
pub use model::{PackageIdentity, PackageIndex, SegmentedVersion};
pub use reports::{create_reporter, ReportFormat, ReportGenerator, ReportLabels};
pub use sources::{InventoryListing, PackageSource};
