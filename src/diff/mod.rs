//! Inventory diff: classification types and the reconciliation engine.
//!
//! [`DiffEngine::compare`] walks the union of two [`PackageIndex`]es and
//! emits one [`DiffRecord`] per single-install package plus one per
//! distinct (version, release) pair inside multi-version groups. The
//! classification codes are the closed set in [`DiffClass`].
//!
//! [`PackageIndex`]: crate::model::PackageIndex

mod engine;
mod record;

pub use engine::DiffEngine;
pub use record::{DiffClass, DiffRecord};
