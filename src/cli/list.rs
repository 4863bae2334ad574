//! List command handler.
//!
//! Prints the parsed inventory of a single source, mostly useful for
//! checking what a support bundle actually contains before diffing it.

use super::exit_codes;
use crate::model::PackageIndex;
use crate::sources::PackageSource;
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Options for the list command.
#[derive(Debug, Clone)]
pub struct ListOptions {
    /// Inventory path: listing file, support report, directory, or archive
    pub source: PathBuf,
    /// Suppress non-essential output
    pub quiet: bool,
}

/// Run the list command, returning the desired exit code.
pub fn run_list(options: &ListOptions) -> Result<i32> {
    let source = PackageSource::resolve(&options.source)
        .with_context(|| format!("resolving inventory source {}", options.source.display()))?;
    let listing = source
        .load()
        .with_context(|| format!("loading inventory from {}", options.source.display()))?;

    let index = PackageIndex::from_descriptors(listing.descriptors.iter().map(String::as_str));
    if !options.quiet {
        tracing::info!(
            "{}: {} package occurrence(s), {} distinct name(s)",
            listing.label,
            index.occurrence_count(),
            index.package_count()
        );
    }

    print!("{}", render_inventory(&index));
    Ok(exit_codes::SUCCESS)
}

/// One line per occurrence, names and architectures in case-insensitive
/// order — the same order the diff walks.
fn render_inventory(index: &PackageIndex) -> String {
    let mut names: Vec<&str> = index.names().collect();
    names.sort_by(|a, b| a.to_lowercase().cmp(&b.to_lowercase()).then_with(|| a.cmp(b)));

    let mut out = String::new();
    for name in names {
        let mut archs = index.architectures(name);
        archs.sort_by(|a, b| a.to_lowercase().cmp(&b.to_lowercase()).then_with(|| a.cmp(b)));
        for arch in archs {
            let mut pairs = index.version_release_pairs(name, arch);
            pairs.sort_by(|a, b| {
                a.0.cmp(&b.0)
                    .then_with(|| a.1.cmp(&b.1))
                    .then_with(|| a.0.as_str().cmp(b.0.as_str()))
                    .then_with(|| a.1.as_str().cmp(b.1.as_str()))
            });
            for (version, release) in pairs {
                out.push_str(&format!("{name}  {arch}  {version}-{release}\n"));
            }
        }
    }
    out
}
