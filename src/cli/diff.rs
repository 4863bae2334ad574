//! Diff command handler.
//!
//! Implements the `diff` subcommand for comparing two package
//! inventories.

use super::exit_codes;
use crate::diff::DiffEngine;
use crate::model::PackageIndex;
use crate::reports::{create_reporter, ReportFormat, ReportLabels};
use crate::sources::{InventoryListing, PackageSource};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Options for the diff command.
#[derive(Debug, Clone)]
pub struct DiffOptions {
    /// Left-side inventory path
    pub left: PathBuf,
    /// Right-side inventory path
    pub right: PathBuf,
    /// Output format
    pub format: ReportFormat,
    /// Output file path (stdout if absent)
    pub output_file: Option<PathBuf>,
    /// Omit `==` and `:=` records
    pub only_changes: bool,
    /// Exit non-zero when any difference is found
    pub fail_on_change: bool,
    /// Disable colored output
    pub no_color: bool,
    /// Suppress non-essential output
    pub quiet: bool,
}

/// Run the diff command, returning the desired exit code.
///
/// The caller is responsible for calling `std::process::exit()` with the
/// returned code when it is non-zero.
pub fn run_diff(options: &DiffOptions) -> Result<i32> {
    let left = load_side(&options.left)?;
    let right = load_side(&options.right)?;

    let left_index = PackageIndex::from_descriptors(left.descriptors.iter().map(String::as_str));
    let right_index = PackageIndex::from_descriptors(right.descriptors.iter().map(String::as_str));

    if !options.quiet {
        tracing::info!(
            "indexed {} package occurrence(s) from {}, {} from {}",
            left_index.occurrence_count(),
            left.label,
            right_index.occurrence_count(),
            right.label
        );
    }

    let engine = DiffEngine::new().only_changes(options.only_changes);
    let records = engine.compare(&left_index, &right_index);
    let changed = records.iter().any(|record| record.class.is_change());

    let labels = ReportLabels::new(left.label, right.label);
    let reporter = create_reporter(options.format, !options.no_color);
    let report = reporter.generate(&records, &labels)?;
    write_output(options.output_file.as_deref(), &report)?;

    if options.fail_on_change && changed {
        return Ok(exit_codes::CHANGES_DETECTED);
    }
    Ok(exit_codes::SUCCESS)
}

fn load_side(path: &Path) -> Result<InventoryListing> {
    let source = PackageSource::resolve(path)
        .with_context(|| format!("resolving inventory source {}", path.display()))?;
    source
        .load()
        .with_context(|| format!("loading inventory from {}", path.display()))
}

fn write_output(target: Option<&Path>, report: &str) -> Result<()> {
    match target {
        Some(path) => std::fs::write(path, report)
            .with_context(|| format!("writing report to {}", path.display())),
        None => {
            print!("{report}");
            Ok(())
        }
    }
}
