//! Report generation for inventory diff results.
//!
//! Three output formats cover the usual consumers:
//! - Table: column-aligned terminal output, one row per record
//! - JSON: structured data for programmatic integration
//! - Summary: compact per-class counts for shell usage

mod json;
mod summary;
mod table;

pub use json::JsonReporter;
pub use summary::SummaryReporter;
pub use table::TableReporter;

use crate::diff::DiffRecord;
use clap::ValueEnum;
use thiserror::Error;

/// Errors that can occur during report generation
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Output format for reports
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Column-aligned table, one row per record
    #[default]
    Table,
    /// Structured JSON output
    Json,
    /// Compact per-class counts
    Summary,
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportFormat::Table => write!(f, "table"),
            ReportFormat::Json => write!(f, "json"),
            ReportFormat::Summary => write!(f, "summary"),
        }
    }
}

/// Labels for the two sides of a comparison, shown in report headers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportLabels {
    pub left: String,
    pub right: String,
}

impl ReportLabels {
    pub fn new(left: impl Into<String>, right: impl Into<String>) -> Self {
        Self {
            left: left.into(),
            right: right.into(),
        }
    }
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Render the diff records into the output text.
    fn generate(&self, records: &[DiffRecord], labels: &ReportLabels)
        -> Result<String, ReportError>;

    /// Get the format this generator produces
    fn format(&self) -> ReportFormat;
}

/// Create a report generator for the given format
#[must_use]
pub fn create_reporter(format: ReportFormat, use_color: bool) -> Box<dyn ReportGenerator> {
    match format {
        ReportFormat::Table => Box::new(TableReporter::new()),
        ReportFormat::Json => Box::new(JsonReporter::new()),
        ReportFormat::Summary => {
            if use_color {
                Box::new(SummaryReporter::new())
            } else {
                Box::new(SummaryReporter::new().no_color())
            }
        }
    }
}
