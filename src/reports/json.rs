//! Structured JSON output.

use super::{ReportError, ReportFormat, ReportGenerator, ReportLabels};
use crate::diff::DiffRecord;
use indexmap::IndexMap;
use serde::Serialize;

/// JSON reporter for programmatic consumers.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonReporter;

impl JsonReporter {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    left_label: &'a str,
    right_label: &'a str,
    /// Record count per classification symbol, in legend order.
    summary: IndexMap<&'static str, usize>,
    records: &'a [DiffRecord],
}

impl ReportGenerator for JsonReporter {
    fn generate(
        &self,
        records: &[DiffRecord],
        labels: &ReportLabels,
    ) -> Result<String, ReportError> {
        let mut summary: IndexMap<&'static str, usize> = IndexMap::new();
        for record in records {
            *summary.entry(record.class.symbol()).or_insert(0) += 1;
        }

        let report = JsonReport {
            left_label: &labels.left,
            right_label: &labels.right,
            summary,
            records,
        };
        serde_json::to_string_pretty(&report)
            .map_err(|err| ReportError::Serialization(err.to_string()))
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Json
    }
}
