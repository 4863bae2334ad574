//! Compact summary output for shell usage.

use super::{ReportError, ReportFormat, ReportGenerator, ReportLabels};
use crate::diff::{DiffClass, DiffRecord};

/// Apply ANSI color formatting if colored output is enabled.
fn ansi_color(text: &str, color: &str, colored: bool) -> String {
    if colored {
        match color {
            "red" => format!("\x1b[31m{text}\x1b[0m"),
            "green" => format!("\x1b[32m{text}\x1b[0m"),
            "yellow" => format!("\x1b[33m{text}\x1b[0m"),
            "cyan" => format!("\x1b[36m{text}\x1b[0m"),
            "bold" => format!("\x1b[1m{text}\x1b[0m"),
            "dim" => format!("\x1b[2m{text}\x1b[0m"),
            _ => text.to_string(),
        }
    } else {
        text.to_string()
    }
}

/// Summary reporter: one line per classification with its record count.
pub struct SummaryReporter {
    /// Use colored output
    colored: bool,
}

impl SummaryReporter {
    #[must_use]
    pub const fn new() -> Self {
        Self { colored: true }
    }

    /// Disable colored output
    #[must_use]
    pub const fn no_color(mut self) -> Self {
        self.colored = false;
        self
    }

    fn color(&self, text: &str, color: &str) -> String {
        ansi_color(text, color, self.colored)
    }
}

impl Default for SummaryReporter {
    fn default() -> Self {
        Self::new()
    }
}

/// Legend order with a short description and a display color per class.
const LEGEND: [(DiffClass, &str, &str); 8] = [
    (DiffClass::LeftOnly, "left only", "red"),
    (DiffClass::RightOnly, "right only", "green"),
    (DiffClass::Unchanged, "unchanged", "dim"),
    (DiffClass::Upgraded, "upgraded", "green"),
    (DiffClass::Downgraded, "downgraded", "yellow"),
    (DiffClass::MultiLeftOnly, "multi-version, left only", "red"),
    (DiffClass::MultiRightOnly, "multi-version, right only", "green"),
    (DiffClass::MultiBoth, "multi-version, both", "dim"),
];

impl ReportGenerator for SummaryReporter {
    fn generate(
        &self,
        records: &[DiffRecord],
        labels: &ReportLabels,
    ) -> Result<String, ReportError> {
        let mut lines = Vec::new();

        lines.push(self.color("Package Inventory Diff", "bold"));
        lines.push(self.color("─".repeat(40).as_str(), "dim"));
        lines.push(format!(
            "{}  {} → {}",
            self.color("Sides:", "cyan"),
            labels.left,
            labels.right
        ));
        lines.push(String::new());

        let changes = records.iter().filter(|r| r.class.is_change()).count();
        for (class, description, color) in LEGEND {
            let count = records.iter().filter(|r| r.class == class).count();
            if count == 0 {
                continue;
            }
            let line = format!("  {}  {description}: {count}", class.symbol());
            lines.push(self.color(&line, color));
        }
        if records.is_empty() {
            lines.push(self.color("  no records", "dim"));
        }

        lines.push(String::new());
        lines.push(format!(
            "{}  {changes} change(s) across {} record(s)",
            self.color("Total:", "cyan"),
            records.len()
        ));

        Ok(lines.join("\n") + "\n")
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Summary
    }
}
