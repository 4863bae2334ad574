//! Column-aligned table output.

use super::{ReportError, ReportFormat, ReportGenerator, ReportLabels};
use crate::diff::DiffRecord;
use unicode_width::UnicodeWidthStr;

/// Table reporter: fixed-width columns, header row
/// `["", "package", "arch", <left-label>, <right-label>]`, the
/// classification symbol in the first column.
#[derive(Debug, Clone, Copy, Default)]
pub struct TableReporter;

impl TableReporter {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl ReportGenerator for TableReporter {
    fn generate(
        &self,
        records: &[DiffRecord],
        labels: &ReportLabels,
    ) -> Result<String, ReportError> {
        let header = [
            String::new(),
            "package".to_string(),
            "arch".to_string(),
            labels.left.clone(),
            labels.right.clone(),
        ];
        let rows: Vec<[String; 5]> = records
            .iter()
            .map(|record| {
                [
                    record.class.symbol().to_string(),
                    record.name.clone(),
                    record.arch.clone(),
                    record.left.clone(),
                    record.right.clone(),
                ]
            })
            .collect();

        let mut widths = [0usize; 5];
        for row in std::iter::once(&header).chain(&rows) {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.width());
            }
        }

        let mut out = String::new();
        push_row(&mut out, &header, &widths);
        push_separator(&mut out, &widths);
        for row in &rows {
            push_row(&mut out, row, &widths);
        }
        Ok(out)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Table
    }
}

/// Two spaces between columns; trailing padding is trimmed so lines never
/// end in whitespace.
fn push_row(out: &mut String, row: &[String; 5], widths: &[usize; 5]) {
    let mut line = String::new();
    for (cell, width) in row.iter().zip(widths) {
        line.push_str(cell);
        // Pad by display width, not byte length.
        let pad = width.saturating_sub(cell.width()) + 2;
        line.push_str(&" ".repeat(pad));
    }
    out.push_str(line.trim_end());
    out.push('\n');
}

fn push_separator(out: &mut String, widths: &[usize; 5]) {
    let mut line = String::new();
    for width in widths {
        line.push_str(&"-".repeat(*width));
        line.push_str("  ");
    }
    out.push_str(line.trim_end());
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::DiffClass;

    fn sample_records() -> Vec<DiffRecord> {
        vec![
            DiffRecord::new(DiffClass::Upgraded, "bash", "x86_64", "5.1-1", "5.2-1"),
            DiffRecord::new(DiffClass::LeftOnly, "zlib", "noarch", "1.3-1", ""),
        ]
    }

    #[test]
    fn header_row_layout() {
        let labels = ReportLabels::new("host-a", "host-b");
        let report = TableReporter::new()
            .generate(&sample_records(), &labels)
            .expect("table renders");
        let mut lines = report.lines();

        let header = lines.next().expect("header line");
        assert!(header.contains("package"));
        assert!(header.contains("arch"));
        assert!(header.contains("host-a"));
        assert!(header.contains("host-b"));
        // The symbol column has an empty header, so the line starts with
        // the padding before "package".
        assert!(header.starts_with(' '));
    }

    #[test]
    fn symbol_leads_each_record_row() {
        let labels = ReportLabels::new("left", "right");
        let report = TableReporter::new()
            .generate(&sample_records(), &labels)
            .expect("table renders");
        let lines: Vec<&str> = report.lines().collect();

        assert!(lines[2].starts_with("<<"));
        assert!(lines[3].starts_with("++"));
    }

    #[test]
    fn columns_align_across_rows() {
        let labels = ReportLabels::new("left", "right");
        let report = TableReporter::new()
            .generate(&sample_records(), &labels)
            .expect("table renders");
        let lines: Vec<&str> = report.lines().collect();

        let bash_col = lines[2].find("bash").expect("bash in row");
        let zlib_col = lines[3].find("zlib").expect("zlib in row");
        assert_eq!(bash_col, zlib_col);
    }

    #[test]
    fn empty_record_list_renders_header_only() {
        let labels = ReportLabels::new("left", "right");
        let report = TableReporter::new()
            .generate(&[], &labels)
            .expect("table renders");
        assert_eq!(report.lines().count(), 2);
    }

    #[test]
    fn no_trailing_whitespace() {
        let labels = ReportLabels::new("left", "right");
        let report = TableReporter::new()
            .generate(&sample_records(), &labels)
            .expect("table renders");
        for line in report.lines() {
            assert_eq!(line, line.trim_end());
        }
    }
}
