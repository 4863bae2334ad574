//! Plain listings and support-report bundles.
//!
//! Two textual formats carry package inventories:
//!
//! - a plain listing, one NVRA descriptor per line (`rpm -qa` output);
//! - a support-report bundle, a concatenation of command outputs where
//!   each section starts with a `#==[ ... ]==#` banner followed by a
//!   comment line naming the command that produced the body.
//!
//! Detection is content-based: the presence of a section banner makes a
//! file a report, anything else is treated as a plain listing.

use super::InventoryListing;
use std::path::Path;

/// Section banner prefix used by support-report bundles.
const SECTION_MARKER: &str = "#==[";

/// Textual format of an inventory file, decided by content probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    /// One descriptor per line.
    PlainListing,
    /// Sectioned support-report bundle.
    SupportReport,
}

/// Sniff the format of file content.
pub fn detect_format(content: &str) -> SourceFormat {
    if content
        .lines()
        .any(|line| line.trim_start().starts_with(SECTION_MARKER))
    {
        SourceFormat::SupportReport
    } else {
        SourceFormat::PlainListing
    }
}

/// Parse already-read file content into a listing.
///
/// For reports the label comes from the first `Hostname:` line; plain
/// listings (and reports without one) fall back to the given label.
pub fn parse_content(content: &str, fallback_label: &str) -> InventoryListing {
    match detect_format(content) {
        SourceFormat::PlainListing => InventoryListing {
            label: fallback_label.to_string(),
            descriptors: plain_lines(content),
        },
        SourceFormat::SupportReport => InventoryListing {
            label: scan_hostname(content).unwrap_or_else(|| fallback_label.to_string()),
            descriptors: report_descriptors(content),
        },
    }
}

/// Whether report content actually carries an `rpm -qa` section.
pub fn has_package_section(content: &str) -> bool {
    !report_descriptors(content).is_empty()
}

/// Scan for the machine label. First `Hostname:` line wins.
pub fn scan_hostname(content: &str) -> Option<String> {
    content.lines().find_map(|line| {
        line.trim()
            .strip_prefix("Hostname:")
            .map(|rest| rest.trim().to_string())
            .filter(|value| !value.is_empty())
    })
}

/// Display label for a file path: the file stem.
pub fn file_label(path: &Path) -> String {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("inventory")
        .to_string()
}

fn plain_lines(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(String::from)
        .collect()
}

/// Descriptor lines from the body of the first section whose command line
/// invokes `rpm -qa`.
fn report_descriptors(content: &str) -> Vec<String> {
    let mut descriptors = Vec::new();
    let mut in_package_section = false;

    let mut lines = content.lines().peekable();
    while let Some(line) = lines.next() {
        let trimmed = line.trim();

        if trimmed.starts_with(SECTION_MARKER) {
            if in_package_section && !descriptors.is_empty() {
                break;
            }
            // The command line follows the banner as a comment.
            in_package_section =
                matches!(lines.peek(), Some(next) if is_package_query(next));
            continue;
        }
        if !in_package_section || trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        descriptors.push(trimmed.to_string());
    }

    descriptors
}

fn is_package_query(line: &str) -> bool {
    let command = line.trim().trim_start_matches('#').trim();
    command.contains("rpm -qa")
}
