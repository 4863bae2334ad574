//! Archive and directory sources.
//!
//! Support bundles routinely arrive as tar archives (plain or gzipped) or
//! as already-unpacked directory trees. Both are scanned for the first
//! member whose content sniffs as a package inventory; the scan order is
//! the archive's member order, or a name-sorted walk for directories, so
//! repeated runs pick the same file.

use super::{listing, InventoryListing, SourceFormat};
use crate::error::{PkgDeltaError, Result, SourceErrorKind};
use crate::model::PackageIdentity;
use flate2::read::GzDecoder;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tar::Archive;
use walkdir::WalkDir;

/// Search a directory tree for the first file that parses as an inventory.
pub fn load_directory(root: &Path) -> Result<InventoryListing> {
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.map_err(|err| {
            PkgDeltaError::source(
                root.display().to_string(),
                SourceErrorKind::Walk(err.to_string()),
            )
        })?;
        if !entry.file_type().is_file() {
            continue;
        }
        // Binary or non-UTF-8 files are simply not inventories.
        let Ok(content) = std::fs::read_to_string(entry.path()) else {
            tracing::debug!("skipping unreadable file {}", entry.path().display());
            continue;
        };
        if looks_like_inventory(&content) {
            tracing::debug!("using inventory file {}", entry.path().display());
            return Ok(listing::parse_content(
                &content,
                &listing::file_label(entry.path()),
            ));
        }
    }
    Err(PkgDeltaError::source(
        root.display().to_string(),
        SourceErrorKind::NoInventory,
    ))
}

/// Search a tar archive (gzipped or not) for the first member that parses
/// as an inventory. Members are inspected in place; nothing is unpacked
/// to disk.
pub fn load_archive(path: &Path) -> Result<InventoryListing> {
    let file = File::open(path).map_err(|err| PkgDeltaError::io(path, err))?;
    if is_gzipped(path) {
        scan_members(Archive::new(GzDecoder::new(file)), path)
    } else {
        scan_members(Archive::new(file), path)
    }
}

/// Archive file-name shapes handled by [`load_archive`].
pub fn is_archive_path(path: &Path) -> bool {
    let name = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("");
    name.ends_with(".tar") || name.ends_with(".tar.gz") || name.ends_with(".tgz")
}

fn is_gzipped(path: &Path) -> bool {
    let name = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("");
    name.ends_with(".tar.gz") || name.ends_with(".tgz")
}

fn scan_members<R: Read>(mut archive: Archive<R>, path: &Path) -> Result<InventoryListing> {
    let entries = archive.entries().map_err(|err| {
        PkgDeltaError::source(
            path.display().to_string(),
            SourceErrorKind::Archive(err.to_string()),
        )
    })?;

    for entry in entries {
        let mut entry = entry.map_err(|err| {
            PkgDeltaError::source(
                path.display().to_string(),
                SourceErrorKind::Archive(err.to_string()),
            )
        })?;
        if !entry.header().entry_type().is_file() {
            continue;
        }
        let mut content = String::new();
        if entry.read_to_string(&mut content).is_err() {
            continue;
        }
        if looks_like_inventory(&content) {
            let label = entry
                .path()
                .ok()
                .map(|member| listing::file_label(&member))
                .unwrap_or_else(|| listing::file_label(path));
            return Ok(listing::parse_content(&content, &label));
        }
    }

    Err(PkgDeltaError::source(
        path.display().to_string(),
        SourceErrorKind::NoInventory,
    ))
}

/// Content sniff: a report with an `rpm -qa` section, or a plain listing
/// whose first payload line parses as a package descriptor.
fn looks_like_inventory(content: &str) -> bool {
    match listing::detect_format(content) {
        SourceFormat::SupportReport => listing::has_package_section(content),
        SourceFormat::PlainListing => content
            .lines()
            .map(str::trim)
            .find(|line| !line.is_empty() && !line.starts_with('#'))
            .is_some_and(|line| PackageIdentity::parse(line).is_ok()),
    }
}
