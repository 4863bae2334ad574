//! Input acquisition for package inventories.
//!
//! Everything here is boundary glue: a path is resolved once into a
//! closed [`PackageSource`] variant, and loading it produces an
//! [`InventoryListing`] — a display label plus raw descriptor strings.
//! The comparison core consumes only that contract and is agnostic to
//! where the strings came from (plain listing, report section, archive
//! member). I/O failures propagate as errors and end the run; the core
//! itself never touches the filesystem.

mod archive;
mod listing;

pub use listing::{detect_format, scan_hostname, SourceFormat};

use crate::error::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// One side's raw inventory: a display label and the descriptor strings,
/// one per installed package occurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryListing {
    pub label: String,
    pub descriptors: Vec<String>,
}

/// A resolved inventory source.
///
/// Resolution inspects the path once; loading then follows the chosen
/// variant without re-sniffing. The file variant still distinguishes
/// plain listings from report bundles by content, see [`SourceFormat`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PackageSource {
    /// A single text file: plain listing or support report.
    File(PathBuf),
    /// A directory tree searched for an inventory file.
    Directory(PathBuf),
    /// A tar archive (`.tar`, `.tar.gz`, `.tgz`) searched for an
    /// inventory member.
    Archive(PathBuf),
}

impl PackageSource {
    /// Resolve a path into a source variant.
    pub fn resolve(path: &Path) -> Result<Self> {
        let metadata = fs::metadata(path).map_err(|err| crate::error::PkgDeltaError::io(path, err))?;
        if metadata.is_dir() {
            Ok(Self::Directory(path.to_path_buf()))
        } else if archive::is_archive_path(path) {
            Ok(Self::Archive(path.to_path_buf()))
        } else {
            Ok(Self::File(path.to_path_buf()))
        }
    }

    /// Load the inventory behind this source.
    pub fn load(&self) -> Result<InventoryListing> {
        match self {
            Self::File(path) => {
                let content =
                    fs::read_to_string(path).map_err(|err| crate::error::PkgDeltaError::io(path, err))?;
                Ok(listing::parse_content(&content, &listing::file_label(path)))
            }
            Self::Directory(path) => archive::load_directory(path),
            Self::Archive(path) => archive::load_archive(path),
        }
    }

    /// The path this source was resolved from.
    pub fn path(&self) -> &Path {
        match self {
            Self::File(path) | Self::Directory(path) | Self::Archive(path) => path,
        }
    }
}
