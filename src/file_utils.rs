//! Shared filesystem helpers for the printer and the finder
//!
//! Both traversals read a directory in one go, split its entries into files
//! and subdirectories, and sort each group by name.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// A named entry inside a listed directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub name: String,
    pub path: PathBuf,
}

/// Files and subdirectories of one directory, each sorted by name.
#[derive(Debug, Default)]
pub struct DirListing {
    pub files: Vec<Entry>,
    pub dirs: Vec<Entry>,
}

/// Read and classify the entries of `path`.
///
/// Symlinks to directories are dropped so a walk can never loop. Every other
/// non-directory entry (regular files, broken symlinks, sockets) is a file.
pub fn list_dir(path: &Path) -> Result<DirListing> {
    let entries = fs::read_dir(path).map_err(|e| Error::read_dir(path, e))?;

    let mut listing = DirListing::default();
    for entry in entries {
        let entry = entry.map_err(|e| Error::read_dir(path, e))?;
        let entry_path = entry.path();
        let name = entry.file_name().to_string_lossy().to_string();

        let file_type = match entry.file_type() {
            Ok(t) => t,
            Err(e) => return Err(Error::read_dir(&entry_path, e)),
        };

        if file_type.is_dir() {
            listing.dirs.push(Entry {
                name,
                path: entry_path,
            });
        } else if file_type.is_symlink() && entry_path.is_dir() {
            tracing::debug!(path = %entry_path.display(), "skipping directory symlink");
        } else {
            listing.files.push(Entry {
                name,
                path: entry_path,
            });
        }
    }

    listing.files.sort_by(|a, b| a.name.cmp(&b.name));
    listing.dirs.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(listing)
}

/// Display name of a path: its last component, or the path itself for roots
/// like `.` or `/`.
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

/// Read a whole file as UTF-8, turning any failure into its message.
pub fn read_text(path: &Path) -> std::result::Result<String, String> {
    fs::read_to_string(path).map_err(|e| e.to_string())
}
