//! Error types shared by the tree printer and the keyword finder

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Fatal errors. Per-file read failures in the finder are not errors; they
/// are written inline into the report.
#[derive(Error, Debug)]
pub enum Error {
    #[error("The directory '{}' does not exist.", .0.display())]
    RootNotFound(PathBuf),
    #[error("'{}' is not a directory", .0.display())]
    NotADirectory(PathBuf),
    #[error("cannot read directory '{}': {source}", .path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("error writing output: {0}")]
    Output(#[from] io::Error),
    #[error("error serializing tree: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn read_dir(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::ReadDir {
            path: path.into(),
            source,
        }
    }
}

/// Check only that `root` exists. Used by the finder, which treats a
/// non-directory root as a directory with no matches.
pub fn ensure_exists(root: &std::path::Path) -> Result<()> {
    if !root.exists() {
        return Err(Error::RootNotFound(root.to_path_buf()));
    }
    Ok(())
}

/// Check that `root` exists and is a directory.
pub fn ensure_root(root: &std::path::Path) -> Result<()> {
    if !root.exists() {
        return Err(Error::RootNotFound(root.to_path_buf()));
    }
    if !root.is_dir() {
        return Err(Error::NotADirectory(root.to_path_buf()));
    }
    Ok(())
}
