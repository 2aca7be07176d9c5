//! Configuration for the tree printer

use std::path::PathBuf;

use crate::exclude::ExclusionSet;

/// Root directory printed when none is given.
pub const DEFAULT_ROOT: &str = ".";

/// File the rendering is written to when none is given.
pub const DEFAULT_OUTPUT: &str = "directory_structure.txt";

/// Directory names skipped by default.
pub const DEFAULT_EXCLUSIONS: [&str; 5] = ["node_modules", "yarn.lock", ".git", ".svn", ".DS_Store"];

/// Configuration for a tree printer run.
#[derive(Debug, Clone)]
pub struct PrinterConfig {
    pub root: PathBuf,
    /// Subdirectories whose name is exactly one of these are not descended into.
    pub exclusions: ExclusionSet,
    pub output: PathBuf,
    /// Write the tree as JSON instead of indented text
    pub json: bool,
}

impl Default for PrinterConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from(DEFAULT_ROOT),
            exclusions: ExclusionSet::new(DEFAULT_EXCLUSIONS),
            output: PathBuf::from(DEFAULT_OUTPUT),
            json: false,
        }
    }
}
