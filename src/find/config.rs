//! Configuration for the keyword finder

use std::path::PathBuf;

use crate::exclude::ExclusionSet;

/// Directory scanned when none is given.
pub const DEFAULT_DIRECTORY: &str = "hosting/src";

/// File the report is written to when none is given.
pub const DEFAULT_OUTPUT: &str = "findTree.txt";

/// Directory names (and name fragments) skipped by default.
pub const DEFAULT_EXCLUSIONS: [&str; 5] = ["node_modules", "*.lock", ".git", ".svn", ".DS_Store"];

/// File appended to the report when it sits directly under the root.
pub const APPENDIX_FILE: &str = "app.jsx";

/// Configuration for a keyword finder run.
#[derive(Debug, Clone)]
pub struct FinderConfig {
    pub root: PathBuf,
    /// Matched case-insensitively as a substring of each file name.
    pub keyword: String,
    /// A directory is skipped if its name equals or contains any of these.
    pub exclusions: ExclusionSet,
    pub output: PathBuf,
}

impl FinderConfig {
    /// Config for `keyword` with every other field at its default.
    pub fn new(keyword: impl Into<String>) -> Self {
        Self {
            root: PathBuf::from(DEFAULT_DIRECTORY),
            keyword: keyword.into(),
            exclusions: ExclusionSet::new(DEFAULT_EXCLUSIONS),
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}
