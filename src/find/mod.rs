//! Keyword file finder
//!
//! Walks a directory depth-first and reports every file whose name contains
//! a keyword (case-insensitive), with its full contents. A subdirectory is
//! skipped when its name equals or contains any excluded name; this is
//! broader than the tree printer's exact-name rule.

mod config;
mod matcher;
mod report;

pub use config::{APPENDIX_FILE, DEFAULT_DIRECTORY, DEFAULT_EXCLUSIONS, DEFAULT_OUTPUT, FinderConfig};
pub use matcher::{MatchRecord, Matches, name_matches};
pub use report::{FindSummary, Finder, SEPARATOR_WIDTH, write_record};
