//! treefind - print a directory tree or find files by keyword

pub mod error;
pub mod exclude;
pub mod find;
mod file_utils;
pub mod logging;
pub mod output;
pub mod tree;

#[cfg(feature = "test-utils")]
pub mod test_utils;

pub use error::{Error, Result};
pub use exclude::ExclusionSet;
pub use find::{FindSummary, Finder, FinderConfig, MatchRecord, Matches};
pub use output::{PlainTextFormatter, write_json};
pub use tree::{PrinterConfig, StreamingWalker, TreeCounts, TreeNode, TreeOutput, TreeWalker};
