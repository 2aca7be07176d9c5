//! Directory tree printer
//!
//! Two walkers share the same traversal order and exclusion rule:
//!
//! - `StreamingWalker`: streams nodes to a `TreeOutput`, used for text output
//! - `TreeWalker`: builds a `TreeNode` in memory, required for JSON output
//!
//! Subdirectories are skipped only when their name exactly matches an
//! excluded name. The root is always printed.

mod config;
mod json_types;
mod streaming;
mod utils;
mod walker;

pub use config::{DEFAULT_EXCLUSIONS, DEFAULT_OUTPUT, DEFAULT_ROOT, PrinterConfig};
pub use json_types::TreeNode;
pub use streaming::{StreamingWalker, TreeCounts, TreeOutput};
pub use utils::{BRANCH, INDENT_UNIT, indent};
pub use walker::TreeWalker;

use std::fs::File;
use std::io::{BufWriter, Write};

use crate::error::{Result, ensure_root};
use crate::output::{PlainTextFormatter, write_json};

/// Render `config.root` into `config.output`.
///
/// The root is checked before the output file is created, so a missing root
/// leaves no file behind.
pub fn print_tree(config: &PrinterConfig) -> Result<TreeCounts> {
    ensure_root(&config.root)?;

    let mut sink = BufWriter::new(File::create(&config.output)?);
    let counts = if config.json {
        let tree = TreeWalker::new(config.exclusions.clone()).walk(&config.root)?;
        write_json(&tree, &mut sink)?;
        tree.counts()
    } else {
        let mut formatter = PlainTextFormatter::new(&mut sink);
        StreamingWalker::new(config.exclusions.clone()).walk(&config.root, &mut formatter)?
    };
    sink.flush()?;

    Ok(counts)
}
