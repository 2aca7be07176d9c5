//! Streaming text formatter
//!
//! `PlainTextFormatter` writes one `├── name` line per node straight to its
//! sink, for use with `StreamingWalker`.

use std::io::{self, Write};

use crate::tree::{BRANCH, TreeOutput, indent};

/// Writes the indented tree rendering to any `Write` sink.
///
/// Every node gets `"│   "` repeated by its depth, then `"├── "`, then its
/// name. The sink is not flushed; the caller owns it.
pub struct PlainTextFormatter<W: Write> {
    out: W,
}

impl<W: Write> PlainTextFormatter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> TreeOutput for PlainTextFormatter<W> {
    fn output_node(&mut self, name: &str, depth: usize, _is_dir: bool) -> io::Result<()> {
        writeln!(self.out, "{}{}{}", indent(depth), BRANCH, name)
    }
}
