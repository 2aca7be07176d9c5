//! StreamingWalker - streams the tree without building it in memory

use std::io;
use std::path::Path;

use crate::error::{Result, ensure_root};
use crate::exclude::ExclusionSet;
use crate::file_utils::{display_name, list_dir};

use super::utils::descend_into;

/// Number of directories and files written by a walk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TreeCounts {
    pub directories: usize,
    pub files: usize,
}

/// Callback for streaming output - receives each node in traversal order.
pub trait TreeOutput {
    /// `depth` is 0 for the root, 1 for its direct children, and so on.
    fn output_node(&mut self, name: &str, depth: usize, is_dir: bool) -> io::Result<()>;

    fn finish(&mut self, _counts: TreeCounts) -> io::Result<()> {
        Ok(())
    }
}

/// Streaming tree walker that writes each directory, then its files, then
/// recurses into its subdirectories. Uses O(depth) memory.
pub struct StreamingWalker {
    exclusions: ExclusionSet,
}

impl StreamingWalker {
    pub fn new(exclusions: ExclusionSet) -> Self {
        Self { exclusions }
    }

    /// Walk `root` and stream every node to `output`.
    ///
    /// The root itself is always written, even when its name is excluded.
    pub fn walk<O: TreeOutput>(&self, root: &Path, output: &mut O) -> Result<TreeCounts> {
        ensure_root(root)?;

        let mut counts = TreeCounts::default();
        self.walk_dir(root, &display_name(root), 0, output, &mut counts)?;
        output.finish(counts)?;

        tracing::info!(
            root = %root.display(),
            directories = counts.directories,
            files = counts.files,
            "tree walk complete"
        );
        Ok(counts)
    }

    fn walk_dir<O: TreeOutput>(
        &self,
        path: &Path,
        name: &str,
        depth: usize,
        output: &mut O,
        counts: &mut TreeCounts,
    ) -> Result<()> {
        output.output_node(name, depth, true)?;
        counts.directories += 1;

        let listing = list_dir(path)?;

        for file in &listing.files {
            output.output_node(&file.name, depth + 1, false)?;
            counts.files += 1;
        }

        for dir in descend_into(&listing.dirs, &self.exclusions) {
            self.walk_dir(&dir.path, &dir.name, depth + 1, output, counts)?;
        }

        Ok(())
    }
}
