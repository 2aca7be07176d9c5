//! In-memory tree for JSON output

use std::path::PathBuf;

use serde::Serialize;

use super::streaming::TreeCounts;

/// A directory tree built in memory by `TreeWalker`.
/// For plain text output use `StreamingWalker`, which never holds the tree.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TreeNode {
    File {
        name: String,
        path: PathBuf,
    },
    Dir {
        name: String,
        path: PathBuf,
        children: Vec<TreeNode>,
    },
}

impl TreeNode {
    pub fn name(&self) -> &str {
        match self {
            TreeNode::File { name, .. } => name,
            TreeNode::Dir { name, .. } => name,
        }
    }

    pub fn is_dir(&self) -> bool {
        matches!(self, TreeNode::Dir { .. })
    }

    pub fn children(&self) -> &[TreeNode] {
        match self {
            TreeNode::File { .. } => &[],
            TreeNode::Dir { children, .. } => children,
        }
    }

    /// Count the directories (including this one) and files in the tree.
    pub fn counts(&self) -> TreeCounts {
        match self {
            TreeNode::File { .. } => TreeCounts {
                directories: 0,
                files: 1,
            },
            TreeNode::Dir { children, .. } => {
                children.iter().map(TreeNode::counts).fold(
                    TreeCounts {
                        directories: 1,
                        files: 0,
                    },
                    |acc, c| TreeCounts {
                        directories: acc.directories + c.directories,
                        files: acc.files + c.files,
                    },
                )
            }
        }
    }
}
