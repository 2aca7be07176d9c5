//! TreeWalker - builds the full tree in memory for JSON output

use std::path::Path;

use crate::error::{Result, ensure_root};
use crate::exclude::ExclusionSet;
use crate::file_utils::{display_name, list_dir};

use super::json_types::TreeNode;
use super::utils::descend_into;

/// Tree walker that builds the full tree in memory.
/// Visits entries in the same order and with the same exclusions as
/// `StreamingWalker`.
pub struct TreeWalker {
    exclusions: ExclusionSet,
}

impl TreeWalker {
    pub fn new(exclusions: ExclusionSet) -> Self {
        Self { exclusions }
    }

    pub fn walk(&self, root: &Path) -> Result<TreeNode> {
        ensure_root(root)?;
        self.walk_dir(root, display_name(root))
    }

    fn walk_dir(&self, path: &Path, name: String) -> Result<TreeNode> {
        let listing = list_dir(path)?;

        let mut children: Vec<TreeNode> = listing
            .files
            .iter()
            .map(|f| TreeNode::File {
                name: f.name.clone(),
                path: f.path.clone(),
            })
            .collect();

        for dir in descend_into(&listing.dirs, &self.exclusions) {
            children.push(self.walk_dir(&dir.path, dir.name.clone())?);
        }

        Ok(TreeNode::Dir {
            name,
            path: path.to_path_buf(),
            children,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_walk_builds_ordered_tree() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("src")).unwrap();
        fs::create_dir_all(dir.path().join(".git/objects")).unwrap();
        fs::write(dir.path().join("Cargo.toml"), "").unwrap();
        fs::write(dir.path().join("src/lib.rs"), "").unwrap();

        let tree = TreeWalker::new(ExclusionSet::new([".git"]))
            .walk(dir.path())
            .unwrap();

        assert!(tree.is_dir());
        let names: Vec<_> = tree.children().iter().map(|c| c.name()).collect();
        assert_eq!(names, vec!["Cargo.toml", "src"]);

        let src = &tree.children()[1];
        assert!(src.is_dir());
        assert_eq!(src.children()[0].name(), "lib.rs");
        assert!(!src.children()[0].is_dir());
    }

    #[test]
    fn test_walk_missing_root() {
        let dir = TempDir::new().unwrap();
        let result = TreeWalker::new(ExclusionSet::default()).walk(&dir.path().join("nope"));
        assert!(result.is_err());
    }
}
