//! JSON output formatting

use std::io::Write;

use crate::error::Result;
use crate::tree::TreeNode;

/// Write the tree as pretty-printed JSON, followed by a newline.
pub fn write_json<W: Write>(node: &TreeNode, out: &mut W) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, node)?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_write_json_shape() {
        let tree = TreeNode::Dir {
            name: "root".to_string(),
            path: PathBuf::from("root"),
            children: vec![TreeNode::File {
                name: "a.txt".to_string(),
                path: PathBuf::from("root/a.txt"),
            }],
        };

        let mut buf = Vec::new();
        write_json(&tree, &mut buf).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();

        assert_eq!(value["type"], "dir");
        assert_eq!(value["name"], "root");
        assert_eq!(value["children"][0]["type"], "file");
        assert_eq!(value["children"][0]["path"], "root/a.txt");
    }
}
