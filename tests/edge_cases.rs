//! Edge case and error handling tests for treeprint and treefind


use harness::{TestDir, read_output, run_treefind, run_treeprint};
use std::fs;
use std::os::unix::fs::{PermissionsExt, symlink};

// ============================================================================
// Exclusion Policies
// ============================================================================

#[test]
fn test_exclusion_policies_differ() {
    let dir = TestDir::new();
    dir.add_file("root/node_modules/hit_a.js", "a");
    dir.add_file("root/my_node_modules_backup/hit_b.js", "b");
    dir.add_file("root/src/hit_c.js", "c");

    let out = run_treeprint(dir.path(), &["--directory", "root", "--exclude", "node_modules"]);
    assert!(out.success);
    let tree = read_output(dir.path(), "directory_structure.txt");
    assert!(!tree.contains("├── node_modules\n"), "exact name excluded: {}", tree);
    assert!(!tree.contains("hit_a.js"));
    assert!(tree.contains("├── my_node_modules_backup\n"), "similar name kept: {}", tree);
    assert!(tree.contains("hit_b.js"));

    let out = run_treefind(dir.path(), &["hit", "--directory", "root", "--exclude", "node_modules"]);
    assert!(out.success);
    let found = read_output(dir.path(), "findTree.txt");
    assert!(!found.contains("hit_a.js"));
    assert!(!found.contains("hit_b.js"), "substring excluded: {}", found);
    assert!(found.contains("Filename: hit_c.js"));
}

#[test]
fn test_treeprint_root_printed_even_if_excluded() {
    let dir = TestDir::new();
    dir.add_file("node_modules/index.js", "");

    let out = run_treeprint(dir.path(), &["--directory", "node_modules"]);
    assert!(out.success);
    let text = read_output(dir.path(), "directory_structure.txt");
    assert_eq!(text, "├── node_modules\n│   ├── index.js\n");
}

#[test]
fn test_treefind_root_searched_even_if_excluded() {
    let dir = TestDir::new();
    dir.add_file("node_modules/index.js", "module.exports = {}");

    let out = run_treefind(dir.path(), &["index", "--directory", "node_modules"]);
    assert!(out.success);
    let text = read_output(dir.path(), "findTree.txt");
    assert!(text.contains("Filename: index.js"));
}

#[test]
fn test_treefind_empty_exclude_list() {
    let dir = TestDir::new();
    dir.add_file("root/.git/hit.txt", "inside git");

    let out = run_treefind(dir.path(), &["hit", "--directory", "root", "--exclude"]);
    assert!(out.success, "{}", out.stderr);
    let text = read_output(dir.path(), "findTree.txt");
    assert!(text.contains("inside git"), "nothing excluded: {}", text);
}

#[test]
fn test_treefind_empty_exclude_token_skips_all_subdirectories() {
    let dir = TestDir::new();
    dir.add_file("root/hit_top.txt", "top");
    dir.add_file("root/src/hit_nested.txt", "nested");

    let out = run_treefind(dir.path(), &["hit", "--directory", "root", "--exclude", ""]);
    assert!(out.success, "{}", out.stderr);
    let text = read_output(dir.path(), "findTree.txt");
    assert!(text.contains("Filename: hit_top.txt"));
    assert!(!text.contains("hit_nested.txt"), "every subdirectory contains \"\": {}", text);
}

#[test]
fn test_exclusions_apply_to_directories_only() {
    let dir = TestDir::new();
    dir.add_file("root/.DS_Store", "finder metadata");

    let out = run_treefind(dir.path(), &["ds_store", "--directory", "root"]);
    assert!(out.success);
    let text = read_output(dir.path(), "findTree.txt");
    assert!(text.contains("Filename: .DS_Store"));
}

// ============================================================================
// Missing and Unreadable Input
// ============================================================================

#[test]
fn test_treefind_missing_directory() {
    let dir = TestDir::new();

    let out = run_treefind(dir.path(), &["anything", "--directory", "does/not/exist"]);
    assert!(out.success, "missing root is reported, not a crash");
    assert!(
        out.stderr
            .contains("treefind: error: The directory 'does/not/exist' does not exist."),
        "stderr: {}",
        out.stderr
    );
    assert!(!out.stderr.contains("panicked"));
    assert!(!dir.path().join("findTree.txt").exists());
}

#[test]
fn test_treefind_plain_file_root_writes_empty_report() {
    let dir = TestDir::new();
    dir.add_file("plain.txt", "just a file");

    let out = run_treefind(dir.path(), &["plain", "--directory", "plain.txt"]);
    assert!(out.success, "stderr: {}", out.stderr);
    assert!(out.stdout.contains("Search results saved to findTree.txt"));
    assert_eq!(read_output(dir.path(), "findTree.txt"), "");
}

#[test]
fn test_treeprint_plain_file_root_is_an_error() {
    let dir = TestDir::new();
    dir.add_file("plain.txt", "just a file");

    let out = run_treeprint(dir.path(), &["--directory", "plain.txt"]);
    assert!(!out.success);
    assert!(out.stderr.contains("is not a directory"), "stderr: {}", out.stderr);
}

#[test]
fn test_treeprint_missing_directory() {
    let dir = TestDir::new();

    let out = run_treeprint(dir.path(), &["--directory", "nope"]);
    assert!(!out.success);
    assert!(out.stderr.contains("treeprint: error: The directory 'nope' does not exist."));
    assert!(!dir.path().join("directory_structure.txt").exists());
}

#[test]
fn test_treefind_invalid_utf8_is_inline() {
    let dir = TestDir::new();
    dir.add_bytes("src/data_1.bin", &[0xff, 0xfe, 0x00, 0x9f]);
    dir.add_file("src/data_2.txt", "second");

    let out = run_treefind(dir.path(), &["data", "--directory", "src"]);
    assert!(out.success);

    let text = read_output(dir.path(), "findTree.txt");
    assert!(
        text.contains("Filename: data_1.bin\nContents:\nCould not read file contents: "),
        "{}",
        text
    );
    assert!(text.contains("Filename: data_2.txt\nContents:\nsecond\n"));
}

#[test]
fn test_treefind_no_matches_writes_empty_file() {
    let dir = TestDir::new();
    dir.add_file("src/a.txt", "a");

    let out = run_treefind(dir.path(), &["zzz", "--directory", "src"]);
    assert!(out.success);
    assert_eq!(read_output(dir.path(), "findTree.txt"), "");
}

#[test]
fn test_treeprint_empty_directory() {
    let dir = TestDir::new();
    dir.add_dir("empty");

    let out = run_treeprint(dir.path(), &["--directory", "empty"]);
    assert!(out.success);
    assert_eq!(read_output(dir.path(), "directory_structure.txt"), "├── empty\n");
}

// ============================================================================
// Permission Edge Cases
// ============================================================================

#[test]
fn test_unreadable_subdirectory_is_fatal() {
    let dir = TestDir::new();
    dir.add_file("root/hit_top.txt", "top");
    let locked = dir.add_dir("root/locked");
    dir.add_file("root/locked/hit_hidden.txt", "hidden");

    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).expect("Failed to chmod");

    // Permission bits do not stop a privileged user; nothing to check then.
    if fs::read_dir(&locked).is_ok() {
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
        return;
    }

    let printed = run_treeprint(dir.path(), &["--directory", "root"]);
    let found = run_treefind(dir.path(), &["hit", "--directory", "root"]);

    // Restore so the temp dir can be cleaned up
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

    assert!(!printed.success, "treeprint should fail on unreadable subdirectory");
    assert!(
        printed.stderr.contains("treeprint: error: cannot read directory"),
        "stderr: {}",
        printed.stderr
    );
    assert!(!found.success, "treefind should fail on unreadable subdirectory");
    assert!(
        found.stderr.contains("treefind: error: cannot read directory"),
        "stderr: {}",
        found.stderr
    );
}

// ============================================================================
// Symlink Edge Cases
// ============================================================================

#[test]
fn test_symlink_to_parent_no_infinite_loop() {
    let dir = TestDir::new();
    dir.add_file("root/sub/file.txt", "x");
    symlink("..", dir.path().join("root/sub/parent")).expect("Failed to create symlink");

    let out = run_treeprint(dir.path(), &["--directory", "root"]);
    assert!(out.success, "treeprint should not loop on parent symlink");
    let text = read_output(dir.path(), "directory_structure.txt");
    assert_eq!(text, "├── root\n│   ├── sub\n│   │   ├── file.txt\n");

    let out = run_treefind(dir.path(), &["file", "--directory", "root"]);
    assert!(out.success, "treefind should not loop on parent symlink");
    let found = read_output(dir.path(), "findTree.txt");
    assert_eq!(found.matches("Filename: file.txt").count(), 1);
}

#[test]
fn test_broken_symlink_is_listed_and_reported() {
    let dir = TestDir::new();
    dir.add_dir("root");
    symlink("missing.txt", dir.path().join("root/broken_link.txt"))
        .expect("Failed to create broken symlink");

    let out = run_treeprint(dir.path(), &["--directory", "root"]);
    assert!(out.success);
    let text = read_output(dir.path(), "directory_structure.txt");
    assert!(text.contains("│   ├── broken_link.txt\n"));

    let out = run_treefind(dir.path(), &["broken", "--directory", "root"]);
    assert!(out.success);
    let found = read_output(dir.path(), "findTree.txt");
    assert!(found.contains("Could not read file contents: "));
}
