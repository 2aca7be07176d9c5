//! Lazy depth-first search for files whose name contains a keyword

use std::collections::VecDeque;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::exclude::ExclusionSet;
use crate::file_utils::{Entry, list_dir, read_text};

/// A file whose name matched the keyword, with its contents already read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchRecord {
    /// Directory holding the file, as reached from the root.
    pub folder: PathBuf,
    pub file_name: String,
    pub path: PathBuf,
    /// File text, or the message of the error that stopped it being read.
    pub contents: std::result::Result<String, String>,
}

/// Case-insensitive substring match of `keyword_lower` against a file name.
pub fn name_matches(file_name: &str, keyword_lower: &str) -> bool {
    file_name.to_lowercase().contains(keyword_lower)
}

/// Iterator over the matches below a root, in traversal order: the files of
/// a directory, then each of its subdirectories in turn.
///
/// Directories are listed only when the iterator reaches them. An error
/// listing a directory is yielded once and ends the iteration.
pub struct Matches<'a> {
    keyword: String,
    exclusions: &'a ExclusionSet,
    pending_dirs: Vec<PathBuf>,
    current: Option<(PathBuf, VecDeque<Entry>)>,
    failed: bool,
}

impl<'a> Matches<'a> {
    pub fn new(root: &Path, keyword: &str, exclusions: &'a ExclusionSet) -> Self {
        Self {
            keyword: keyword.to_lowercase(),
            exclusions,
            pending_dirs: vec![root.to_path_buf()],
            current: None,
            failed: false,
        }
    }

    /// List the next pending directory, queueing its files and pushing its
    /// surviving subdirectories so the first one is visited next.
    fn open_next_dir(&mut self) -> Option<Result<()>> {
        let dir = self.pending_dirs.pop()?;
        let listing = match list_dir(&dir) {
            Ok(l) => l,
            Err(e) => return Some(Err(e)),
        };

        for sub in listing.dirs.into_iter().rev() {
            if self.exclusions.excludes_substring(&sub.name) {
                tracing::debug!(path = %sub.path.display(), "excluded directory");
                continue;
            }
            self.pending_dirs.push(sub.path);
        }
        self.current = Some((dir, listing.files.into()));
        Some(Ok(()))
    }
}

impl Iterator for Matches<'_> {
    type Item = Result<MatchRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        loop {
            if let Some((folder, files)) = self.current.as_mut() {
                while let Some(file) = files.pop_front() {
                    if !name_matches(&file.name, &self.keyword) {
                        continue;
                    }
                    tracing::debug!(path = %file.path.display(), "matched");
                    let contents = read_text(&file.path);
                    return Some(Ok(MatchRecord {
                        folder: folder.clone(),
                        file_name: file.name,
                        path: file.path,
                        contents,
                    }));
                }
                self.current = None;
            }

            match self.open_next_dir()? {
                Ok(()) => continue,
                Err(e) => {
                    self.failed = true;
                    return Some(Err(e));
                }
            }
        }
    }
}
