//! Directory exclusion sets
//!
//! The printer and the finder prune traversal with the same list of names but
//! with different matching rules:
//!
//! - `excludes_exact`: the directory name equals one of the names (printer)
//! - `excludes_substring`: the directory name equals one of the names, or
//!   contains one of them (finder)
//!
//! Names are literal. `*.lock` only matches a directory called `*.lock`.

/// A list of literal directory names used to prune traversal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExclusionSet {
    names: Vec<String>,
}

impl ExclusionSet {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// True if `name` is exactly one of the excluded names.
    pub fn excludes_exact(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// True if `name` is one of the excluded names or contains one as a substring.
    pub fn excludes_substring(&self, name: &str) -> bool {
        self.excludes_exact(name) || self.names.iter().any(|n| name.contains(n.as_str()))
    }
}
