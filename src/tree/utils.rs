//! Shared helpers for the tree walkers

use crate::exclude::ExclusionSet;
use crate::file_utils::Entry;

/// One level of indentation in the text rendering.
pub const INDENT_UNIT: &str = "│   ";

/// Marker written before every name.
pub const BRANCH: &str = "├── ";

/// Indentation for an entry at `depth`.
pub fn indent(depth: usize) -> String {
    INDENT_UNIT.repeat(depth)
}

/// Subdirectories the printer descends into: those whose name is not
/// exactly an excluded name.
pub fn descend_into<'a>(
    dirs: &'a [Entry],
    exclusions: &'a ExclusionSet,
) -> impl Iterator<Item = &'a Entry> + 'a {
    dirs.iter().filter(move |d| {
        let excluded = exclusions.excludes_exact(&d.name);
        if excluded {
            tracing::debug!(path = %d.path.display(), "excluded directory");
        }
        !excluded
    })
}
