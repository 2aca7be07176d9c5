//! Tree output formatting
//!
//! - `streaming` - indented text lines, written as the walker visits nodes
//! - `json` - pretty JSON of a tree built in memory

mod json;
mod streaming;

pub use json::write_json;
pub use streaming::PlainTextFormatter;
