//! Report writer for the keyword finder

use std::fs::File;
use std::io::{BufWriter, Write};

use crate::error::{Result, ensure_exists};
use crate::file_utils::read_text;

use super::config::{APPENDIX_FILE, FinderConfig};
use super::matcher::{MatchRecord, Matches};

/// Width of the `=` line written after each match.
pub const SEPARATOR_WIDTH: usize = 80;

/// What a finder run wrote.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FindSummary {
    pub matches: usize,
    /// Matches whose contents could not be read
    pub unreadable: usize,
    /// Whether the `app.jsx` section was written
    pub appendix: bool,
}

/// Scans a directory for files matching a keyword and writes a report.
pub struct Finder {
    config: FinderConfig,
}

impl Finder {
    pub fn new(config: FinderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &FinderConfig {
        &self.config
    }

    /// Lazily iterate over the matches below the configured root.
    pub fn matches(&self) -> Matches<'_> {
        Matches::new(&self.config.root, &self.config.keyword, &self.config.exclusions)
    }

    /// Write every match, then the `app.jsx` section if that file exists
    /// directly under the root.
    ///
    /// A root that exists but is not a directory has no matches and yields
    /// an empty report.
    pub fn run<W: Write>(&self, out: &mut W) -> Result<FindSummary> {
        ensure_exists(&self.config.root)?;

        let mut summary = FindSummary::default();
        if !self.config.root.is_dir() {
            tracing::debug!(root = %self.config.root.display(), "root is not a directory");
            return Ok(summary);
        }

        for record in self.matches() {
            let record = record?;
            if let Err(reason) = &record.contents {
                tracing::warn!(path = %record.path.display(), %reason, "could not read file");
                summary.unreadable += 1;
            }
            write_record(out, &record)?;
            summary.matches += 1;
        }

        summary.appendix = self.write_appendix(out)?;

        tracing::info!(
            root = %self.config.root.display(),
            keyword = %self.config.keyword,
            matches = summary.matches,
            unreadable = summary.unreadable,
            "search complete"
        );
        Ok(summary)
    }

    /// Run into `config.output`. The root is checked first, so a missing root
    /// creates no file.
    pub fn run_to_file(&self) -> Result<FindSummary> {
        ensure_exists(&self.config.root)?;

        let mut sink = BufWriter::new(File::create(&self.config.output)?);
        let summary = self.run(&mut sink)?;
        sink.flush()?;
        Ok(summary)
    }

    fn write_appendix<W: Write>(&self, out: &mut W) -> Result<bool> {
        let path = self.config.root.join(APPENDIX_FILE);
        if !path.exists() {
            return Ok(false);
        }

        writeln!(out, "Contents of {}:", APPENDIX_FILE)?;
        match read_text(&path) {
            Ok(contents) => writeln!(out, "{}", contents)?,
            Err(reason) => {
                tracing::warn!(path = %path.display(), %reason, "could not read appendix");
                writeln!(out, "Could not read {} contents: {}", APPENDIX_FILE, reason)?
            }
        }
        Ok(true)
    }
}

/// Write one match block followed by the separator line.
pub fn write_record<W: Write>(out: &mut W, record: &MatchRecord) -> std::io::Result<()> {
    writeln!(out, "Folder: {}", record.folder.display())?;
    writeln!(out, "Filename: {}", record.file_name)?;
    writeln!(out, "Contents:")?;
    match &record.contents {
        Ok(contents) => writeln!(out, "{}", contents)?,
        Err(reason) => writeln!(out, "Could not read file contents: {}", reason)?,
    }
    write!(out, "\n{}\n\n", "=".repeat(SEPARATOR_WIDTH))
}
