//! Batch parsing of a directory of flat files
//!
//! Files are discovered in the top level of a directory and parsed one after
//! another. A file that fails (missing, unreadable, malformed PUBMED line) is
//! recorded in the [`BatchReport`] and the remaining files are still parsed.

use crate::config::ParserConfig;
use crate::models::Entry;
use crate::parser::FlatFileParser;
use crate::source::{is_flat_file, open_lines};
use gbx_common::{GbxError, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

/// List the flat files directly inside `dir`, sorted by file name.
///
/// Anything else in the directory is skipped with a warning.
pub fn discover_files(dir: &Path, extensions: &[String]) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(GbxError::InvalidDirectory(dir.to_path_buf()));
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1).sort_by_file_name() {
        let entry = entry.map_err(|e| GbxError::Io(e.into()))?;
        let path = entry.path();

        if entry.file_type().is_file() && is_flat_file(path, extensions) {
            files.push(path.to_path_buf());
        } else {
            warn!(path = %path.display(), "Skipping: not a GenBank flat file");
        }
    }

    debug!(dir = %dir.display(), files = files.len(), "Discovered flat files");
    Ok(files)
}

/// A file that could not be parsed.
#[derive(Debug)]
pub struct FileFailure {
    pub path: PathBuf,
    pub error: GbxError,
}

/// Outcome of parsing a set of files.
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Entries of every successfully parsed file, in file order
    pub entries: Vec<Entry>,
    pub parsed_files: usize,
    pub failures: Vec<FileFailure>,
}

impl BatchReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    /// Entries of the batch; in strict mode the first failure becomes the error.
    pub fn into_result(self, strict: bool) -> Result<Vec<Entry>> {
        if strict {
            if let Some(failure) = self.failures.into_iter().next() {
                return Err(failure.error);
            }
        }
        Ok(self.entries)
    }
}

/// Parses files independently and gathers their entries.
#[derive(Debug, Clone)]
pub struct BatchParser {
    parser: FlatFileParser,
    config: ParserConfig,
}

impl Default for BatchParser {
    fn default() -> Self {
        Self::new(&ParserConfig::default())
    }
}

impl BatchParser {
    pub fn new(config: &ParserConfig) -> Self {
        Self {
            parser: FlatFileParser::new(config),
            config: config.clone(),
        }
    }

    /// Parse one file from disk.
    pub fn parse_path(&self, path: &Path) -> Result<Vec<Entry>> {
        let reader = open_lines(path)?;
        self.parser.parse_reader(reader)
    }

    /// Parse every file in `paths`, isolating per-file failures.
    pub fn parse_all(&self, paths: &[PathBuf]) -> BatchReport {
        let mut report = BatchReport::default();

        for path in paths {
            match self.parse_path(path) {
                Ok(mut entries) => {
                    debug!(path = %path.display(), entries = entries.len(), "Parsed file");
                    report.entries.append(&mut entries);
                    report.parsed_files += 1;
                },
                Err(error) => {
                    warn!(path = %path.display(), error = %error, "Failed to parse file");
                    report.failures.push(FileFailure {
                        path: path.clone(),
                        error,
                    });
                },
            }
        }

        info!(
            parsed = report.parsed_files,
            failed = report.failures.len(),
            entries = report.entries.len(),
            "Batch complete"
        );
        report
    }

    /// Discover the flat files in `dir` and parse them.
    pub fn parse_dir(&self, dir: &Path) -> Result<BatchReport> {
        self.config.validate()?;
        let files = discover_files(dir, &self.config.extensions)?;
        Ok(self.parse_all(&files))
    }
}
