//! Output formatting and sinks
//!
//! Query results are written either to stdout or appended to a file.

use crate::error::{CliError, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use tracing::debug;

/// Output format of query results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One result per line
    #[default]
    Text,
    /// A single JSON array
    Json,
}

/// Render `results` in `format`, newline-terminated.
pub fn format_results(results: &[String], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(results.iter().map(|line| format!("{line}\n")).collect()),
        OutputFormat::Json => Ok(format!("{}\n", serde_json::to_string_pretty(results)?)),
    }
}

/// Write `results` to `writer`.
pub fn write_results<W: Write>(writer: &mut W, results: &[String], format: OutputFormat) -> Result<()> {
    writer.write_all(format_results(results, format)?.as_bytes())?;
    Ok(())
}

/// Append `results` to the file at `path`, creating it if needed.
pub fn append_to_file(path: &Path, results: &[String], format: OutputFormat) -> Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| CliError::output(path, e))?;

    let formatted = format_results(results, format)?;
    file.write_all(formatted.as_bytes())
        .map_err(|e| CliError::output(path, e))?;

    debug!(path = %path.display(), results = results.len(), "Appended results to file");
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn results() -> Vec<String> {
        vec!["Jones,K.".to_string(), "Smith,J.".to_string()]
    }

    #[test]
    fn test_text_format() {
        assert_eq!(
            format_results(&results(), OutputFormat::Text).unwrap(),
            "Jones,K.\nSmith,J.\n"
        );
        assert_eq!(format_results(&[], OutputFormat::Text).unwrap(), "");
    }

    #[test]
    fn test_json_format() {
        let rendered = format_results(&results(), OutputFormat::Json).unwrap();
        let parsed: Vec<String> = serde_json::from_str(&rendered).unwrap();
        assert_eq!(parsed, results());
    }

    #[test]
    fn test_append_creates_then_appends() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.txt");

        append_to_file(&path, &results(), OutputFormat::Text).unwrap();
        append_to_file(&path, &["Zhou,Q.".to_string()], OutputFormat::Text).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, "Jones,K.\nSmith,J.\nZhou,Q.\n");
    }

    #[test]
    fn test_append_into_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("out.txt");
        let err = append_to_file(&path, &results(), OutputFormat::Text).unwrap_err();
        assert!(matches!(err, CliError::Output { .. }));
    }
}
