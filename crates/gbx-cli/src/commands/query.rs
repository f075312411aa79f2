//! `gbx DIR <query>` command implementation
//!
//! Parses every flat file in the directory, runs one query over the entries
//! and reports the results.

use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::{append_to_file, write_results, OutputFormat};
use crate::Cli;
use colored::Colorize;
use gbx_core::{BatchParser, Entry, Query};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Hint printed when an author lookup finds nothing.
pub const EXACT_AUTHOR_HINT: &str =
    "Please type an exact match for the author's name. For example, \"Reilly,L.P.\" instead of \"Reilly\".";

/// Everything the query command needs, resolved from flags and config.
#[derive(Debug, Clone)]
pub struct QueryRequest {
    pub directory: PathBuf,
    pub query: Query,
    pub output: Option<PathBuf>,
    pub format: OutputFormat,
    pub strict: bool,
}

impl QueryRequest {
    /// Merge command-line flags over `config`
    pub fn from_cli(cli: &Cli, config: &Config) -> Result<Self> {
        let query = cli
            .query
            .to_query()
            .ok_or_else(|| CliError::config("Exactly one query option is required"))?;

        Ok(Self {
            directory: cli.directory.clone(),
            query,
            output: cli.output.clone(),
            format: cli.format,
            strict: cli.strict || config.strict,
        })
    }
}

/// Run the query command, reporting on stdout
pub fn run(cli: &Cli, config: &Config) -> Result<()> {
    config.validate()?;
    let request = QueryRequest::from_cli(cli, config)?;

    let entries = load_entries(&request.directory, config, request.strict)?;
    let results = request.query.run(&entries);
    info!(query = ?request.query, results = results.len(), "Query complete");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    report(&mut out, &request, &results)
}

/// Parse the flat files of `directory`.
///
/// Failing files are skipped with a warning unless `strict` is set.
pub fn load_entries(directory: &Path, config: &Config, strict: bool) -> Result<Vec<Entry>> {
    let parser = BatchParser::new(&config.parser_config());
    let report = parser.parse_dir(directory)?;

    for failure in &report.failures {
        warn!(path = %failure.path.display(), error = %failure.error, "Skipped file");
    }
    debug!(
        files = report.parsed_files,
        entries = report.entries.len(),
        "Loaded entries"
    );

    report.into_result(strict).map_err(CliError::from)
}

/// Write the header and results of `request` to `out` (or to the output file).
pub fn report<W: Write>(out: &mut W, request: &QueryRequest, results: &[String]) -> Result<()> {
    if results.is_empty() && request.format == OutputFormat::Text {
        if let Some(lines) = empty_message(&request.query) {
            for line in lines {
                writeln!(out, "{}", line)?;
            }
            return Ok(());
        }
    }

    match request.output {
        Some(ref path) => {
            writeln!(out, "Writing to file {}", path.display().to_string().cyan())?;
            append_to_file(path, results, request.format)
        },
        None => {
            if request.format == OutputFormat::Text {
                writeln!(out, "{}", header(&request.query).bold())?;
            }
            write_results(out, results, request.format)
        },
    }
}

/// Heading printed above results on stdout.
pub fn header(query: &Query) -> String {
    match query {
        Query::Authors => "Authors found:".to_string(),
        Query::Publications => "Publications found:".to_string(),
        Query::ByAuthor(author) => format!("Publications by {}:", author),
        Query::ByPublication(title) => format!("Authors of {}:", title),
    }
}

/// Message shown instead of results when a lookup finds nothing.
fn empty_message(query: &Query) -> Option<Vec<String>> {
    match query {
        Query::ByAuthor(author) => Some(vec![
            format!("No publications found for {}", author),
            EXACT_AUTHOR_HINT.to_string(),
        ]),
        Query::ByPublication(title) => Some(vec![format!("No authors found for {}", title)]),
        Query::Authors | Query::Publications => None,
    }
}
