//! GBX CLI Library
#![deny(clippy::unwrap_used, clippy::expect_used)]
//!
//! Command-line interface for exploring a directory of GenBank flat files.
//!
//! # Overview
//!
//! Exactly one query is run per invocation:
//!
//! - **Authors**: every distinct author (`gbx DIR -a`)
//! - **Publications**: every distinct publication title (`gbx DIR -p`)
//! - **By author**: titles published by an author (`gbx DIR --by-author "Reilly,L.P."`)
//! - **By publication**: authors of a publication (`gbx DIR --by-publication "Lambda"`)
//!
//! Results go to stdout, or are appended to a file with `-o FILE`.

pub mod commands;
pub mod config;
pub mod error;
pub mod output;

// Re-export commonly used types
pub use config::Config;
pub use error::{CliError, Result};
pub use output::OutputFormat;

use clap::{Args, Parser};
use gbx_core::Query;
use std::path::PathBuf;

/// GBX - GenBank flat file explorer
#[derive(Parser, Debug)]
#[command(name = "gbx")]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Directory with the GenBank flat files to explore
    pub directory: PathBuf,

    #[command(flatten)]
    pub query: QueryArgs,

    /// Append results to this file instead of printing them
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format of the results
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Fail on the first file that cannot be parsed
    #[arg(long)]
    pub strict: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// The query to run; exactly one must be given
#[derive(Args, Debug, Clone, Default)]
#[group(required = true, multiple = false)]
pub struct QueryArgs {
    /// Display all authors in the listed files
    #[arg(short = 'a', long)]
    pub authors: bool,

    /// Display all publications in the listed files
    #[arg(short = 'p', long)]
    pub publications: bool,

    /// Display all publications by an author (exact match, e.g. "Reilly,L.P.")
    #[arg(long, alias = "ba", value_name = "AUTHOR")]
    pub by_author: Option<String>,

    /// Display all authors of a publication (partial titles match)
    #[arg(long, alias = "bp", value_name = "TITLE")]
    pub by_publication: Option<String>,
}

impl QueryArgs {
    /// The selected query, if any option was given
    pub fn to_query(&self) -> Option<Query> {
        if self.authors {
            Some(Query::Authors)
        } else if self.publications {
            Some(Query::Publications)
        } else if let Some(ref author) = self.by_author {
            Some(Query::ByAuthor(author.clone()))
        } else {
            self.by_publication
                .as_ref()
                .map(|title| Query::ByPublication(title.clone()))
        }
    }
}
