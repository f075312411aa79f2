//! GBX Core Library
#![deny(clippy::unwrap_used, clippy::expect_used)]
//!
//! Parses GenBank flat files into [`Entry`] records and answers author and
//! publication queries over them.
//!
//! # Overview
//!
//! - **Models**: [`Entry`] and its literature [`Reference`]s
//! - **Parser**: continuation-aware line scanner ([`FlatFileParser`])
//! - **Sources**: plain or gzip-compressed files as line readers
//! - **Batch**: directory discovery and per-file failure isolation
//! - **Queries**: distinct authors/titles, lookups by author or title
//!
//! # Example
//!
//! ```no_run
//! use gbx_core::{parse_file, query};
//!
//! let entries = parse_file([
//!     "LOCUS       AB123  100 bp",
//!     "REFERENCE   1",
//!     "  AUTHORS   Smith,J. and Jones,K.",
//!     "  TITLE     A study",
//! ])?;
//! assert_eq!(query::all_authors(&entries), vec!["Jones,K.", "Smith,J."]);
//! # Ok::<(), gbx_common::GbxError>(())
//! ```

pub mod batch;
pub mod config;
pub mod models;
pub mod parser;
pub mod query;
pub mod source;

pub use batch::{BatchParser, BatchReport};
pub use config::{ParserConfig, TerminalEntry};
pub use models::{Entry, Reference};
pub use parser::{parse_file, FlatFileParser};
pub use query::Query;
