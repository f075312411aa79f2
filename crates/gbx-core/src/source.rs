//! Line sources for flat files on disk
//!
//! Opens a flat file as a buffered line reader. Gzip-compressed inputs
//! (`*.gz`) are decompressed on the fly with flate2, so the parser only ever
//! sees decoded text.
//!
//! # Examples
//!
//! ```rust,no_run
//! use gbx_core::parser::FlatFileParser;
//! use gbx_core::source::open_lines;
//! use std::path::Path;
//!
//! let reader = open_lines(Path::new("gbvrl1.gbff.gz"))?;
//! let entries = FlatFileParser::default().parse_reader(reader)?;
//! # Ok::<(), gbx_common::GbxError>(())
//! ```

use flate2::read::GzDecoder;
use gbx_common::{GbxError, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::debug;

const GZIP_EXTENSION: &str = "gz";

/// True when `path` ends in `.gz`.
pub fn is_gzip(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case(GZIP_EXTENSION))
}

/// True when `path` names a flat file with one of `extensions`, optionally gzipped.
///
/// `extensions` are given without the leading dot, e.g. `["gbff"]` accepts
/// `gbvrl1.gbff` and `gbvrl1.gbff.gz`.
pub fn is_flat_file(path: &Path, extensions: &[String]) -> bool {
    let inner = if is_gzip(path) {
        match path.file_stem() {
            Some(stem) => Path::new(stem),
            None => return false,
        }
    } else {
        path
    };

    inner.extension().is_some_and(|ext| {
        extensions
            .iter()
            .any(|wanted| ext.eq_ignore_ascii_case(wanted.as_str()))
    })
}

/// Open `path` as a stream of decoded lines.
///
/// Fails with [`GbxError::SourceUnavailable`] if the file cannot be opened.
pub fn open_lines(path: &Path) -> Result<Box<dyn BufRead>> {
    let file = File::open(path).map_err(|e| GbxError::source_unavailable(path, e))?;

    if is_gzip(path) {
        debug!(path = %path.display(), "Opening gzip-compressed flat file");
        Ok(Box::new(BufReader::new(GzDecoder::new(file))))
    } else {
        debug!(path = %path.display(), "Opening flat file");
        Ok(Box::new(BufReader::new(file)))
    }
}
