// GenBank flat file parser
//
// Scans LOCUS / ACCESSION / DEFINITION and the REFERENCE sub-blocks
// (AUTHORS, TITLE, JOURNAL, PUBMED) of GenBank flat files into Entry records.
// Format documentation: https://www.ncbi.nlm.nih.gov/Sitemap/samplerecord.html

use crate::config::{ParserConfig, TerminalEntry};
use crate::models::{Entry, Reference};
use gbx_common::{GbxError, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use std::io::BufRead;
use tracing::{debug, trace, warn};

/// Leading indent that marks a line as the continuation of the previous field.
pub const CONTINUATION_INDENT: &str = "            ";

/// Author lists read "A, B and C": split on comma-space or a whitespace-delimited "and".
#[allow(clippy::expect_used)]
static AUTHOR_SEPARATOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r",\s|\sand\s").expect("author separator pattern is valid"));

/// Kind of a top-level line, decided from the trimmed text alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Locus,
    Accession,
    Definition,
    Reference,
    Authors,
    Title,
    Journal,
    Pubmed,
    Other,
}

impl LineKind {
    /// Classify a trimmed line by its tag prefix. First match wins.
    pub fn classify(trimmed: &str) -> Self {
        const TAGS: [(&str, LineKind); 8] = [
            ("LOCUS", LineKind::Locus),
            ("ACCESSION", LineKind::Accession),
            ("DEFINITION", LineKind::Definition),
            ("REFERENCE", LineKind::Reference),
            ("AUTHORS", LineKind::Authors),
            ("TITLE", LineKind::Title),
            ("JOURNAL", LineKind::Journal),
            ("PUBMED", LineKind::Pubmed),
        ];

        TAGS.iter()
            .find(|(tag, _)| trimmed.starts_with(tag))
            .map_or(LineKind::Other, |(_, kind)| *kind)
    }

    /// Width of the tag column stripped before the field value.
    fn value_offset(self) -> usize {
        match self {
            LineKind::Definition => 10,
            LineKind::Authors => 8,
            LineKind::Title => 5,
            LineKind::Journal | LineKind::Pubmed => 7,
            _ => 0,
        }
    }

    /// Value text of a tagged line; empty when the line is shorter than its tag column.
    ///
    /// The tag column is counted in characters, not bytes.
    fn value(self, trimmed: &str) -> &str {
        match trimmed.char_indices().nth(self.value_offset()) {
            Some((start, _)) => &trimmed[start..],
            None => "",
        }
    }
}

/// True when the raw (untrimmed) line continues the previous field.
pub fn is_continuation(line: &str) -> bool {
    line.starts_with(CONTINUATION_INDENT)
}

/// How continuation lines are appended to a field buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Join {
    /// Trim every continuation line before appending (DEFINITION, AUTHORS, TITLE).
    Trimmed,
    /// Append continuation lines with their indent intact (JOURNAL).
    Verbatim,
}

/// Split a joined AUTHORS value into individual, trimmed author names.
pub fn split_authors(value: &str) -> impl Iterator<Item = &str> {
    AUTHOR_SEPARATOR
        .split(value)
        .map(str::trim)
        .filter(|author| !author.is_empty())
}

/// Line reader with a single line of pushback.
struct LineCursor<I> {
    lines: I,
    held: Option<String>,
    line_number: usize,
}

impl<I> LineCursor<I>
where
    I: Iterator<Item = Result<String>>,
{
    fn new(lines: I) -> Self {
        Self {
            lines,
            held: None,
            line_number: 0,
        }
    }

    fn next_line(&mut self) -> Result<Option<String>> {
        if let Some(line) = self.held.take() {
            return Ok(Some(line));
        }
        match self.lines.next() {
            Some(line) => {
                self.line_number += 1;
                line.map(Some)
            },
            None => Ok(None),
        }
    }

    /// Next line if it is a continuation; otherwise it is held for the next `next_line`.
    fn next_continuation(&mut self) -> Result<Option<String>> {
        match self.next_line()? {
            Some(line) if is_continuation(&line) => Ok(Some(line)),
            Some(line) => {
                self.held = Some(line);
                Ok(None)
            },
            None => Ok(None),
        }
    }

    /// Collect a field that may span continuation lines.
    fn accumulate(&mut self, first: &str, join: Join) -> Result<String> {
        let mut buffer = first.to_string();
        while let Some(line) = self.next_continuation()? {
            buffer.push(' ');
            match join {
                Join::Trimmed => buffer.push_str(line.trim()),
                Join::Verbatim => buffer.push_str(&line),
            }
        }
        Ok(buffer.trim().to_string())
    }
}

/// An entry still being filled, together with its reference cursor.
struct OpenEntry {
    entry: Entry,
    reference: Option<Reference>,
}

impl OpenEntry {
    fn new(entry: Entry) -> Self {
        Self {
            entry,
            reference: None,
        }
    }

    fn start_reference(&mut self) {
        if let Some(previous) = self.reference.replace(Reference::new()) {
            self.entry.references.push(previous);
        }
    }

    fn close(mut self) -> Entry {
        if let Some(reference) = self.reference.take() {
            self.entry.references.push(reference);
        }
        self.entry
    }
}

/// Cursor state of one parse call.
#[derive(Default)]
struct ParseState {
    entries: Vec<Entry>,
    open: Option<OpenEntry>,
}

impl ParseState {
    fn open_entry(&mut self, entry: Entry) {
        if let Some(previous) = self.open.replace(OpenEntry::new(entry)) {
            self.entries.push(previous.close());
        }
    }

    fn entry_mut(&mut self) -> Option<&mut Entry> {
        self.open.as_mut().map(|open| &mut open.entry)
    }

    fn open_mut(&mut self) -> Option<&mut OpenEntry> {
        self.open.as_mut()
    }

    fn reference_mut(&mut self) -> Option<&mut Reference> {
        self.open.as_mut().and_then(|open| open.reference.as_mut())
    }

    fn finish(mut self, terminal_entry: TerminalEntry) -> Vec<Entry> {
        match (self.open.take(), terminal_entry) {
            (Some(open), _) => self.entries.push(open.close()),
            (None, TerminalEntry::Always) => self.entries.push(Entry::default()),
            (None, TerminalEntry::OpenedOnly) => {},
        }
        self.entries
    }
}

/// GenBank flat file parser
#[derive(Debug, Clone, Default)]
pub struct FlatFileParser {
    terminal_entry: TerminalEntry,
}

impl FlatFileParser {
    pub fn new(config: &ParserConfig) -> Self {
        Self {
            terminal_entry: config.terminal_entry,
        }
    }

    /// Parse already-decoded lines
    pub fn parse_lines<I, S>(&self, lines: I) -> Result<Vec<Entry>>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.parse_iter(lines.into_iter().map(|line| Ok(line.into())))
    }

    /// Parse all lines from a buffered reader
    pub fn parse_reader<R: BufRead>(&self, reader: R) -> Result<Vec<Entry>> {
        self.parse_iter(reader.lines().map(|line| line.map_err(GbxError::from)))
    }

    fn parse_iter<I>(&self, lines: I) -> Result<Vec<Entry>>
    where
        I: Iterator<Item = Result<String>>,
    {
        let mut cursor = LineCursor::new(lines);
        let mut state = ParseState::default();

        while let Some(line) = cursor.next_line()? {
            let trimmed = line.trim();
            let kind = LineKind::classify(trimmed);

            match kind {
                LineKind::Locus => {
                    let mut entry = Entry::new();
                    match line.split_whitespace().nth(1) {
                        Some(locus) => entry.locus = locus.to_string(),
                        None => warn!(line = cursor.line_number, "LOCUS line without a name"),
                    }
                    state.open_entry(entry);
                },
                LineKind::Accession => {
                    if let Some(entry) = state.entry_mut() {
                        entry.accession = trimmed.to_string();
                    }
                },
                LineKind::Definition => {
                    if let Some(entry) = state.entry_mut() {
                        entry.definition = cursor.accumulate(kind.value(trimmed), Join::Trimmed)?;
                    }
                },
                LineKind::Reference => {
                    if let Some(open) = state.open_mut() {
                        open.start_reference();
                    }
                },
                LineKind::Authors => {
                    if let Some(reference) = state.reference_mut() {
                        let joined = cursor.accumulate(kind.value(trimmed), Join::Trimmed)?;
                        for author in split_authors(&joined) {
                            reference.add_author(author);
                        }
                    }
                },
                LineKind::Title => {
                    if let Some(reference) = state.reference_mut() {
                        reference.title = cursor.accumulate(kind.value(trimmed), Join::Trimmed)?;
                    }
                },
                LineKind::Journal => {
                    if let Some(reference) = state.reference_mut() {
                        reference.journal =
                            cursor.accumulate(kind.value(trimmed), Join::Verbatim)?;
                    }
                },
                LineKind::Pubmed => {
                    if let Some(reference) = state.reference_mut() {
                        reference.pubmed_id = parse_pubmed(kind.value(trimmed), cursor.line_number)?;
                    }
                },
                LineKind::Other => {},
            }

            if kind != LineKind::Other && kind != LineKind::Locus {
                trace!(line = cursor.line_number, ?kind, "Classified line");
            }
        }

        let entries = state.finish(self.terminal_entry);
        debug!(
            entries = entries.len(),
            lines = cursor.line_number,
            "Parsed flat file"
        );
        Ok(entries)
    }
}

fn parse_pubmed(value: &str, line: usize) -> Result<i32> {
    let value = value.trim();
    value.parse().map_err(|source| GbxError::MalformedNumber {
        line,
        value: value.to_string(),
        source,
    })
}

/// Parse lines with the default configuration.
pub fn parse_file<I, S>(lines: I) -> Result<Vec<Entry>>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    FlatFileParser::default().parse_lines(lines)
}
