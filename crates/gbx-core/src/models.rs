// Data models for GenBank flat file entries and their literature references

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Placeholder for any text field that never appeared in the input.
pub const UNKNOWN: &str = "unknown";

/// One bibliographic citation (REFERENCE block) of an [`Entry`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reference {
    pub authors: HashSet<String>,
    pub title: String,
    pub journal: String,
    /// PubMed identifier, `0` when the block has no PUBMED line
    pub pubmed_id: i32,
}

impl Default for Reference {
    fn default() -> Self {
        Self {
            authors: HashSet::new(),
            title: UNKNOWN.to_string(),
            journal: UNKNOWN.to_string(),
            pubmed_id: 0,
        }
    }
}

impl Reference {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an author and return the resulting set.
    ///
    /// Re-adding an author already present leaves the set unchanged.
    pub fn add_author(&mut self, author: impl Into<String>) -> &HashSet<String> {
        self.authors.insert(author.into());
        &self.authors
    }

    pub fn authors(&self) -> &HashSet<String> {
        &self.authors
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn journal(&self) -> &str {
        &self.journal
    }

    pub fn pubmed_id(&self) -> i32 {
        self.pubmed_id
    }

    pub fn has_author(&self, author: &str) -> bool {
        self.authors.contains(author)
    }
}

/// One genomic record, from its LOCUS line up to the next LOCUS line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    // LOCUS line, second token
    pub locus: String,

    // ACCESSION line, tag included
    pub accession: String,

    // DEFINITION, continuation lines joined
    pub definition: String,

    // REFERENCE blocks in file order
    pub references: Vec<Reference>,
}

impl Default for Entry {
    fn default() -> Self {
        Self {
            locus: UNKNOWN.to_string(),
            accession: UNKNOWN.to_string(),
            definition: UNKNOWN.to_string(),
            references: Vec::new(),
        }
    }
}

impl Entry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn locus(&self) -> &str {
        &self.locus
    }

    pub fn accession(&self) -> &str {
        &self.accession
    }

    pub fn definition(&self) -> &str {
        &self.definition
    }

    pub fn references(&self) -> &[Reference] {
        &self.references
    }

    /// True when no field was ever populated from input.
    pub fn is_placeholder(&self) -> bool {
        self == &Entry::default()
    }
}
