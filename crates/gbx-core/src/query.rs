//! Aggregate queries over parsed entries
//!
//! Every query returns a sorted list without duplicates.

use crate::models::{Entry, Reference};
use std::collections::BTreeSet;

fn references(entries: &[Entry]) -> impl Iterator<Item = &Reference> {
    entries.iter().flat_map(|entry| entry.references.iter())
}

/// Every distinct author across all references.
pub fn all_authors(entries: &[Entry]) -> Vec<String> {
    references(entries)
        .flat_map(|reference| reference.authors.iter().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Every distinct publication title across all references.
pub fn all_publications(entries: &[Entry]) -> Vec<String> {
    references(entries)
        .map(|reference| reference.title.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Titles of the references listing `author`. The name must match exactly.
pub fn publications_by_author(entries: &[Entry], author: &str) -> Vec<String> {
    references(entries)
        .filter(|reference| reference.has_author(author))
        .map(|reference| reference.title.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Authors of the first reference whose title contains `title_fragment`.
///
/// References are searched in entry order, then in reference order within an
/// entry; later matches are not merged in.
pub fn authors_by_publication(entries: &[Entry], title_fragment: &str) -> Vec<String> {
    references(entries)
        .find(|reference| reference.title.contains(title_fragment))
        .map(|reference| {
            reference
                .authors
                .iter()
                .cloned()
                .collect::<BTreeSet<_>>()
                .into_iter()
                .collect()
        })
        .unwrap_or_default()
}

/// One of the four supported queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    Authors,
    Publications,
    ByAuthor(String),
    ByPublication(String),
}

impl Query {
    pub fn run(&self, entries: &[Entry]) -> Vec<String> {
        match self {
            Query::Authors => all_authors(entries),
            Query::Publications => all_publications(entries),
            Query::ByAuthor(author) => publications_by_author(entries, author),
            Query::ByPublication(fragment) => authors_by_publication(entries, fragment),
        }
    }
}
