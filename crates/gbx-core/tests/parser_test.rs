// GenBank flat file parser tests

use gbx_common::GbxError;
use gbx_core::config::{ParserConfig, TerminalEntry};
use gbx_core::parser::{parse_file, FlatFileParser, CONTINUATION_INDENT};
use gbx_core::query;
use gbx_core::BatchParser;
use proptest::prelude::*;
use std::collections::HashSet;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures/genbank")
        .join(name)
}

fn set(items: &[&str]) -> HashSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}

// ============================================================================
// Fixture file
// ============================================================================

#[test]
fn test_parse_sample_genbank_file() {
    let entries = BatchParser::default()
        .parse_path(&fixture("sample.gbff"))
        .expect("Failed to parse sample file");

    assert_eq!(entries.len(), 2);

    let yeast = &entries[0];
    assert_eq!(yeast.locus, "SCU49845");
    assert_eq!(yeast.accession, "ACCESSION   U49845");
    assert_eq!(
        yeast.definition,
        "Saccharomyces cerevisiae TCP1-beta gene, partial cds, and Axl2p (AXL2) and Rev7p (REV7) genes, complete cds."
    );
    assert_eq!(yeast.references.len(), 3);

    let first = &yeast.references[0];
    assert_eq!(
        first.authors,
        set(&["Torpey,L.E.", "Gibbs,P.E.", "Nelson,J.", "Lawrence,C.W."])
    );
    assert_eq!(
        first.title,
        "Cloning and sequence of REV7, a gene whose function is required for DNA damage-induced mutagenesis in Saccharomyces cerevisiae"
    );
    assert_eq!(first.journal, "Yeast 10 (11), 1503-1509 (1994)");
    assert_eq!(first.pubmed_id, 7871890);

    let submission = &yeast.references[2];
    assert_eq!(submission.authors, set(&["Roemer,T."]));
    assert_eq!(submission.title, "Direct Submission");
    assert_eq!(
        submission.journal,
        format!(
            "Submitted (22-FEB-1996) Biology, Yale University, New {}Haven, CT, USA",
            CONTINUATION_INDENT
        )
    );
    assert_eq!(submission.pubmed_id, 0);

    let lambda = &entries[1];
    assert_eq!(lambda.locus, "NC_001416");
    assert_eq!(lambda.definition, "Escherichia phage Lambda, complete genome.");
    assert_eq!(lambda.references.len(), 2);
    assert_eq!(
        lambda.references[0].authors,
        set(&["Reilly,L.P.", "Evans,M.", "Atari,N."])
    );
}

#[test]
fn test_sample_queries() {
    let entries = BatchParser::default()
        .parse_path(&fixture("sample.gbff"))
        .expect("Failed to parse sample file");

    assert_eq!(
        query::publications_by_author(&entries, "Roemer,T."),
        vec![
            "Direct Submission",
            "Selection of axial growth sites in yeast requires Axl2p, a novel plasma membrane glycoprotein",
        ]
    );
    assert_eq!(
        query::authors_by_publication(&entries, "Lambda"),
        vec!["Atari,N.", "Evans,M.", "Reilly,L.P."]
    );
    // the yeast submission comes first
    assert_eq!(
        query::authors_by_publication(&entries, "Direct Submission"),
        vec!["Roemer,T."]
    );
    assert_eq!(query::all_publications(&entries).len(), 4);
}

#[test]
fn test_gzip_file_parses_like_plain() {
    let dir = tempfile::tempdir().unwrap();
    let packed = dir.path().join("sample.gbff.gz");
    let text = std::fs::read(fixture("sample.gbff")).unwrap();
    let mut encoder = flate2::write::GzEncoder::new(
        File::create(&packed).unwrap(),
        flate2::Compression::default(),
    );
    encoder.write_all(&text).unwrap();
    encoder.finish().unwrap();

    let parser = BatchParser::default();
    let plain = parser.parse_path(&fixture("sample.gbff")).unwrap();
    let unpacked = parser.parse_path(&packed).unwrap();
    assert_eq!(plain, unpacked);
}

// ============================================================================
// Record boundaries and references
// ============================================================================

#[test]
fn test_documented_example() {
    let entries = parse_file([
        "LOCUS       AB123  100 bp    DNA",
        "DEFINITION  Test gene.",
        "REFERENCE   1",
        "AUTHORS     Smith,J. and Jones,K.",
        "TITLE       A study",
        "PUBMED      12345",
    ])
    .unwrap();

    assert_eq!(entries.len(), 1);
    let entry = &entries[0];
    assert_eq!(entry.locus, "AB123");
    assert_eq!(entry.definition, "Test gene.");
    assert_eq!(entry.accession, "unknown");
    assert_eq!(entry.references.len(), 1);

    let reference = &entry.references[0];
    assert_eq!(reference.authors, set(&["Smith,J.", "Jones,K."]));
    assert_eq!(reference.title, "A study");
    assert_eq!(reference.journal, "unknown");
    assert_eq!(reference.pubmed_id, 12345);
}

#[test]
fn test_single_entry_without_references() {
    let entries = parse_file([
        "LOCUS       XY999  20 bp",
        "DEFINITION  A gene with a",
        "            long description that spans",
        "            three lines.",
        "ACCESSION   XY999 XY998",
    ])
    .unwrap();

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].locus, "XY999");
    assert_eq!(
        entries[0].definition,
        "A gene with a long description that spans three lines."
    );
    assert_eq!(entries[0].accession, "ACCESSION   XY999 XY998");
    assert!(entries[0].references.is_empty());
}

#[test]
fn test_references_kept_in_file_order() {
    let mut lines = vec!["LOCUS       MANY".to_string()];
    for n in 1..=5 {
        lines.push(format!("REFERENCE   {}", n));
        lines.push(format!("  TITLE     Paper {}", n));
    }

    let entries = parse_file(lines).unwrap();
    assert_eq!(entries.len(), 1);
    let titles: Vec<&str> = entries[0].references.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, vec!["Paper 1", "Paper 2", "Paper 3", "Paper 4", "Paper 5"]);
}

#[test]
fn test_reference_without_fields_keeps_defaults() {
    let entries = parse_file(["LOCUS       L1", "REFERENCE   1", "REFERENCE   2"]).unwrap();
    assert_eq!(entries[0].references.len(), 2);
    assert!(entries[0].references.iter().all(|r| r.title == "unknown" && r.authors.is_empty()));
}

#[test]
fn test_multiple_entries_split_on_locus() {
    let entries = parse_file([
        "LOCUS       FIRST",
        "ACCESSION   A1",
        "REFERENCE   1",
        "  AUTHORS   Doe,J.",
        "LOCUS       SECOND",
        "ACCESSION   A2",
    ])
    .unwrap();

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].accession, "ACCESSION   A1");
    assert_eq!(entries[0].references.len(), 1);
    assert_eq!(entries[1].locus, "SECOND");
    assert!(entries[1].references.is_empty());
}

// ============================================================================
// Continuations
// ============================================================================

#[test]
fn test_authors_continuation_resumes_at_next_tag() {
    let entries = parse_file([
        "LOCUS       C1",
        "REFERENCE   1",
        "  AUTHORS   Torpey,L.E., Gibbs,P.E.,",
        "            Nelson,J. and Lawrence,C.W.",
        "  TITLE     Follows authors",
        "   PUBMED   42",
    ])
    .unwrap();

    let reference = &entries[0].references[0];
    assert_eq!(
        reference.authors,
        set(&["Torpey,L.E.", "Gibbs,P.E.", "Nelson,J.", "Lawrence,C.W."])
    );
    assert_eq!(reference.title, "Follows authors");
    assert_eq!(reference.pubmed_id, 42);
}

#[test]
fn test_definition_continuation_stops_before_reference() {
    let entries = parse_file([
        "LOCUS       C2",
        "DEFINITION  Short",
        "            definition.",
        "REFERENCE   1",
        "  TITLE     Still detected",
    ])
    .unwrap();

    assert_eq!(entries[0].definition, "Short definition.");
    assert_eq!(entries[0].references.len(), 1);
    assert_eq!(entries[0].references[0].title, "Still detected");
}

#[test]
fn test_indented_locus_stays_inside_definition() {
    let entries = parse_file([
        "LOCUS       C6",
        "DEFINITION  Start",
        "            LOCUS inside text",
        "ACCESSION   X",
    ])
    .unwrap();

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].locus, "C6");
    assert_eq!(entries[0].definition, "Start LOCUS inside text");
    assert_eq!(entries[0].accession, "ACCESSION   X");
}

#[test]
fn test_indented_reference_stays_inside_title() {
    let entries = parse_file([
        "LOCUS       C7",
        "REFERENCE   1",
        "  TITLE     Notes on",
        "            REFERENCE genomes",
        "  JOURNAL   Unpublished",
    ])
    .unwrap();

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].references.len(), 1);
    let reference = &entries[0].references[0];
    assert_eq!(reference.title, "Notes on REFERENCE genomes");
    assert_eq!(reference.journal, "Unpublished");
}

#[test]
fn test_continuation_needs_full_indent() {
    let entries = parse_file([
        "LOCUS       C3",
        "DEFINITION  Kept.",
        "           eleven spaces is not a continuation",
    ])
    .unwrap();
    assert_eq!(entries[0].definition, "Kept.");
}

#[test]
fn test_journal_continuation_not_trimmed() {
    let entries = parse_file([
        "LOCUS       C4",
        "REFERENCE   1",
        "  JOURNAL   Nature 12",
        "            (3), 45-67",
        "  TITLE     After journal",
    ])
    .unwrap();

    let reference = &entries[0].references[0];
    assert_eq!(
        reference.journal,
        format!("Nature 12 {}(3), 45-67", CONTINUATION_INDENT)
    );
    assert_eq!(reference.title, "After journal");
}

#[test]
fn test_field_at_end_of_input() {
    let entries = parse_file([
        "LOCUS       C5",
        "REFERENCE   1",
        "  TITLE     Last line",
        "            of the file",
    ])
    .unwrap();
    assert_eq!(entries[0].references[0].title, "Last line of the file");
}

proptest! {
    #[test]
    fn prop_definition_independent_of_line_breaks(
        words in prop::collection::vec("[A-Za-z0-9(),.;-]{1,10}", 1..30),
        per_line in 1usize..6,
    ) {
        let mut lines = vec!["LOCUS       PROP".to_string()];
        for (i, chunk) in words.chunks(per_line).enumerate() {
            if i == 0 {
                lines.push(format!("DEFINITION  {}", chunk.join(" ")));
            } else {
                lines.push(format!("{}{}", CONTINUATION_INDENT, chunk.join(" ")));
            }
        }
        lines.push("ACCESSION   P1".to_string());

        let entries = parse_file(lines).unwrap();
        prop_assert_eq!(entries.len(), 1);
        prop_assert_eq!(&entries[0].definition, &words.join(" "));
        prop_assert_eq!(&entries[0].accession, "ACCESSION   P1");
    }
}

// ============================================================================
// Out-of-context lines and terminal entry policy
// ============================================================================

#[test]
fn test_field_lines_without_context_are_ignored() {
    let entries = parse_file([
        "ACCESSION   ORPHAN",
        "REFERENCE   1",
        "  AUTHORS   Nobody,N.",
        "   PUBMED   not-checked",
        "LOCUS       REAL",
        "  TITLE     No reference open",
        "   PUBMED   also-not-checked",
    ])
    .unwrap();

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].locus, "REAL");
    assert_eq!(entries[0].accession, "unknown");
    assert!(entries[0].references.is_empty());
}

#[test]
fn test_no_locus_yields_nothing_by_default() {
    let entries = parse_file(["DEFINITION  Nothing opened", "//"]).unwrap();
    assert!(entries.is_empty());

    let entries = parse_file(Vec::<String>::new()).unwrap();
    assert!(entries.is_empty());
}

#[test]
fn test_no_locus_yields_placeholder_when_always() {
    let parser =
        FlatFileParser::new(&ParserConfig::new().with_terminal_entry(TerminalEntry::Always));

    let entries = parser.parse_lines(["DEFINITION  Nothing opened"]).unwrap();
    assert_eq!(entries.len(), 1);
    assert!(entries[0].is_placeholder());

    // an opened entry is appended once, never followed by a placeholder
    let entries = parser.parse_lines(["LOCUS       ONLY"]).unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].locus, "ONLY");
}

#[test]
fn test_locus_without_name_keeps_default() {
    let entries = parse_file(["LOCUS"]).unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].locus, "unknown");
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_malformed_pubmed_propagates() {
    let err = parse_file([
        "LOCUS       BAD",
        "REFERENCE   1",
        "   PUBMED   12x45",
    ])
    .unwrap_err();

    match err {
        GbxError::MalformedNumber { line, value, .. } => {
            assert_eq!(line, 3);
            assert_eq!(value, "12x45");
        },
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_signed_pubmed_is_accepted() {
    let entries = parse_file([
        "LOCUS       NEG",
        "REFERENCE   1",
        "   PUBMED   -5",
    ])
    .unwrap();
    assert_eq!(entries[0].references[0].pubmed_id, -5);
}

#[test]
fn test_out_of_range_pubmed_is_malformed() {
    let err = parse_file([
        "LOCUS       BIG",
        "REFERENCE   1",
        "   PUBMED   3000000000",
    ])
    .unwrap_err();

    assert!(matches!(
        err,
        GbxError::MalformedNumber { line: 3, ref value, .. } if value == "3000000000"
    ));
}

#[test]
fn test_multibyte_character_in_tag_column_keeps_value() {
    let entries = parse_file([
        "LOCUS       UTF8",
        "REFERENCE   1",
        "  AUTHORSé Smith,J. and Jones,K.",
    ])
    .unwrap();
    assert_eq!(entries[0].references[0].authors, set(&["Smith,J.", "Jones,K."]));
}

#[test]
fn test_missing_file_is_not_found() {
    let err = BatchParser::default()
        .parse_path(&fixture("does-not-exist.gbff"))
        .unwrap_err();
    assert_eq!(err.kind(), Some(std::io::ErrorKind::NotFound));
}
