/*!
 * Tests for vocabulary CSV parsing and enrichment
 */

use fonetico::transcription::Transcriber;
use fonetico::vocab_processor::{VocabCollection, VocabRecord};
use std::path::PathBuf;

fn collection_from(content: &str) -> VocabCollection {
    let (headers, records) = VocabCollection::parse_csv_string(content).unwrap();
    VocabCollection {
        source_file: PathBuf::from("test.csv"),
        headers,
        records,
    }
}

/// Test parsing of a plain CSV file
#[test]
fn test_parse_csv_string_withPlainRows_shouldSplitCells() {
    let collection = collection_from("term_italian,term_english\ncasa,house\ncittà,city\n");
    assert_eq!(collection.headers, vec!["term_italian", "term_english"]);
    assert_eq!(collection.len(), 2);
    assert_eq!(collection.records[0].fields, vec!["casa", "house"]);
    assert_eq!(collection.records[1].fields, vec!["città", "city"]);
}

/// Test quoted fields with commas, escapes and embedded newlines
#[test]
fn test_parse_csv_string_withQuotedFields_shouldUnescape() {
    let content = "term,note\nciao,\"hi, informal\"\nsì,\"he said \"\"yes\"\"\"\nnote,\"line one\nline two\"\n";
    let collection = collection_from(content);
    assert_eq!(collection.records[0].fields[1], "hi, informal");
    assert_eq!(collection.records[1].fields[1], "he said \"yes\"");
    assert_eq!(collection.records[2].fields[1], "line one\nline two");
}

/// Test CRLF line endings and blank-line skipping
#[test]
fn test_parse_csv_string_withCrlfAndBlankLines_shouldNormalize() {
    let collection = collection_from("a,b\r\nx,y\r\n\r\nz,w\r\n");
    assert_eq!(collection.len(), 2);
    assert_eq!(collection.records[1].fields, vec!["z", "w"]);
}

/// Test short records padding and long records failing
#[test]
fn test_parse_csv_string_withRaggedRows_shouldPadOrFail() {
    let collection = collection_from("a,b\nx\n");
    assert_eq!(collection.records[0].fields, vec!["x", ""]);

    assert!(VocabCollection::parse_csv_string("a,b\nx,y,z\n").is_err());
}

/// Test degenerate inputs
#[test]
fn test_parse_csv_string_withDegenerateInput_shouldFailCleanly() {
    assert!(VocabCollection::parse_csv_string("").is_err());
    assert!(VocabCollection::parse_csv_string("a,b\n\"open,row\n").is_err());
}

/// Test render round trip preserving cells
#[test]
fn test_to_csv_string_withRoundTrip_shouldPreserveCells() {
    let content = "term,note\nciao,\"hi, informal\"\ncittà,\"quote \"\"q\"\"\"\n";
    let collection = collection_from(content);
    let rendered = collection.to_csv_string();
    let reparsed = collection_from(&rendered);
    assert_eq!(reparsed.headers, collection.headers);
    assert_eq!(reparsed.records, collection.records);
}

/// Test column lookup and creation
#[test]
fn test_ensure_column_withMissingColumn_shouldAppendAndPad() {
    let mut collection = collection_from("term_italian\ncasa\n");
    assert_eq!(collection.column_index("term_italian"), Some(0));
    assert_eq!(collection.column_index("pronunciation"), None);

    let index = collection.ensure_column("pronunciation");
    assert_eq!(index, 1);
    assert_eq!(collection.headers, vec!["term_italian", "pronunciation"]);
    assert_eq!(collection.records[0].fields, vec!["casa", ""]);

    // idempotent
    assert_eq!(collection.ensure_column("pronunciation"), 1);
    assert_eq!(collection.headers.len(), 2);
}

/// Test cell accessors on records
#[test]
fn test_vocab_record_withGetAndSet_shouldHandleBounds() {
    let mut record = VocabRecord::new(vec!["casa".to_string()]);
    assert_eq!(record.get(0), "casa");
    assert_eq!(record.get(5), "");

    record.set(2, "KAH-sah".to_string());
    assert_eq!(record.fields, vec!["casa", "", "KAH-sah"]);
}

/// Test enrichment writing the pronunciation column
#[test]
fn test_enrich_withTermColumn_shouldTranscribeRows() {
    let mut collection = collection_from("term_italian,term_english\ncasa,house\ncittà,city\n");
    let transcriber = Transcriber::new();

    let outcome = collection
        .enrich(&transcriber, "term_italian", "pronunciation", false)
        .unwrap();
    assert_eq!(outcome.enriched, 2);
    assert_eq!(outcome.skipped, 0);
    assert_eq!(collection.records[0].get(2), "KAH-sah");
    assert_eq!(collection.records[1].get(2), "chee-TAH");
}

/// Test that filled cells are skipped unless overwrite is set
#[test]
fn test_enrich_withFilledCells_shouldSkipUnlessOverwrite() {
    let mut collection =
        collection_from("term_italian,pronunciation\ncasa,existing\ngatto,\n");
    let transcriber = Transcriber::new();

    let outcome = collection
        .enrich(&transcriber, "term_italian", "pronunciation", false)
        .unwrap();
    assert_eq!(outcome.enriched, 1);
    assert_eq!(outcome.skipped, 1);
    assert_eq!(collection.records[0].get(1), "existing");
    assert_eq!(collection.records[1].get(1), "GAH-toh");

    let outcome = collection
        .enrich(&transcriber, "term_italian", "pronunciation", true)
        .unwrap();
    assert_eq!(outcome.enriched, 2);
    assert_eq!(collection.records[0].get(1), "KAH-sah");
}

/// Test enrichment failing on a missing term column
#[test]
fn test_enrich_withMissingTermColumn_shouldFail() {
    let mut collection = collection_from("word,translation\ncasa,house\n");
    let transcriber = Transcriber::new();
    assert!(
        collection
            .enrich(&transcriber, "term_italian", "pronunciation", false)
            .is_err()
    );
}
