/*!
 * Tests for application error types
 */

use fonetico::errors::{AppError, VocabError};

/// Test error display formatting
#[test]
fn test_vocab_error_display_shouldDescribeProblem() {
    let error = VocabError::RaggedRecord {
        line: 3,
        expected: 2,
        found: 4,
    };
    assert_eq!(
        error.to_string(),
        "Record on line 3 has 4 fields, header has 2"
    );

    let error = VocabError::ColumnNotFound("term_italian".to_string());
    assert_eq!(error.to_string(), "Column not found: term_italian");

    let error = VocabError::UnterminatedQuote { line: 7 };
    assert!(error.to_string().contains("line 7"));
}

/// Test wrapping vocabulary errors into the app error
#[test]
fn test_app_error_fromVocabError_shouldWrap() {
    let app_error: AppError = VocabError::MissingHeader.into();
    assert!(matches!(app_error, AppError::Vocab(_)));
    assert!(app_error.to_string().contains("Vocabulary error"));
}

/// Test conversion from std and anyhow errors
#[test]
fn test_app_error_fromStdAndAnyhow_shouldClassify() {
    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.csv");
    let app_error: AppError = io_error.into();
    assert!(matches!(app_error, AppError::File(_)));

    let any_error = anyhow::anyhow!("boom");
    let app_error: AppError = any_error.into();
    assert!(matches!(app_error, AppError::Unknown(_)));
}
