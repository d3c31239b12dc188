/*!
 * # fonetico - Italian pronunciation respelling for English learners
 *
 * A Rust library and CLI that converts Italian words and short phrases into
 * an English-friendly phonetic respelling with the stressed syllable marked,
 * and enriches vocabulary CSV files with a pronunciation column.
 *
 * ## Features
 *
 * - Deterministic grapheme-to-sound transcription of Italian orthography
 * - Syllabification per Italian phonotactics (onset maximization, geminate
 *   and s-cluster handling, digraph/trigraph resolution)
 * - Stress placement from accent marks with positional fallbacks
 * - Lossless phrase tokenization: punctuation and spacing pass through
 * - Batch enrichment of vocabulary CSV files, concurrent per file
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `transcription`: the pure transcription pipeline:
 *   - `transcription::tokenizer`: word/separator segmentation
 *   - `transcription::syllabifier`: syllable splitting
 *   - `transcription::stress`: stress placement heuristics
 *   - `transcription::sounds`: onset/nucleus/coda sound mapping
 *   - `transcription::composer`: rendering and phrase reassembly
 * - `vocab_processor`: vocabulary CSV parsing and enrichment
 * - `app_config`: Configuration management
 * - `app_controller`: Main application controller
 * - `file_utils`: File system operations
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod errors;
pub mod file_utils;
pub mod transcription;
pub mod vocab_processor;

// Re-export main types for easier usage
pub use app_config::Config;
pub use app_controller::{Controller, RunSummary};
pub use errors::{AppError, VocabError};
pub use transcription::{StressStyle, Transcriber, transcribe};
pub use vocab_processor::{VocabCollection, VocabRecord};
