/*!
 * Common test utilities for the fonetico test suite
 */

use anyhow::Result;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Initialize logging for debugging test runs
pub fn init_test_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &PathBuf, filename: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// Creates a sample vocabulary CSV for testing
pub fn create_test_vocab_csv(dir: &PathBuf, filename: &str) -> Result<PathBuf> {
    let content = "\
term_italian,term_english,topic
casa,house,places
città,city,places
l'amico,the friend,people
";
    create_test_file(dir, filename, content)
}
