use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};
use std::default::Default;

use crate::transcription::StressStyle;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// CSV column holding the Italian term
    #[serde(default = "default_term_column")]
    pub term_column: String,

    /// CSV column receiving the rendered respelling
    #[serde(default = "default_pronunciation_column")]
    pub pronunciation_column: String,

    /// How the stressed syllable is distinguished
    #[serde(default)]
    pub stress_style: StressStyle,

    /// Re-transcribe records whose pronunciation cell is already filled
    #[serde(default)]
    pub overwrite_existing: bool,

    /// Maximum number of CSV files processed concurrently
    #[serde(default = "default_max_concurrent_files")]
    pub max_concurrent_files: usize,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Log level for the application
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

fn default_term_column() -> String {
    "term_italian".to_string()
}

fn default_pronunciation_column() -> String {
    "pronunciation".to_string()
}

fn default_max_concurrent_files() -> usize {
    4
}

impl Config {
    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        if self.term_column.trim().is_empty() {
            return Err(anyhow!("Term column name must not be empty"));
        }
        if self.pronunciation_column.trim().is_empty() {
            return Err(anyhow!("Pronunciation column name must not be empty"));
        }
        if self.term_column == self.pronunciation_column {
            return Err(anyhow!(
                "Term and pronunciation columns must differ: {}",
                self.term_column
            ));
        }
        if self.max_concurrent_files == 0 {
            return Err(anyhow!("max_concurrent_files must be at least 1"));
        }

        Ok(())
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            term_column: default_term_column(),
            pronunciation_column: default_pronunciation_column(),
            stress_style: StressStyle::default(),
            overwrite_existing: false,
            max_concurrent_files: default_max_concurrent_files(),
            log_level: LogLevel::default(),
        }
    }
}
