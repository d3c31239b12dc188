use anyhow::{Result, anyhow};
use futures::stream::{self, StreamExt};
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use log::{debug, error, info, warn};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::Semaphore;

use crate::app_config::Config;
use crate::file_utils::FileManager;
use crate::transcription::Transcriber;
use crate::vocab_processor::{EnrichmentOutcome, VocabCollection};

// @module: Application controller for vocabulary enrichment

/// Totals for one enrichment run
#[derive(Debug, Clone, Copy, Default)]
pub struct RunSummary {
    /// Files whose pronunciation column was written
    pub files_enriched: usize,
    /// Files skipped for lacking the term column
    pub files_skipped: usize,
    /// Files that failed to parse or save
    pub files_failed: usize,
    /// Terms transcribed across all files
    pub terms_enriched: usize,
    /// Terms left alone because their cell was already filled
    pub terms_skipped: usize,
}

/// Result of processing a single vocabulary file
enum FileOutcome {
    /// File was enriched (possibly with zero cells to fill)
    Enriched(EnrichmentOutcome),
    /// File has no term column and was left untouched
    SkippedMissingColumn,
}

/// Main application controller for vocabulary enrichment
pub struct Controller {
    // @field: App configuration
    config: Config,

    // @field: Engine configured from the app settings
    transcriber: Transcriber,
}

impl Controller {
    /// Create a new controller for test purposes with default configuration
    pub fn new_for_test() -> Result<Self> {
        Self::with_config(Config::default())
    }

    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        let transcriber = Transcriber::with_stress_style(config.stress_style);
        Ok(Controller {
            config,
            transcriber,
        })
    }

    /// Check if the controller is properly initialized with configuration
    pub fn is_initialized(&self) -> bool {
        !self.config.term_column.is_empty() && !self.config.pronunciation_column.is_empty()
    }

    /// Run enrichment over a CSV file or a directory of CSV files
    pub async fn run(&self, input_path: PathBuf, force_overwrite: bool) -> Result<RunSummary> {
        let start_time = std::time::Instant::now();

        if !input_path.exists() {
            return Err(anyhow!("Input path does not exist: {:?}", input_path));
        }

        let summary = if input_path.is_dir() {
            self.run_folder(input_path, force_overwrite).await?
        } else {
            let mut summary = RunSummary::default();
            match self.process_file(&input_path, force_overwrite)? {
                FileOutcome::Enriched(outcome) => {
                    summary.files_enriched = 1;
                    summary.terms_enriched = outcome.enriched;
                    summary.terms_skipped = outcome.skipped;
                }
                FileOutcome::SkippedMissingColumn => summary.files_skipped = 1,
            }
            summary
        };

        info!(
            "Completed in {}: {} files enriched, {} skipped, {} failed ({} terms transcribed, {} already filled)",
            Self::format_duration(start_time.elapsed()),
            summary.files_enriched,
            summary.files_skipped,
            summary.files_failed,
            summary.terms_enriched,
            summary.terms_skipped
        );

        Ok(summary)
    }

    /// Run enrichment over every CSV file under a directory.
    ///
    /// Files are processed concurrently up to the configured cap; a failing
    /// file is logged and counted without aborting the run.
    pub async fn run_folder(
        &self,
        input_dir: PathBuf,
        force_overwrite: bool,
    ) -> Result<RunSummary> {
        let files = FileManager::find_csv_files(&input_dir)?;
        if files.is_empty() {
            warn!("No CSV files found under {:?}", input_dir);
            return Ok(RunSummary::default());
        }

        info!("Processing {} vocabulary files", files.len());

        let multi_progress = MultiProgress::new();
        let progress_bar = multi_progress.add(ProgressBar::new(files.len() as u64));
        let template_result = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files ({percent}%) {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        progress_bar.set_style(template_result.progress_chars("=>-"));
        progress_bar.set_message("Enriching");

        // Bound concurrent file processing
        let semaphore = Arc::new(Semaphore::new(self.config.max_concurrent_files));

        let results: Vec<(PathBuf, Result<FileOutcome>)> = stream::iter(files)
            .map(|path| {
                let semaphore = semaphore.clone();
                let progress_bar = progress_bar.clone();
                async move {
                    let result = match semaphore.acquire().await {
                        Ok(_permit) => self.process_file(&path, force_overwrite),
                        Err(closed) => Err(anyhow!("Concurrency limiter closed: {}", closed)),
                    };
                    progress_bar.inc(1);
                    (path, result)
                }
            })
            .buffer_unordered(self.config.max_concurrent_files)
            .collect()
            .await;

        progress_bar.finish_with_message("Done");

        let mut summary = RunSummary::default();
        for (path, result) in results {
            match result {
                Ok(FileOutcome::Enriched(outcome)) => {
                    debug!(
                        "Enriched {:?}: {} transcribed, {} already filled",
                        path, outcome.enriched, outcome.skipped
                    );
                    summary.files_enriched += 1;
                    summary.terms_enriched += outcome.enriched;
                    summary.terms_skipped += outcome.skipped;
                }
                Ok(FileOutcome::SkippedMissingColumn) => summary.files_skipped += 1,
                Err(err) => {
                    error!("Failed to process {:?}: {:#}", path, err);
                    summary.files_failed += 1;
                }
            }
        }

        Ok(summary)
    }

    /// Enrich one vocabulary file in place.
    ///
    /// The file is rewritten only when at least one cell changed, so repeat
    /// runs without overwrite leave files untouched.
    fn process_file(&self, path: &Path, force_overwrite: bool) -> Result<FileOutcome> {
        let mut collection = VocabCollection::from_file(path)?;

        if collection.column_index(&self.config.term_column).is_none() {
            warn!(
                "Skipping {:?}: no '{}' column",
                path, self.config.term_column
            );
            return Ok(FileOutcome::SkippedMissingColumn);
        }

        let overwrite = force_overwrite || self.config.overwrite_existing;
        let outcome = collection.enrich(
            &self.transcriber,
            &self.config.term_column,
            &self.config.pronunciation_column,
            overwrite,
        )?;

        if outcome.enriched > 0 {
            collection.save()?;
        }

        Ok(FileOutcome::Enriched(outcome))
    }

    /// Format a duration for the completion log line
    fn format_duration(duration: std::time::Duration) -> String {
        let secs = duration.as_secs();
        if secs >= 60 {
            format!("{}m {}s", secs / 60, secs % 60)
        } else {
            format!("{:.1}s", duration.as_secs_f32())
        }
    }
}
