// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result, anyhow};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError, warn};
use std::fs::File;
use std::io::BufReader;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::app_config::Config;
use crate::transcription::{StressStyle, Transcriber};
use app_controller::Controller;

mod app_config;
mod app_controller;
mod errors;
mod file_utils;
mod transcription;
mod vocab_processor;

/// CLI Wrapper for StressStyle to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliStressStyle {
    Uppercase,
    Marker,
}

impl From<CliStressStyle> for StressStyle {
    fn from(cli_style: CliStressStyle) -> Self {
        match cli_style {
            CliStressStyle::Uppercase => StressStyle::Uppercase,
            CliStressStyle::Marker => StressStyle::Marker,
        }
    }
}

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

fn level_filter_for(level: &app_config::LogLevel) -> LevelFilter {
    match level {
        app_config::LogLevel::Error => LevelFilter::Error,
        app_config::LogLevel::Warn => LevelFilter::Warn,
        app_config::LogLevel::Info => LevelFilter::Info,
        app_config::LogLevel::Debug => LevelFilter::Debug,
        app_config::LogLevel::Trace => LevelFilter::Trace,
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Enrich vocabulary CSV files with a pronunciation column (default command)
    #[command(alias = "run")]
    Enrich(EnrichArgs),

    /// Transcribe a single term and print the respelling
    Pronounce {
        /// Italian term or short phrase
        #[arg(value_name = "TERM")]
        term: String,

        /// Stress rendering style
        #[arg(long, value_enum)]
        stress_style: Option<CliStressStyle>,
    },

    /// Generate shell completions for fonetico
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
struct EnrichArgs {
    /// Input CSV file or directory to process
    #[arg(value_name = "INPUT_PATH")]
    input_path: PathBuf,

    /// Re-transcribe cells that already hold a pronunciation
    #[arg(short, long)]
    force_overwrite: bool,

    /// CSV column holding the Italian term
    #[arg(short, long)]
    term_column: Option<String>,

    /// CSV column receiving the respelling
    #[arg(short, long)]
    pronunciation_column: Option<String>,

    /// Stress rendering style
    #[arg(long, value_enum)]
    stress_style: Option<CliStressStyle>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// fonetico - Italian pronunciation respelling
///
/// Converts Italian vocabulary terms into an English-learner-friendly
/// respelling with the stressed syllable marked, and writes it into a
/// pronunciation column of vocabulary CSV files.
#[derive(Parser, Debug)]
#[command(name = "fonetico")]
#[command(version = "1.0.0")]
#[command(about = "Italian pronunciation respelling tool")]
#[command(long_about = "fonetico transcribes Italian terms into English-friendly respellings
and enriches vocabulary CSV files with a pronunciation column.

EXAMPLES:
    fonetico nouns.csv                       # Enrich one CSV using default config
    fonetico -f dataframes/                  # Re-transcribe a whole directory
    fonetico -t term_italian nouns.csv       # Explicit term column
    fonetico --stress-style marker verbs.csv # Mark stress instead of upper-casing
    fonetico pronounce \"l'amico\"             # Print a single respelling
    fonetico completions bash > fonetico.bash

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a different
    config file with --config-path. If the config file doesn't exist, a default
    one will be created automatically.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Input CSV file or directory to process
    #[arg(value_name = "INPUT_PATH")]
    input_path: Option<PathBuf>,

    /// Re-transcribe cells that already hold a pronunciation
    #[arg(short, long)]
    force_overwrite: bool,

    /// CSV column holding the Italian term
    #[arg(short, long)]
    term_column: Option<String>,

    /// CSV column receiving the respelling
    #[arg(short, long)]
    pronunciation_column: Option<String>,

    /// Stress rendering style
    #[arg(long, value_enum)]
    stress_style: Option<CliStressStyle>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color for log level
    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1B[1;31m",
            Level::Warn => "\x1B[1;33m",
            Level::Info => "\x1B[0m",
            Level::Debug => "\x1B[2;37m",
            Level::Trace => "\x1B[2;35m",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S%.3f");
            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "{}{} [{}] {}\x1B[0m",
                Self::color_for_level(record.level()),
                now,
                record.level(),
                record.args()
            );
        }
    }

    fn flush(&self) {}
}

#[tokio::main]
async fn main() -> Result<()> {
    // Default log level until the config is loaded
    let _ = CustomLogger::init(LevelFilter::Info);

    let cli = CommandLineOptions::parse();

    // Handle subcommands
    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "fonetico", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Pronounce { term, stress_style }) => {
            let style = stress_style.map(StressStyle::from).unwrap_or_default();
            let transcriber = Transcriber::with_stress_style(style);
            println!("{}", transcriber.transcribe(&term));
            Ok(())
        }
        Some(Commands::Enrich(args)) => run_enrich(args).await,
        None => {
            // Default behavior - use top-level args for backwards compatibility
            let input_path = cli
                .input_path
                .ok_or_else(|| anyhow!("INPUT_PATH is required when no subcommand is specified"))?;

            let enrich_args = EnrichArgs {
                input_path,
                force_overwrite: cli.force_overwrite,
                term_column: cli.term_column,
                pronunciation_column: cli.pronunciation_column,
                stress_style: cli.stress_style,
                config_path: cli.config_path,
                log_level: cli.log_level,
            };
            run_enrich(enrich_args).await
        }
    }
}

async fn run_enrich(options: EnrichArgs) -> Result<()> {
    // If log level is set via command line, apply it immediately
    if let Some(cmd_log_level) = &options.log_level {
        let config_log_level: app_config::LogLevel = cmd_log_level.clone().into();
        log::set_max_level(level_filter_for(&config_log_level));
    }

    // Load or create configuration
    let config_path = &options.config_path;
    let config = if Path::new(config_path).exists() {
        // Load existing configuration
        let file = File::open(config_path)
            .context(format!("Failed to open config file: {}", config_path))?;

        let reader = BufReader::new(file);
        let mut config: Config = serde_json::from_reader(reader)
            .context(format!("Failed to parse config file: {}", config_path))?;

        // Override config with CLI options if provided
        if let Some(term_column) = &options.term_column {
            config.term_column = term_column.clone();
        }
        if let Some(pronunciation_column) = &options.pronunciation_column {
            config.pronunciation_column = pronunciation_column.clone();
        }
        if let Some(style) = &options.stress_style {
            config.stress_style = style.clone().into();
        }
        if let Some(log_level) = &options.log_level {
            config.log_level = log_level.clone().into();
        }

        config
    } else {
        // Create default configuration if not exists
        warn!(
            "Config file not found at '{}', creating default config.",
            config_path
        );

        let mut config = Config::default();

        if let Some(term_column) = &options.term_column {
            config.term_column = term_column.clone();
        }
        if let Some(pronunciation_column) = &options.pronunciation_column {
            config.pronunciation_column = pronunciation_column.clone();
        }
        if let Some(style) = &options.stress_style {
            config.stress_style = style.clone().into();
        }
        if let Some(log_level) = &options.log_level {
            config.log_level = log_level.clone().into();
        }

        // Save default config
        let config_json = serde_json::to_string_pretty(&config)
            .context("Failed to serialize default config to JSON")?;

        std::fs::write(config_path, config_json)
            .context(format!("Failed to write default config to file: {}", config_path))?;

        config
    };

    // Validate the configuration after loading and overriding
    config.validate().context("Configuration validation failed")?;

    // If log level was not set via command line, update it from config now
    if options.log_level.is_none() {
        log::set_max_level(level_filter_for(&config.log_level));
    }

    let controller = Controller::with_config(config)?;
    let summary = controller
        .run(options.input_path, options.force_overwrite)
        .await?;

    if summary.files_failed > 0 {
        return Err(anyhow!("{} file(s) failed to process", summary.files_failed));
    }

    Ok(())
}
