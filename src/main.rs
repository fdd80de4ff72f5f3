// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use log::{warn, Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::fs::File;
use std::io::{BufReader, Write};
use std::path::Path;

use crate::app_config::{Config, NormalizeStrategy, OnErrorPolicy};
use crate::file_utils::FileManager;
use app_controller::Controller;

mod app_config;
mod app_controller;
mod errors;
mod file_utils;
mod key_normalizer;

/// CLI Wrapper for NormalizeStrategy to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliNormalizeStrategy {
    Text,
    Structured,
}

impl From<CliNormalizeStrategy> for NormalizeStrategy {
    fn from(cli_strategy: CliNormalizeStrategy) -> Self {
        match cli_strategy {
            CliNormalizeStrategy::Text => NormalizeStrategy::Text,
            CliNormalizeStrategy::Structured => NormalizeStrategy::Structured,
        }
    }
}

/// CLI Wrapper for OnErrorPolicy to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliOnErrorPolicy {
    Continue,
    Abort,
}

impl From<CliOnErrorPolicy> for OnErrorPolicy {
    fn from(cli_policy: CliOnErrorPolicy) -> Self {
        match cli_policy {
            CliOnErrorPolicy::Continue => OnErrorPolicy::Continue,
            CliOnErrorPolicy::Abort => OnErrorPolicy::Abort,
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

#[derive(Subcommand, Debug)]
enum Commands {
    /// Normalize localization keys in the target directory (default command)
    #[command(alias = "fix")]
    Normalize(NormalizeArgs),

    /// Generate shell completions for keynorm
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
struct NormalizeArgs {
    /// Directory of localization files to process (defaults to the configured directory)
    #[arg(value_name = "TARGET_DIR")]
    target_dir: Option<String>,

    /// File name suffix a file must carry to qualify for processing
    #[arg(short, long)]
    extension: Option<String>,

    /// Normalization strategy to use
    #[arg(short, long, value_enum)]
    strategy: Option<CliNormalizeStrategy>,

    /// Policy when a single file fails to process
    #[arg(long, value_enum)]
    on_error: Option<CliOnErrorPolicy>,

    /// Report renames without writing any file
    #[arg(long)]
    dry_run: bool,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// keynorm - Localization Key Normalizer
///
/// Rewrites localization keys that contain dots so they no longer collide
/// with frameworks that interpret dots as paths into nested structures.
#[derive(Parser, Debug)]
#[command(name = "keynorm")]
#[command(author = "keynorm contributors")]
#[command(version = "1.0.0")]
#[command(about = "Replace dots with underscores in localization key names")]
#[command(long_about = "keynorm scans a directory of localization data files and rewrites every
quoted key containing a dot, replacing each dot with an underscore. Values
are never modified.

EXAMPLES:
    keynorm                                  # Process the configured directory
    keynorm web/assets/translations          # Process a specific directory
    keynorm --dry-run                        # Show renames without writing
    keynorm -s structured                    # Parse JSON instead of text matching
    keynorm --on-error abort                 # Stop at the first failing file
    keynorm --log-level debug                # Verbose output
    keynorm completions bash > keynorm.bash  # Generate bash completions

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a different
    config file with --config-path. If the config file doesn't exist, a default
    one will be created automatically.

STRATEGIES:
    text        - Literal text substitution, preserves formatting verbatim (default)
    structured  - Parse as JSON, rename keys recursively, re-serialize pretty-printed")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Directory of localization files to process (defaults to the configured directory)
    #[arg(value_name = "TARGET_DIR")]
    target_dir: Option<String>,

    /// File name suffix a file must carry to qualify for processing
    #[arg(short, long)]
    extension: Option<String>,

    /// Normalization strategy to use
    #[arg(short, long, value_enum)]
    strategy: Option<CliNormalizeStrategy>,

    /// Policy when a single file fails to process
    #[arg(long, value_enum)]
    on_error: Option<CliOnErrorPolicy>,

    /// Report renames without writing any file
    #[arg(long)]
    dry_run: bool,

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
    fn get_color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1B[1;31m",
            Level::Warn => "\x1B[1;33m",
            Level::Info => "\x1B[1;32m",
            Level::Debug => "\x1B[1;36m",
            Level::Trace => "\x1B[1;35m",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let color = Self::get_color_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(stderr, "{}{} {}\x1B[0m", color, now, record.args());
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn main() -> Result<()> {
    // Initialize the logger once with info level by default
    // We'll update the level after loading the config if needed
    CustomLogger::init(LevelFilter::Info)?;

    // Parse command line arguments using clap
    let cli = CommandLineOptions::parse();

    // Handle subcommands
    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "keynorm", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Normalize(args)) => run_normalize(args),
        None => {
            // Default behavior - use top-level args
            let normalize_args = NormalizeArgs {
                target_dir: cli.target_dir,
                extension: cli.extension,
                strategy: cli.strategy,
                on_error: cli.on_error,
                dry_run: cli.dry_run,
                config_path: cli.config_path,
                log_level: cli.log_level,
            };
            run_normalize(normalize_args)
        }
    }
}

fn run_normalize(options: NormalizeArgs) -> Result<()> {
    // If log level is set via command line, apply it immediately
    if let Some(cmd_log_level) = &options.log_level {
        let config_log_level: app_config::LogLevel = cmd_log_level.clone().into();
        let log_level = match config_log_level {
            app_config::LogLevel::Error => LevelFilter::Error,
            app_config::LogLevel::Warn => LevelFilter::Warn,
            app_config::LogLevel::Info => LevelFilter::Info,
            app_config::LogLevel::Debug => LevelFilter::Debug,
            app_config::LogLevel::Trace => LevelFilter::Trace,
        };
        log::set_max_level(log_level);
    }

    // Load or create configuration
    let config_path = &options.config_path;
    let mut config: Config = if Path::new(config_path).exists() {
        // Load existing configuration
        let file = File::open(config_path)
            .context(format!("Failed to open config file: {}", config_path))?;

        let reader = BufReader::new(file);
        serde_json::from_reader(reader)
            .context(format!("Failed to parse config file: {}", config_path))?
    } else {
        // Create default configuration if not exists
        warn!("Config file not found at '{}', creating default config.", config_path);

        let config = Config::default();

        // Save default config
        let config_json = serde_json::to_string_pretty(&config)
            .context("Failed to serialize default config to JSON")?;

        FileManager::write_to_file(config_path, &config_json)
            .context(format!("Failed to write default config to file: {}", config_path))?;

        config
    };

    // Override config with CLI options if provided
    if let Some(target_dir) = &options.target_dir {
        config.translations_dir = target_dir.clone();
    }

    if let Some(extension) = &options.extension {
        config.file_extension = extension.clone();
    }

    if let Some(strategy) = &options.strategy {
        config.strategy = strategy.clone().into();
    }

    if let Some(policy) = &options.on_error {
        config.on_error = policy.clone().into();
    }

    if let Some(log_level) = &options.log_level {
        config.log_level = log_level.clone().into();
    }

    // Validate the configuration after loading and overriding
    config.validate()
        .context("Configuration validation failed")?;

    // If log level was not set via command line, update it from config now
    if options.log_level.is_none() {
        let log_level = match config.log_level {
            app_config::LogLevel::Error => LevelFilter::Error,
            app_config::LogLevel::Warn => LevelFilter::Warn,
            app_config::LogLevel::Info => LevelFilter::Info,
            app_config::LogLevel::Debug => LevelFilter::Debug,
            app_config::LogLevel::Trace => LevelFilter::Trace,
        };

        // Just update the max level without reinitializing the logger
        log::set_max_level(log_level);
    }

    // Create controller and run the workflow
    let controller = Controller::with_config(config)?;
    controller.run(options.dry_run)?;

    Ok(())
}
