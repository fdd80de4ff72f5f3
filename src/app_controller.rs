use anyhow::{anyhow, Context, Result};
use log::{debug, error, info, warn};
use std::path::Path;
use std::time::Duration;

use crate::app_config::{Config, NormalizeStrategy, OnErrorPolicy};
use crate::file_utils::FileManager;
use crate::key_normalizer::{self, FileReport, RunSummary};

// @module: Application controller for localization key normalization

/// Main application controller driving the normalization run
pub struct Controller {
    // @field: App configuration
    config: Config,
}

impl Controller {
    /// Create a new controller for test purposes with default configuration
    pub fn new_for_test() -> Result<Self> {
        Self::with_config(Config::default())
    }

    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        let controller = Self {
            config,
        };

        Ok(controller)
    }

    /// Check if the controller is properly initialized with configuration
    pub fn is_initialized(&self) -> bool {
        !self.config.translations_dir.is_empty() && !self.config.file_extension.is_empty()
    }

    /// Run the full workflow: locate the target directory, enumerate
    /// qualifying files, normalize each one and report a summary.
    ///
    /// A missing target directory aborts the run before any file is
    /// touched. Per-file failures are handled according to the configured
    /// on-error policy; either way a run with failed files returns an
    /// error. With `dry_run` set, renames are reported but nothing is
    /// written back.
    pub fn run(&self, dry_run: bool) -> Result<RunSummary> {
        // Start timing the process
        let start_time = std::time::Instant::now();

        let target_dir = Path::new(&self.config.translations_dir);
        if !FileManager::dir_exists(target_dir) {
            return Err(anyhow!("Target directory does not exist: {:?}", target_dir));
        }

        let files = FileManager::find_files(target_dir, &self.config.file_extension)
            .with_context(|| format!("Failed to list directory: {:?}", target_dir))?;

        if files.is_empty() {
            warn!(
                "No .{} files found in {:?}",
                self.config.file_extension.trim_start_matches('.'),
                target_dir
            );
        }

        let mut summary = RunSummary::default();

        for path in &files {
            match self.process_file(path, dry_run) {
                Ok(report) => {
                    summary.files_processed += 1;
                    summary.keys_renamed += report.renames.len();
                }
                Err(e) => {
                    summary.files_failed += 1;
                    match self.config.on_error {
                        OnErrorPolicy::Continue => {
                            error!("Error processing file {:?}: {}", path, e);
                        }
                        OnErrorPolicy::Abort => {
                            return Err(e.context(format!("Aborting run at file: {:?}", path)));
                        }
                    }
                }
            }
        }

        info!(
            "Finished processing {} files, renamed {} keys in {}",
            summary.files_processed,
            summary.keys_renamed,
            Self::format_duration(start_time.elapsed())
        );

        if summary.files_failed > 0 {
            return Err(anyhow!("{} file(s) failed to process", summary.files_failed));
        }

        Ok(summary)
    }

    /// Normalize a single file: read, rewrite dotted keys, write back
    fn process_file(&self, path: &Path, dry_run: bool) -> Result<FileReport> {
        info!("Processing file: {:?}", path);

        let content = FileManager::read_to_string(path)?;

        let (new_content, renames) = match self.config.strategy {
            NormalizeStrategy::Text => key_normalizer::normalize_content(&content),
            NormalizeStrategy::Structured => key_normalizer::normalize_structured(&content)
                .with_context(|| format!("Failed to parse file as JSON: {:?}", path))?,
        };

        for rename in &renames {
            info!("  Renamed key: '{}' -> '{}'", rename.old_key, rename.new_key);
        }

        if dry_run {
            debug!("Dry run, skipping write for {:?}", path);
        } else {
            // The original tool rewrites every qualifying file, matched or not
            FileManager::write_atomic(path, &new_content)?;
        }

        info!("Completed file: {:?}", path);

        Ok(FileReport {
            path: path.to_path_buf(),
            renames,
        })
    }

    // @returns: Human-readable duration for the summary line
    fn format_duration(duration: Duration) -> String {
        let total_ms = duration.as_millis();
        if total_ms < 1000 {
            format!("{}ms", total_ms)
        } else {
            format!("{:.2}s", duration.as_secs_f64())
        }
    }
}
