use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::default::Default;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Directory holding the localization files to normalize
    #[serde(default = "default_translations_dir")]
    pub translations_dir: String,

    /// File name suffix a file must carry to qualify for processing
    #[serde(default = "default_file_extension")]
    pub file_extension: String,

    /// How file content is normalized
    #[serde(default)]
    pub strategy: NormalizeStrategy,

    /// What to do with the rest of the batch when one file fails
    #[serde(default)]
    pub on_error: OnErrorPolicy,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Content normalization strategy
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum NormalizeStrategy {
    // @strategy: Literal text substitution, preserves formatting verbatim
    #[default]
    Text,
    // @strategy: Parse as JSON, rename keys, re-serialize pretty-printed
    Structured,
}

impl NormalizeStrategy {
    // @returns: Lowercase strategy identifier
    pub fn to_lowercase_string(&self) -> String {
        match self {
            Self::Text => "text".to_string(),
            Self::Structured => "structured".to_string(),
        }
    }
}

// Implement Display trait for NormalizeStrategy
impl std::fmt::Display for NormalizeStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_lowercase_string())
    }
}

// Implement FromStr trait for NormalizeStrategy
impl std::str::FromStr for NormalizeStrategy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "structured" => Ok(Self::Structured),
            _ => Err(anyhow!("Invalid normalization strategy: {}", s)),
        }
    }
}

/// Policy applied when a single file fails to process
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OnErrorPolicy {
    // @policy: Log the failure and move on to the next file
    #[default]
    Continue,
    // @policy: Stop the run at the first failing file
    Abort,
}

impl std::fmt::Display for OnErrorPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Continue => write!(f, "continue"),
            Self::Abort => write!(f, "abort"),
        }
    }
}

/// Log verbosity level
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

fn default_translations_dir() -> String {
    // The fixed path the tool historically targeted
    "assets/translations".to_string()
}

fn default_file_extension() -> String {
    "json".to_string()
}

impl Config {
    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        if self.translations_dir.trim().is_empty() {
            return Err(anyhow!("Target directory must not be empty"));
        }

        let extension = self.file_extension.trim_start_matches('.');
        if extension.is_empty() {
            return Err(anyhow!("File extension must not be empty"));
        }
        if extension.contains('/') || extension.contains('\\') {
            return Err(anyhow!(
                "File extension must not contain a path separator: {}",
                self.file_extension
            ));
        }

        Ok(())
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            translations_dir: default_translations_dir(),
            file_extension: default_file_extension(),
            strategy: NormalizeStrategy::default(),
            on_error: OnErrorPolicy::default(),
            log_level: LogLevel::default(),
        }
    }
}
