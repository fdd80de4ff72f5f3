/*!
 * Error types for the keynorm application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

// Allow dead code - error types are for library consumers
#![allow(dead_code)]

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while normalizing file content
#[derive(Error, Debug)]
pub enum NormalizeError {
    /// Error when the structured strategy cannot parse the content
    #[error("Content is not valid JSON: {0}")]
    InvalidJson(String),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// The configured target directory is absent
    #[error("Target directory does not exist: {}", .0.display())]
    MissingDirectory(PathBuf),

    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error in the configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error from content normalization
    #[error("Normalization error: {0}")]
    Normalize(#[from] NormalizeError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
