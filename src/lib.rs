/*!
 * # keynorm - Localization Key Normalizer
 *
 * A Rust tool that rewrites localization keys containing dots so they no
 * longer collide with frameworks that read dots as paths into nested
 * structures: every `.` inside a quoted key becomes a `_`, values are left
 * byte-for-byte untouched.
 *
 * ## Features
 *
 * - Scans a directory of localization data files (non-recursive)
 * - Rewrites `"key.with.dots": "value"` pairs in place
 * - Literal text substitution by default, preserving file formatting
 * - Optional structured JSON mode for content with escaped quotes
 * - Atomic in-place rewrite (temp file + rename)
 * - Dry-run mode and a configurable multi-file failure policy
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `key_normalizer`: The substitution pass over file content
 * - `file_utils`: File system operations
 * - `app_controller`: Main application controller
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
pub mod key_normalizer;

// Re-export main types for easier usage
pub use app_config::{Config, NormalizeStrategy, OnErrorPolicy};
pub use app_controller::Controller;
pub use errors::{AppError, NormalizeError};
pub use key_normalizer::{normalize_content, normalize_structured, FileReport, KeyRename, RunSummary};
