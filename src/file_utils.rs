use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use walkdir::WalkDir;

// @module: File and directory utilities

// @struct: File operations utility
pub struct FileManager;

impl FileManager {
    // @checks: File existence
    pub fn file_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_file()
    }

    // @checks: Directory existence
    pub fn dir_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_dir()
    }

    // @creates: Directory and parents if needed
    pub fn ensure_dir<P: AsRef<Path>>(path: P) -> Result<()> {
        let path = path.as_ref();
        if !path.exists() {
            fs::create_dir_all(path)?;
        }
        Ok(())
    }

    /// Find files with a specific extension directly inside a directory.
    /// The search stays at the top level and does not recurse into
    /// subdirectories. Extension matching is case-insensitive.
    pub fn find_files<P: AsRef<Path>>(dir: P, extension: &str) -> Result<Vec<PathBuf>> {
        let mut result = Vec::new();
        let normalized_ext = extension.trim_start_matches('.').to_string();

        for entry in WalkDir::new(dir.as_ref())
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
        {
            let entry = entry.context("Failed to read directory entry")?;
            let path = entry.path();

            if path.is_file() {
                if let Some(ext) = path.extension() {
                    if ext.to_string_lossy().eq_ignore_ascii_case(&normalized_ext) {
                        result.push(path.to_path_buf());
                    }
                }
            }
        }

        Ok(result)
    }

    /// Read a file to a string
    pub fn read_to_string<P: AsRef<Path>>(path: P) -> Result<String> {
        fs::read_to_string(&path)
            .with_context(|| format!("Failed to read file: {:?}", path.as_ref()))
    }

    /// Write a string to a file
    pub fn write_to_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            Self::ensure_dir(parent)?;
        }

        fs::write(&path, content)
            .with_context(|| format!("Failed to write to file: {:?}", path.as_ref()))?;

        Ok(())
    }

    /// Overwrite a file through a temporary file in the same directory
    /// followed by a rename, so an interrupted write never leaves partial
    /// content at the destination.
    pub fn write_atomic<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
        let path = path.as_ref();
        let dir = path.parent().unwrap_or_else(|| Path::new("."));

        let mut tmp = NamedTempFile::new_in(dir)
            .with_context(|| format!("Failed to create temporary file in {:?}", dir))?;

        tmp.write_all(content.as_bytes())
            .with_context(|| format!("Failed to write temporary file for {:?}", path))?;

        tmp.persist(path)
            .map_err(|e| e.error)
            .with_context(|| format!("Failed to replace file: {:?}", path))?;

        Ok(())
    }
}
