//! Application configuration for quinegen.

use std::path::PathBuf;

use crate::error::AppError;

/// Application-wide configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory the three quine files are written into.
    pub output_dir: PathBuf,
}

impl Config {
    /// Create a configuration targeting a custom output directory.
    pub fn with_path(path: PathBuf) -> Self {
        Self { output_dir: path }
    }

    /// Create the default configuration, targeting the current working directory.
    pub fn new_default() -> Result<Self, AppError> {
        let output_dir = std::env::current_dir()?;
        Ok(Self { output_dir })
    }
}
