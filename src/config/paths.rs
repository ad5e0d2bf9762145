//! Path resolution for ohayo configuration and data files.
//!
//! All ohayo data is stored in `~/.ohayo/`:
//! - `env` - Flat KEY=value configuration file
//! - `logs/` - Session records
//! - `logs/current.csv` - The single current-session record
//! - `logs/<date>.csv` - Archived ended sessions

use std::path::PathBuf;

use crate::error::OhayoError;

/// Paths to ohayo configuration and data files.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Root directory: `~/.ohayo/`
    pub root: PathBuf,
    /// Config file: `~/.ohayo/env`
    pub env_file: PathBuf,
    /// Session log directory: `~/.ohayo/logs/`
    pub logs: PathBuf,
    /// Current session record: `~/.ohayo/logs/current.csv`
    pub current_record: PathBuf,
}

impl Paths {
    /// Create paths based on the user's home directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, OhayoError> {
        let home = std::env::var("HOME")
            .map_err(|_| OhayoError::Config("Could not determine home directory".to_string()))?;

        Ok(Self::with_root(PathBuf::from(home).join(".ohayo")))
    }

    /// Create paths with a custom root directory (useful for testing).
    #[must_use]
    pub fn with_root(root: PathBuf) -> Self {
        let logs = root.join("logs");
        Self {
            env_file: root.join("env"),
            current_record: logs.join("current.csv"),
            logs,
            root,
        }
    }

    /// Ensure all directories exist, creating them if necessary.
    ///
    /// # Errors
    ///
    /// Returns an error if directory creation fails.
    pub fn ensure_dirs(&self) -> Result<(), OhayoError> {
        for dir in [&self.root, &self.logs] {
            if !dir.exists() {
                std::fs::create_dir_all(dir).map_err(|e| {
                    OhayoError::Config(format!("Failed to create directory {}: {e}", dir.display()))
                })?;
            }
        }
        Ok(())
    }
}
