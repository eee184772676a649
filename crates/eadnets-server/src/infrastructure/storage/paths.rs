//! Locations of the files the server persists.
//!
//! Everything lives in one per-user directory, `~/.eadnets` by default:
//!
//! ```text
//! ~/.eadnets/
//!   config.json   configuration document (replaced whole on save)
//!   server.log    append-only log written by the tracing file layer
//! ```

use std::path::{Path, PathBuf};

use super::config_store::ConfigError;

const DIR_NAME: &str = ".eadnets";
const CONFIG_FILE_NAME: &str = "config.json";
const LOG_FILE_NAME: &str = "server.log";

/// The server's state directory and the file paths derived from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppPaths {
    config_dir: PathBuf,
}

impl AppPaths {
    /// Uses `config_dir` as the state directory.  Nothing is created yet.
    pub fn new(config_dir: impl Into<PathBuf>) -> Self {
        Self {
            config_dir: config_dir.into(),
        }
    }

    /// `~/.eadnets` for the current user.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NoHomeDir`] when the home directory cannot be
    /// determined from the environment.
    pub fn default_dir() -> Result<PathBuf, ConfigError> {
        directories::BaseDirs::new()
            .map(|dirs| dirs.home_dir().join(DIR_NAME))
            .ok_or(ConfigError::NoHomeDir)
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join(CONFIG_FILE_NAME)
    }

    pub fn log_file(&self) -> PathBuf {
        self.config_dir.join(LOG_FILE_NAME)
    }

    /// Creates the state directory (and parents) if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the directory cannot be created.
    pub fn ensure_dir(&self) -> Result<(), ConfigError> {
        std::fs::create_dir_all(&self.config_dir).map_err(|source| ConfigError::Io {
            path: self.config_dir.clone(),
            source,
        })
    }
}
