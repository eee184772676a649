//! JSON configuration persistence.
//!
//! Reads are forgiving and writes are literal:
//!
//! - [`ConfigStore::load`] never fails.  A missing file yields the defaults;
//!   an unreadable or unparsable file is logged and also yields the defaults;
//!   otherwise the on-disk document is merged over the defaults section by
//!   section (see [`eadnets_core::config::merge`]).
//! - [`ConfigStore::save`] writes the caller's document exactly as given,
//!   pretty-printed with two-space indentation.  The file is written to a
//!   temporary sibling and renamed into place, so a concurrent reader or a
//!   second concurrent writer never observes a half-written file.  The last
//!   rename wins.
//!
//! There is no cache: every call goes to disk.

use std::io::Write;
use std::path::{Path, PathBuf};

use eadnets_core::config::merge::json_type;
use eadnets_core::{merge_over_defaults, AppConfig};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, error};

use crate::application::config::ConfigRepository;

/// Error type for configuration file operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The user's home directory could not be determined.
    #[error("could not determine the home directory")]
    NoHomeDir,

    /// A file system I/O error occurred.
    #[error("I/O error accessing config at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid JSON, or a document could not be serialized.
    #[error("failed to parse config JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Reads and writes the configuration document at one fixed path.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the complete configuration: the on-disk document merged over
    /// the defaults, or the defaults alone if the file is absent or broken.
    pub fn load(&self) -> AppConfig {
        match self.load_raw() {
            Ok(None) => {
                debug!(path = %self.path.display(), "no config file; using defaults");
                AppConfig::default()
            }
            Ok(Some(Value::Object(map))) => merge_over_defaults(&map),
            Ok(Some(other)) => {
                error!(
                    "Error loading config: expected a JSON object, found {}",
                    json_type(&other)
                );
                AppConfig::default()
            }
            Err(e) => {
                error!("Error loading config: {e}");
                AppConfig::default()
            }
        }
    }

    /// Reads the document exactly as stored, without merging defaults.
    ///
    /// Returns `Ok(None)` when the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] for file-system errors other than "not
    /// found", and [`ConfigError::Parse`] if the content is not valid JSON.
    pub fn load_raw(&self) -> Result<Option<Value>, ConfigError> {
        match std::fs::read_to_string(&self.path) {
            Ok(content) => Ok(Some(serde_json::from_str(&content)?)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(ConfigError::Io {
                path: self.path.clone(),
                source,
            }),
        }
    }

    /// Replaces the config file with `document`, pretty-printed.
    ///
    /// No merge or schema check is applied: what the caller sends is what
    /// the next [`load_raw`](Self::load_raw) returns.  Failures are logged
    /// before being returned.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the directory, the temporary file, or
    /// the final rename fails.
    pub fn save(&self, document: &Value) -> Result<(), ConfigError> {
        self.write_atomically(document).map_err(|e| {
            error!("Error saving config: {e}");
            e
        })
    }

    fn write_atomically(&self, document: &Value) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(document)?;
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        let io_err = |source: std::io::Error| ConfigError::Io {
            path: self.path.clone(),
            source,
        };

        std::fs::create_dir_all(&dir).map_err(|source| ConfigError::Io {
            path: dir.clone(),
            source,
        })?;

        // The temp file must live in the same directory so the rename below
        // stays on one file system and is atomic.
        let mut tmp = tempfile::NamedTempFile::new_in(&dir).map_err(io_err)?;
        tmp.write_all(content.as_bytes()).map_err(io_err)?;
        tmp.as_file().sync_all().map_err(io_err)?;
        tmp.persist(&self.path).map_err(|e| io_err(e.error))?;

        debug!(path = %self.path.display(), bytes = content.len(), "config saved");
        Ok(())
    }
}

impl ConfigRepository for ConfigStore {
    fn load(&self) -> AppConfig {
        ConfigStore::load(self)
    }

    fn save(&self, document: &Value) -> bool {
        ConfigStore::save(self, document).is_ok()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
