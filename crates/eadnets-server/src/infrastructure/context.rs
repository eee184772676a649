//! Shared state handed to every HTTP handler.

use std::sync::Arc;
use std::time::Duration;

use eadnets_core::{ProcessLauncher, DEFAULT_TIMEOUT};

use super::logging::LogFile;
use super::process::TokioProcessLauncher;
use super::storage::{AppPaths, ConfigStore};

/// Everything a request needs: the files it reads and how to run commands.
///
/// Holds no configuration values; handlers load the config fresh per request.
pub struct AppContext {
    pub store: ConfigStore,
    pub log_file: LogFile,
    pub launcher: Arc<dyn ProcessLauncher>,
    pub command_timeout: Duration,
}

impl AppContext {
    /// Context rooted at `paths` using `launcher` for external commands.
    pub fn new(paths: AppPaths, launcher: Arc<dyn ProcessLauncher>) -> Self {
        Self {
            store: ConfigStore::new(paths.config_file()),
            log_file: LogFile::new(paths.log_file()),
            launcher,
            command_timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Production context: real child processes, 30 s timeout.
    pub fn with_system_launcher(paths: AppPaths) -> Self {
        Self::new(paths, Arc::new(TokioProcessLauncher::new()))
    }

    pub fn with_command_timeout(mut self, timeout: Duration) -> Self {
        self.command_timeout = timeout;
        self
    }
}
