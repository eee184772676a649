//! Storage infrastructure: the per-user directory and the config file.
//!
//! - `paths` resolves `~/.eadnets` (or an injected directory) and the files
//!   inside it.
//! - `config_store` reads the JSON config file, merges it over defaults, and
//!   writes replacements back atomically.
//!
//! Keeping storage concerns here means the HTTP layer never touches the
//! file system directly.

pub mod config_store;
pub mod paths;

pub use config_store::{ConfigError, ConfigStore};
pub use paths::AppPaths;
