//! Reading and replacing the configuration document.
//!
//! Saving validates only the outermost shape of the body: it must be JSON and
//! its top level must be an object.  Section contents are written through
//! as-is; a section with wrong field types is tolerated on the next read by
//! the per-field merge, which keeps the default for any field it cannot use.

use eadnets_core::config::merge::json_type;
use eadnets_core::AppConfig;
use serde_json::Value;
use thiserror::Error;
use tracing::info;

use crate::domain::ApiResponse;

/// Where the configuration document lives.
///
/// Implemented by the file-backed store in the infrastructure layer and by
/// in-memory fakes in tests.
pub trait ConfigRepository: Send + Sync {
    /// The complete configuration, merged over defaults.  Never fails.
    fn load(&self) -> AppConfig;

    /// Replaces the stored document with `document`.  Returns `false` (after
    /// logging) if it could not be written.
    fn save(&self, document: &Value) -> bool;
}

/// Why a request body was rejected before reaching the store.
#[derive(Debug, Error)]
pub enum BodyError {
    #[error("{0}")]
    Parse(#[from] serde_json::Error),

    #[error("configuration must be a JSON object, got {0}")]
    NotAnObject(&'static str),
}

/// `GET /api/config`.
pub fn get_config(repo: &dyn ConfigRepository) -> AppConfig {
    repo.load()
}

/// Parses a config-save request body.
///
/// # Errors
///
/// Returns [`BodyError::Parse`] for invalid JSON and
/// [`BodyError::NotAnObject`] when the top level is not an object.
pub fn parse_config_body(body: &[u8]) -> Result<Value, BodyError> {
    let document: Value = serde_json::from_slice(body)?;
    if document.is_object() {
        Ok(document)
    } else {
        Err(BodyError::NotAnObject(json_type(&document)))
    }
}

/// `POST /api/config`.
pub fn save_config(repo: &dyn ConfigRepository, body: &[u8]) -> ApiResponse {
    let document = match parse_config_body(body) {
        Ok(document) => document,
        Err(e) => return ApiResponse::failure(e.to_string()),
    };

    if repo.save(&document) {
        info!("configuration saved");
        ApiResponse::ok("Configuration saved")
    } else {
        ApiResponse::failure("Failed to save configuration")
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
