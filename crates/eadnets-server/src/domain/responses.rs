//! JSON bodies returned by the HTTP API.
//!
//! # JSON shape
//!
//! Absent optional fields are omitted rather than sent as `null`:
//!
//! ```json
//! {"success":true,"message":"Tunnel list retrieved","output":"ID NAME ..."}
//! {"success":false,"error":"Invalid action"}
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The general-purpose `{success, message|error}` body.
///
/// Used by every endpoint whose payload is a status line plus, optionally,
/// captured command output or an explanatory note.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Captured stdout (or stderr, for some failures) of an external command.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl ApiResponse {
    /// A successful response carrying `message`.
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            output: None,
            error: None,
            note: None,
        }
    }

    /// A failed response carrying `error`.
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            message: None,
            output: None,
            error: Some(error.into()),
            note: None,
        }
    }

    /// A response whose outcome is only described by `message`.
    pub fn with_outcome(success: bool, message: impl Into<String>) -> Self {
        Self {
            success,
            ..Self::ok(message)
        }
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn output(mut self, output: impl Into<String>) -> Self {
        self.output = Some(output.into());
        self
    }

    pub fn error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }

    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }
}

/// Body of `GET /api/status`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusResponse {
    pub success: bool,
    pub message: String,
    /// Local time, ISO-8601.
    pub timestamp: String,
    pub version: String,
}

/// Body of `GET /api/esp/status`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EspStatusResponse {
    pub success: bool,
    pub message: String,
    /// The configured device records, unchanged.
    pub devices: Vec<Value>,
    pub count: usize,
}

/// Body of `GET /api/logs`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogsResponse {
    pub success: bool,
    pub logs: String,
}

// ── Tests ─────────────────────────────────────────────────────────────────────
