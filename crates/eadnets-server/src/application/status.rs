//! Liveness report for `GET /api/status`.

use chrono::{DateTime, Local};

use crate::domain::StatusResponse;

/// Message reported while the server is up.
pub const RUNNING_MESSAGE: &str = "EAD Networks server running";

/// Builds the liveness body stamped with `now`.
pub fn server_status(now: DateTime<Local>) -> StatusResponse {
    StatusResponse {
        success: true,
        message: RUNNING_MESSAGE.to_string(),
        timestamp: now.to_rfc3339(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    }
}
