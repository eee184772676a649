//! Server log retrieval.

use std::io;

use tracing::warn;

use crate::domain::{ApiResponse, LogsResponse};

/// Returned in place of the contents when no log has been written yet.
pub const NO_LOGS: &str = "No logs available";

/// Where the server log can be read from.
pub trait LogSource: Send + Sync {
    /// The full log contents, or `None` if there is no log yet.
    fn read_logs(&self) -> io::Result<Option<String>>;
}

/// `GET /api/logs`.
///
/// # Errors
///
/// A read error becomes a failure body carrying the OS message.
pub fn get_logs(source: &dyn LogSource) -> Result<LogsResponse, ApiResponse> {
    match source.read_logs() {
        Ok(contents) => Ok(LogsResponse {
            success: true,
            logs: contents.unwrap_or_else(|| NO_LOGS.to_string()),
        }),
        Err(e) => {
            warn!(error = %e, "failed to read server log");
            Err(ApiResponse::failure(e.to_string()))
        }
    }
}
