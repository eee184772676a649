//! The uniform outcome record for one external command.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Outcome of running one external command.
///
/// Three shapes are possible:
///
/// | Outcome          | `success`        | `returncode` | `error`          | stdout/stderr |
/// |------------------|------------------|--------------|------------------|---------------|
/// | process exited   | `exit code == 0` | `Some(code)` | `None`           | captured      |
/// | timed out        | `false`          | `None`       | timeout message  | empty         |
/// | failed to launch | `false`          | `None`       | OS error text    | empty         |
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandResult {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
    /// Exit code of the process.  Absent when it never exited on its own.
    #[serde(rename = "returncode", skip_serializing_if = "Option::is_none")]
    pub exit_code: Option<i32>,
    /// Populated only for timeouts and launch failures.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CommandResult {
    /// The process ran and exited with `exit_code`.
    pub fn completed(exit_code: i32, stdout: String, stderr: String) -> Self {
        Self {
            success: exit_code == 0,
            stdout,
            stderr,
            exit_code: Some(exit_code),
            error: None,
        }
    }

    /// The process was still running when `timeout` elapsed and was killed.
    pub fn timed_out(timeout: Duration) -> Self {
        Self::failed(timeout_message(timeout))
    }

    /// The process could not be started, or ended without an exit code.
    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            stdout: String::new(),
            stderr: String::new(),
            exit_code: None,
            error: Some(error.into()),
        }
    }

    /// The most useful text describing why the command failed: the executor's
    /// error when there is one, otherwise whatever the process wrote to stderr.
    pub fn failure_detail(&self) -> &str {
        self.error.as_deref().unwrap_or(&self.stderr)
    }
}

/// The fixed message reported when a command exceeds its time limit.
pub fn timeout_message(timeout: Duration) -> String {
    format!("Command timed out after {} seconds", timeout.as_secs())
}
