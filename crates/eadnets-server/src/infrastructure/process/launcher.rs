//! Runs system utilities as child processes with a hard time limit.
//!
//! The child is spawned with piped stdout/stderr and `kill_on_drop(true)`.
//! When the timeout elapses the pending `output()` future is dropped, which
//! kills the child; the caller gets [`CommandResult::timed_out`] and no
//! partial output.
//!
//! # Portability
//!
//! Uses only `tokio::process` APIs, which behave the same on Linux and macOS.
//! On Unix a child killed by a signal has no exit code; that case is reported
//! as a failure with the signal number in `error`.

use std::process::{ExitStatus, Stdio};
use std::time::Duration;

use async_trait::async_trait;
use eadnets_core::{CommandResult, ProcessLauncher};
use tokio::process::Command;
use tracing::{debug, warn};

/// [`ProcessLauncher`] that actually spawns the requested program.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioProcessLauncher;

impl TokioProcessLauncher {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ProcessLauncher for TokioProcessLauncher {
    async fn run(&self, argv: Vec<String>, timeout: Duration) -> CommandResult {
        let Some((program, args)) = argv.split_first() else {
            return CommandResult::failed("empty command");
        };

        debug!(?argv, timeout_secs = timeout.as_secs(), "running command");

        let output = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .output();

        let result = match tokio::time::timeout(timeout, output).await {
            Ok(Ok(output)) => from_exit(
                output.status,
                String::from_utf8_lossy(&output.stdout).into_owned(),
                String::from_utf8_lossy(&output.stderr).into_owned(),
            ),
            Ok(Err(e)) => {
                warn!(program = %program, error = %e, "failed to launch command");
                CommandResult::failed(e.to_string())
            }
            Err(_) => {
                warn!(?argv, timeout_secs = timeout.as_secs(), "command timed out");
                CommandResult::timed_out(timeout)
            }
        };

        debug!(
            program = %program,
            success = result.success,
            exit_code = ?result.exit_code,
            "command finished"
        );
        result
    }
}

fn from_exit(status: ExitStatus, stdout: String, stderr: String) -> CommandResult {
    match status.code() {
        Some(code) => CommandResult::completed(code, stdout, stderr),
        None => {
            let mut result = CommandResult::failed(terminated_message(status));
            result.stdout = stdout;
            result.stderr = stderr;
            result
        }
    }
}

#[cfg(unix)]
fn terminated_message(status: ExitStatus) -> String {
    use std::os::unix::process::ExitStatusExt;

    match status.signal() {
        Some(signal) => format!("Command terminated by signal {signal}"),
        None => "Command terminated without an exit code".to_string(),
    }
}

#[cfg(not(unix))]
fn terminated_message(_status: ExitStatus) -> String {
    "Command terminated without an exit code".to_string()
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use eadnets_core::command::argv;

    #[tokio::test]
    async fn test_exit_zero_is_success_without_error() {
        // Arrange
        let launcher = TokioProcessLauncher::new();

        // Act
        let result = launcher
            .run(argv(&["sh", "-c", "echo hello"]), Duration::from_secs(10))
            .await;

        // Assert
        assert!(result.success);
        assert_eq!(result.exit_code, Some(0));
        assert_eq!(result.stdout, "hello\n");
        assert_eq!(result.error, None);
    }

    #[tokio::test]
    async fn test_nonzero_exit_is_failure_with_code_and_no_error() {
        // Arrange
        let launcher = TokioProcessLauncher::new();

        // Act
        let result = launcher
            .run(
                argv(&["sh", "-c", "echo oops >&2; exit 3"]),
                Duration::from_secs(10),
            )
            .await;

        // Assert
        assert!(!result.success);
        assert_eq!(result.exit_code, Some(3));
        assert_eq!(result.stderr, "oops\n");
        assert_eq!(result.error, None);
    }

    #[tokio::test]
    async fn test_command_exceeding_timeout_reports_timeout_without_exit_code() {
        // Arrange
        let launcher = TokioProcessLauncher::new();

        // Act
        let result = launcher
            .run(argv(&["sleep", "5"]), Duration::from_millis(200))
            .await;

        // Assert
        assert!(!result.success);
        assert_eq!(result.exit_code, None);
        assert!(result.error.as_deref().unwrap_or("").contains("timed out"));
        assert!(result.stdout.is_empty());
        assert!(result.stderr.is_empty());
    }

    #[tokio::test]
    async fn test_missing_binary_reports_launch_error() {
        // Arrange
        let launcher = TokioProcessLauncher::new();

        // Act
        let result = launcher
            .run(
                argv(&["definitely-not-an-installed-binary-eadnets"]),
                Duration::from_secs(10),
            )
            .await;

        // Assert
        assert!(!result.success);
        assert_eq!(result.exit_code, None);
        assert!(result.error.as_deref().is_some_and(|e| !e.is_empty()));
        assert!(result.stdout.is_empty());
        assert!(result.stderr.is_empty());
    }

    #[tokio::test]
    async fn test_empty_argv_is_a_failure() {
        let result = TokioProcessLauncher::new()
            .run(Vec::new(), Duration::from_secs(1))
            .await;
        assert!(!result.success);
        assert_eq!(result.error.as_deref(), Some("empty command"));
    }

    #[tokio::test]
    async fn test_signal_termination_has_no_exit_code() {
        // Arrange: the shell kills itself with SIGKILL
        let launcher = TokioProcessLauncher::new();

        // Act
        let result = launcher
            .run(argv(&["sh", "-c", "kill -9 $$"]), Duration::from_secs(10))
            .await;

        // Assert
        assert!(!result.success);
        assert_eq!(result.exit_code, None);
        assert_eq!(result.error.as_deref(), Some("Command terminated by signal 9"));
    }
}
