//! External command outcomes and the launcher abstraction.
//!
//! Every integration with the outside world (the Cloudflare tunnel daemon,
//! interface inspection, process listing) is expressed the same way: build an
//! argv, hand it to a [`ProcessLauncher`], and map the returned
//! [`CommandResult`] to a response.  Nothing else in the control plane spawns
//! processes.
//!
//! # Testability
//!
//! The `ProcessLauncher` trait allows tests to script command outcomes
//! without `cloudflared`, `ifconfig` or `ps` being installed.  With the
//! `mock` feature enabled, `mockall` generates `MockProcessLauncher`.

use std::time::Duration;

use async_trait::async_trait;

mod result;

pub use result::CommandResult;

/// Upper bound on how long any single external command may run.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Runs one external command to completion and reports its outcome.
///
/// Implementations must never panic or return an error: launch failures and
/// timeouts are folded into the returned [`CommandResult`].
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait]
pub trait ProcessLauncher: Send + Sync {
    /// Runs `argv` (program followed by its arguments), waiting at most
    /// `timeout` for it to exit.
    async fn run(&self, argv: Vec<String>, timeout: Duration) -> CommandResult;
}

/// Builds an owned argv from string literals and borrowed config values.
///
/// ```rust
/// use eadnets_core::command::argv;
///
/// assert_eq!(argv(&["ifconfig", "utun5"]), vec!["ifconfig".to_string(), "utun5".to_string()]);
/// ```
pub fn argv(parts: &[&str]) -> Vec<String> {
    parts.iter().map(|p| (*p).to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_timeout_is_30_seconds() {
        assert_eq!(DEFAULT_TIMEOUT, Duration::from_secs(30));
    }

    #[tokio::test]
    async fn test_mock_launcher_returns_scripted_result() {
        // Arrange
        let mut launcher = MockProcessLauncher::new();
        launcher
            .expect_run()
            .withf(|argv, timeout| argv == &["ps", "aux"] && *timeout == DEFAULT_TIMEOUT)
            .times(1)
            .returning(|_, _| CommandResult::completed(0, "hass\n".into(), String::new()));

        // Act
        let result = launcher.run(argv(&["ps", "aux"]), DEFAULT_TIMEOUT).await;

        // Assert
        assert!(result.success);
        assert_eq!(result.stdout, "hass\n");
    }
}
