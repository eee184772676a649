//! Cloudflare tunnel management through the `cloudflared` CLI.
//!
//! | Action   | argv                                    |
//! |----------|-----------------------------------------|
//! | `start`  | `cloudflared tunnel run <tunnel_name>`    |
//! | `stop`   | `pkill -f cloudflared`                  |
//! | `create` | `cloudflared tunnel create <tunnel_name>` |
//! | `status` | `cloudflared tunnel list`               |
//!
//! `cloudflared tunnel run` stays in the foreground, so `start` returns only
//! when the tunnel exits or the command timeout kills it.

use std::str::FromStr;
use std::time::Duration;

use eadnets_core::command::argv;
use eadnets_core::{CloudflareConfig, ProcessLauncher};
use thiserror::Error;
use tracing::info;

use crate::domain::ApiResponse;

/// A tunnel operation requested through `POST /api/tunnel/{action}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TunnelAction {
    Start,
    Stop,
    Create,
    Status,
}

/// The path segment did not name a known action.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid action")]
pub struct InvalidAction;

impl FromStr for TunnelAction {
    type Err = InvalidAction;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "start" => Ok(Self::Start),
            "stop" => Ok(Self::Stop),
            "create" => Ok(Self::Create),
            "status" => Ok(Self::Status),
            _ => Err(InvalidAction),
        }
    }
}

impl TunnelAction {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Stop => "stop",
            Self::Create => "create",
            Self::Status => "status",
        }
    }

    /// The command line that performs this action for `tunnel_name`.
    pub fn argv(self, tunnel_name: &str) -> Vec<String> {
        match self {
            Self::Start => argv(&["cloudflared", "tunnel", "run", tunnel_name]),
            Self::Stop => argv(&["pkill", "-f", "cloudflared"]),
            Self::Create => argv(&["cloudflared", "tunnel", "create", tunnel_name]),
            Self::Status => list_argv(),
        }
    }
}

fn list_argv() -> Vec<String> {
    argv(&["cloudflared", "tunnel", "list"])
}

/// `GET /api/tunnel/status`: lists the account's tunnels.
pub async fn tunnel_status(launcher: &dyn ProcessLauncher, timeout: Duration) -> ApiResponse {
    let result = launcher.run(list_argv(), timeout).await;

    if result.success {
        ApiResponse::ok("Tunnel list retrieved").output(result.stdout)
    } else {
        ApiResponse::failure(result.failure_detail()).message("Failed to get tunnel status")
    }
}

/// `POST /api/tunnel/{action}`: runs `action` against the configured tunnel.
pub async fn run_tunnel_action(
    action: &str,
    cloudflare: &CloudflareConfig,
    launcher: &dyn ProcessLauncher,
    timeout: Duration,
) -> ApiResponse {
    let action = match action.parse::<TunnelAction>() {
        Ok(action) => action,
        Err(e) => return ApiResponse::failure(e.to_string()),
    };

    info!(
        action = action.as_str(),
        tunnel = %cloudflare.tunnel_name,
        "running tunnel action"
    );
    let result = launcher
        .run(action.argv(&cloudflare.tunnel_name), timeout)
        .await;

    let response = ApiResponse::with_outcome(
        result.success,
        format!("Tunnel {} executed", action.as_str()),
    )
    .output(result.stdout.clone());

    if result.success {
        response
    } else {
        response.error(result.failure_detail())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use eadnets_core::command::MockProcessLauncher;
    use eadnets_core::{CommandResult, DEFAULT_TIMEOUT};

    fn expect_argv(expected: Vec<String>, result: CommandResult) -> MockProcessLauncher {
        let mut launcher = MockProcessLauncher::new();
        launcher
            .expect_run()
            .withf(move |argv, _| *argv == expected)
            .times(1)
            .return_once(move |_, _| result);
        launcher
    }

    #[test]
    fn test_parse_known_actions() {
        assert_eq!("start".parse(), Ok(TunnelAction::Start));
        assert_eq!("stop".parse(), Ok(TunnelAction::Stop));
        assert_eq!("create".parse(), Ok(TunnelAction::Create));
        assert_eq!("status".parse(), Ok(TunnelAction::Status));
    }

    #[test]
    fn test_parse_unknown_action_fails() {
        assert_eq!("restart".parse::<TunnelAction>(), Err(InvalidAction));
        assert_eq!("START".parse::<TunnelAction>(), Err(InvalidAction));
    }

    #[test]
    fn test_invalid_action_displays_response_text() {
        let err: Box<dyn std::error::Error> = Box::new(InvalidAction);
        assert_eq!(err.to_string(), "Invalid action");
    }

    #[test]
    fn test_action_argv_uses_tunnel_name() {
        assert_eq!(
            TunnelAction::Start.argv("home"),
            argv(&["cloudflared", "tunnel", "run", "home"])
        );
        assert_eq!(
            TunnelAction::Create.argv("home"),
            argv(&["cloudflared", "tunnel", "create", "home"])
        );
        assert_eq!(TunnelAction::Stop.argv("home"), argv(&["pkill", "-f", "cloudflared"]));
        assert_eq!(
            TunnelAction::Status.argv("home"),
            argv(&["cloudflared", "tunnel", "list"])
        );
    }

    #[tokio::test]
    async fn test_status_success_returns_list_output() {
        // Arrange
        let launcher = expect_argv(
            argv(&["cloudflared", "tunnel", "list"]),
            CommandResult::completed(0, "ID NAME\n".into(), String::new()),
        );

        // Act
        let response = tunnel_status(&launcher, DEFAULT_TIMEOUT).await;

        // Assert
        assert_eq!(
            response,
            ApiResponse::ok("Tunnel list retrieved").output("ID NAME\n")
        );
    }

    #[tokio::test]
    async fn test_status_failure_returns_stderr_as_error() {
        let launcher = expect_argv(
            argv(&["cloudflared", "tunnel", "list"]),
            CommandResult::completed(1, String::new(), "not logged in".into()),
        );

        let response = tunnel_status(&launcher, DEFAULT_TIMEOUT).await;

        assert!(!response.success);
        assert_eq!(response.error.as_deref(), Some("not logged in"));
        assert_eq!(response.message.as_deref(), Some("Failed to get tunnel status"));
    }

    #[tokio::test]
    async fn test_status_launch_failure_reports_os_error() {
        let launcher = expect_argv(
            argv(&["cloudflared", "tunnel", "list"]),
            CommandResult::failed("No such file or directory (os error 2)"),
        );

        let response = tunnel_status(&launcher, DEFAULT_TIMEOUT).await;

        assert_eq!(
            response.error.as_deref(),
            Some("No such file or directory (os error 2)")
        );
    }

    #[tokio::test]
    async fn test_create_action_uses_configured_tunnel_name() {
        // Arrange
        let mut cloudflare = CloudflareConfig::default();
        cloudflare.tunnel_name = "garage".to_string();
        let launcher = expect_argv(
            argv(&["cloudflared", "tunnel", "create", "garage"]),
            CommandResult::completed(0, "Created tunnel garage\n".into(), String::new()),
        );

        // Act
        let response = run_tunnel_action("create", &cloudflare, &launcher, DEFAULT_TIMEOUT).await;

        // Assert
        assert!(response.success);
        assert_eq!(response.message.as_deref(), Some("Tunnel create executed"));
        assert_eq!(response.output.as_deref(), Some("Created tunnel garage\n"));
        assert_eq!(response.error, None);
    }

    #[tokio::test]
    async fn test_start_timeout_reports_timeout_message() {
        let launcher = expect_argv(
            argv(&["cloudflared", "tunnel", "run", "ead-net-tunnel"]),
            CommandResult::timed_out(DEFAULT_TIMEOUT),
        );

        let response = run_tunnel_action(
            "start",
            &CloudflareConfig::default(),
            &launcher,
            DEFAULT_TIMEOUT,
        )
        .await;

        assert!(!response.success);
        assert_eq!(response.message.as_deref(), Some("Tunnel start executed"));
        assert_eq!(
            response.error.as_deref(),
            Some("Command timed out after 30 seconds")
        );
    }

    #[tokio::test]
    async fn test_invalid_action_does_not_run_anything() {
        // Arrange: no expectations, so any call would panic
        let launcher = MockProcessLauncher::new();

        // Act
        let response = run_tunnel_action(
            "delete",
            &CloudflareConfig::default(),
            &launcher,
            DEFAULT_TIMEOUT,
        )
        .await;

        // Assert
        assert_eq!(response, ApiResponse::failure("Invalid action"));
    }
}
