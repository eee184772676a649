//! Network interface inspection.

use std::time::Duration;

use eadnets_core::command::argv;
use eadnets_core::{NetworkConfig, ProcessLauncher};

use crate::domain::ApiResponse;

/// Shown with every configure response; nothing is applied to the host.
pub const PRIVILEGES_NOTE: &str = "Actual configuration requires administrator privileges";

/// `GET /api/network/status`: `ifconfig <interface>`.
///
/// On failure `error` names the interface and `output` carries what the
/// command reported (its stderr, or the launch/timeout error).
pub async fn network_status(
    network: &NetworkConfig,
    launcher: &dyn ProcessLauncher,
    timeout: Duration,
) -> ApiResponse {
    let interface = &network.interface;
    let result = launcher.run(argv(&["ifconfig", interface]), timeout).await;

    if result.success {
        ApiResponse::ok(format!("Network interface {interface} status")).output(result.stdout)
    } else {
        ApiResponse::failure(format!("Interface {interface} not found or error"))
            .output(result.failure_detail())
    }
}

/// `POST /api/network/configure`: reports what would be applied.
pub fn configure_network(network: &NetworkConfig) -> ApiResponse {
    ApiResponse::ok(format!(
        "Network configuration for {} would be applied",
        network.interface
    ))
    .note(PRIVILEGES_NOTE)
}
