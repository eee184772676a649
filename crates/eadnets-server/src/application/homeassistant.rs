//! HomeAssistant liveness, judged from the process table.

use std::time::Duration;

use eadnets_core::command::argv;
use eadnets_core::ProcessLauncher;

use crate::domain::ApiResponse;

const PROCESS_MARKERS: [&str; 2] = ["homeassistant", "hass"];

const NOT_RUNNING: &str = "HomeAssistant not running";

/// True when any line of `ps aux` output mentions HomeAssistant.
///
/// This is a plain substring match; a process whose command line merely
/// contains `hass` also counts.
pub fn is_homeassistant_running(ps_output: &str) -> bool {
    PROCESS_MARKERS
        .iter()
        .any(|marker| ps_output.contains(marker))
}

/// `GET /api/homeassistant/status`.
pub async fn homeassistant_status(launcher: &dyn ProcessLauncher, timeout: Duration) -> ApiResponse {
    let result = launcher.run(argv(&["ps", "aux"]), timeout).await;
    if !result.success {
        return ApiResponse::with_outcome(false, NOT_RUNNING).error(result.failure_detail());
    }

    if is_homeassistant_running(&result.stdout) {
        ApiResponse::ok("HomeAssistant is running")
    } else {
        ApiResponse::with_outcome(false, NOT_RUNNING)
    }
}
