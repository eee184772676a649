//! EAD Networks configuration server: entry point.
//!
//! # Usage
//!
//! ```text
//! eadnets-server [OPTIONS]
//!
//! Options:
//!   --config-dir <DIR>   State directory [env: EADNETS_CONFIG_DIR] [default: ~/.eadnets]
//!   --host <HOST>        Bind address, overrides server.host
//!   --port <PORT>        Bind port, overrides server.port
//! ```
//!
//! # Startup
//!
//! 1. Create the state directory if needed.
//! 2. Read `server.debug` from the config to pick the default log level, then
//!    install console and file logging.
//! 3. Load the config again (now with logging, so problems are recorded) and
//!    log it.
//! 4. Serve until Ctrl+C.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tokio::net::TcpListener;
use tracing::{error, info};

use eadnets_core::ServerConfig;
use eadnets_server::infrastructure::context::AppContext;
use eadnets_server::infrastructure::http::build_router;
use eadnets_server::infrastructure::logging::init_logging;
use eadnets_server::infrastructure::storage::{AppPaths, ConfigError, ConfigStore};

// ── CLI argument definitions ──────────────────────────────────────────────────

/// Local control plane for the EAD Networks appliance.
#[derive(Debug, Parser)]
#[command(
    name = "eadnets-server",
    about = "EAD Networks configuration server",
    version
)]
struct Cli {
    /// Directory holding config.json and server.log.
    #[arg(long, env = "EADNETS_CONFIG_DIR")]
    config_dir: Option<PathBuf>,

    /// Address to bind, instead of `server.host` from the config.
    #[arg(long)]
    host: Option<String>,

    /// Port to bind, instead of `server.port` from the config.
    #[arg(long)]
    port: Option<u16>,
}

impl Cli {
    fn app_paths(&self) -> Result<AppPaths, ConfigError> {
        match &self.config_dir {
            Some(dir) => Ok(AppPaths::new(dir)),
            None => AppPaths::default_dir().map(AppPaths::new),
        }
    }

    /// Command-line overrides win over the config file.
    fn bind_target(&self, server: &ServerConfig) -> (String, u16) {
        (
            self.host.clone().unwrap_or_else(|| server.host.clone()),
            self.port.unwrap_or(server.port),
        )
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let paths = cli.app_paths()?;
    paths
        .ensure_dir()
        .context("failed to create the config directory")?;

    let store = ConfigStore::new(paths.config_file());
    let debug = store.load().server.debug;
    init_logging(&paths.log_file(), debug).context("failed to initialise logging")?;

    info!("Starting EAD Networks Configuration Server");
    info!("Config directory: {}", paths.config_dir().display());

    let config = store.load();
    let pretty = serde_json::to_string_pretty(&config).context("failed to render config")?;
    info!("Configuration: {pretty}");

    let (host, port) = cli.bind_target(&config.server);
    let listener = TcpListener::bind((host.as_str(), port))
        .await
        .with_context(|| format!("failed to bind {host}:{port}"))?;
    info!("listening on http://{}", listener.local_addr()?);

    let ctx = Arc::new(AppContext::with_system_launcher(paths));
    axum::serve(listener, build_router(ctx))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    info!("EAD Networks server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("received Ctrl+C, shutting down"),
        Err(e) => error!("failed to listen for Ctrl+C signal: {e}"),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
