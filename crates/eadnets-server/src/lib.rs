//! # eadnets-server
//!
//! Local HTTP control plane for an EAD Networks appliance.  The binary in
//! `main.rs` only parses arguments, sets up logging and serves the router;
//! everything else lives in this library so it can be driven from tests.
//!
//! # Architecture
//!
//! ```text
//! HTTP request
//!   infrastructure::http     axum router + handlers (CORS, request tracing)
//!     application            one use case per endpoint
//!       domain               JSON response bodies
//!       eadnets_core         AppConfig, CommandResult, ProcessLauncher
//!   infrastructure::storage  ~/.eadnets/config.json (load merged, save atomic)
//!   infrastructure::process  tokio child processes with a 30 s timeout
//!   infrastructure::logging  console + ~/.eadnets/server.log
//! ```

pub mod application;
pub mod domain;
pub mod infrastructure;
