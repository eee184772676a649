//! # eadnets-core
//!
//! Shared library for the EAD Networks control plane containing the typed
//! configuration document, its default-merge rules, and the result type and
//! launcher abstraction for external commands.
//!
//! This crate performs no file or network I/O and never spawns a process
//! itself.  The server crate owns all of that and depends on the types here.
//!
//! # Architecture overview (for beginners)
//!
//! The control plane manages a small home network appliance: a Cloudflare
//! tunnel, one network interface, a HomeAssistant installation and a list of
//! ESP microcontrollers.  Almost every operation is either "read/write the
//! configuration" or "run one system utility and report what happened".
//! Those two ideas are the shared foundation defined here:
//!
//! - **`config`** – The configuration document (`AppConfig`), the literal
//!   defaults, and the shallow per-section merge that fills in anything the
//!   on-disk JSON leaves out.
//!
//! - **`command`** – `CommandResult`, the uniform record describing the
//!   outcome of one external process, and the `ProcessLauncher` trait that
//!   every caller goes through to produce one.

pub mod command;
pub mod config;

// Re-export the most-used types at the crate root so callers can write
// `eadnets_core::AppConfig` instead of `eadnets_core::config::schema::AppConfig`.
pub use command::{CommandResult, ProcessLauncher, DEFAULT_TIMEOUT};
pub use config::merge::merge_over_defaults;
pub use config::schema::{
    AppConfig, CloudflareConfig, HomeAssistantConfig, NetworkConfig, ServerConfig,
};
