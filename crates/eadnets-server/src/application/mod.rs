//! Application layer use cases for the control plane.
//!
//! Each use case builds the argv for one system utility (or reads one
//! document), hands it to an abstraction, and maps the outcome to a response
//! body from [`crate::domain`].
//!
//! Use cases depend on traits, never on concrete infrastructure:
//!
//! - [`eadnets_core::ProcessLauncher`] for every external command.
//! - [`config::ConfigRepository`] for the configuration document.
//! - [`logs::LogSource`] for the server log.
//!
//! # Sub-modules
//!
//! - **`status`**        – liveness message and timestamp.
//! - **`config`**        – read the merged config; validate and persist a new one.
//! - **`tunnel`**        – `cloudflared` tunnel list/run/create and `pkill`.
//! - **`network`**       – `ifconfig` interface status; the no-op configure.
//! - **`homeassistant`** – `ps aux` scan for a running HomeAssistant.
//! - **`esp`**           – configured ESP devices.
//! - **`logs`**          – the server log contents.

pub mod config;
pub mod esp;
pub mod homeassistant;
pub mod logs;
pub mod network;
pub mod status;
pub mod tunnel;
