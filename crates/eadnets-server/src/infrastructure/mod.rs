//! Infrastructure layer: file storage, child processes, logging, and HTTP.
//!
//! Implements the traits the application layer depends on
//! ([`eadnets_core::ProcessLauncher`],
//! [`ConfigRepository`](crate::application::config::ConfigRepository),
//! [`LogSource`](crate::application::logs::LogSource)) and wires them into an
//! axum router through [`context::AppContext`].

pub mod context;
pub mod http;
pub mod logging;
pub mod process;
pub mod storage;
