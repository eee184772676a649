//! Process infrastructure: the real [`ProcessLauncher`] backed by
//! `tokio::process`.
//!
//! [`ProcessLauncher`]: eadnets_core::ProcessLauncher

pub mod launcher;

pub use launcher::TokioProcessLauncher;
