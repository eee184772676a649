//! Domain layer for eadnets-server.
//!
//! Pure data types describing what the control plane returns to its callers.
//! Nothing here performs I/O; the application layer builds these values and
//! the HTTP layer serializes them.
//!
//! # Response convention
//!
//! Every endpoint answers with HTTP 200 and a JSON object carrying a
//! `success` flag plus either a `message` or an `error`.  Clients never have
//! to distinguish transport failures from application failures.

pub mod responses;

pub use responses::{ApiResponse, EspStatusResponse, LogsResponse, StatusResponse};
