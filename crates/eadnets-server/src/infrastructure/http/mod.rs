//! HTTP facade: an axum router over the application use cases.
//!
//! Every endpoint answers 200 with a JSON body; failures are reported inside
//! the body as `{"success": false, ...}`.

mod handlers;
pub mod router;

pub use router::build_router;
