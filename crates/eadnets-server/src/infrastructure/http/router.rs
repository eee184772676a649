//! Route table.
//!
//! | Method | Path                          |
//! |--------|-------------------------------|
//! | GET    | `/`                           |
//! | GET    | `/api/status`                 |
//! | GET    | `/api/config`                 |
//! | POST   | `/api/config`                 |
//! | GET    | `/api/tunnel/status`          |
//! | POST   | `/api/tunnel/:action`         |
//! | GET    | `/api/network/status`         |
//! | POST   | `/api/network/configure`      |
//! | GET    | `/api/homeassistant/status`   |
//! | GET    | `/api/esp/status`             |
//! | GET    | `/api/logs`                   |

use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::handlers;
use crate::infrastructure::context::AppContext;

/// Builds the full application router with CORS and request tracing.
///
/// Config bodies are not size-limited, so a large document is still answered
/// with a JSON body.
pub fn build_router(ctx: Arc<AppContext>) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/status", get(handlers::server_status))
        .route(
            "/api/config",
            get(handlers::get_config)
                .post(handlers::save_config)
                .layer(DefaultBodyLimit::disable()),
        )
        .route(
            "/api/tunnel/status",
            get(handlers::tunnel_status).post(handlers::tunnel_status_action),
        )
        .route("/api/tunnel/:action", post(handlers::tunnel_action))
        .route("/api/network/status", get(handlers::network_status))
        .route("/api/network/configure", post(handlers::network_configure))
        .route(
            "/api/homeassistant/status",
            get(handlers::homeassistant_status),
        )
        .route("/api/esp/status", get(handlers::esp_status))
        .route("/api/logs", get(handlers::get_logs))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(ctx)
}
