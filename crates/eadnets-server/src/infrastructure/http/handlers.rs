//! Request handlers.  Each one loads what it needs from [`AppContext`],
//! calls one use case, and wraps the result in [`Json`].

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::response::{Html, IntoResponse, Response};
use axum::Json;
use chrono::Local;
use eadnets_core::AppConfig;

use crate::application::{config, esp, homeassistant, logs, network, status, tunnel};
use crate::domain::{ApiResponse, EspStatusResponse, StatusResponse};
use crate::infrastructure::context::AppContext;

type Ctx = State<Arc<AppContext>>;

const INDEX_HTML: &str = include_str!("../../../assets/index.html");

pub(super) async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

pub(super) async fn server_status() -> Json<StatusResponse> {
    Json(status::server_status(Local::now()))
}

pub(super) async fn get_config(State(ctx): Ctx) -> Json<AppConfig> {
    Json(config::get_config(&ctx.store))
}

/// Takes the raw body so malformed JSON still gets a 200 failure body.
pub(super) async fn save_config(State(ctx): Ctx, body: Bytes) -> Json<ApiResponse> {
    Json(config::save_config(&ctx.store, &body))
}

pub(super) async fn tunnel_status(State(ctx): Ctx) -> Json<ApiResponse> {
    Json(tunnel::tunnel_status(ctx.launcher.as_ref(), ctx.command_timeout).await)
}

pub(super) async fn tunnel_action(State(ctx): Ctx, Path(action): Path<String>) -> Json<ApiResponse> {
    run_tunnel_action(&ctx, &action).await
}

/// `POST /api/tunnel/status` shares its path with the GET listing route.
pub(super) async fn tunnel_status_action(State(ctx): Ctx) -> Json<ApiResponse> {
    run_tunnel_action(&ctx, tunnel::TunnelAction::Status.as_str()).await
}

async fn run_tunnel_action(ctx: &AppContext, action: &str) -> Json<ApiResponse> {
    let cfg = ctx.store.load();
    Json(
        tunnel::run_tunnel_action(
            action,
            &cfg.cloudflare,
            ctx.launcher.as_ref(),
            ctx.command_timeout,
        )
        .await,
    )
}

pub(super) async fn network_status(State(ctx): Ctx) -> Json<ApiResponse> {
    let cfg = ctx.store.load();
    Json(network::network_status(&cfg.network, ctx.launcher.as_ref(), ctx.command_timeout).await)
}

pub(super) async fn network_configure(State(ctx): Ctx) -> Json<ApiResponse> {
    let cfg = ctx.store.load();
    Json(network::configure_network(&cfg.network))
}

pub(super) async fn homeassistant_status(State(ctx): Ctx) -> Json<ApiResponse> {
    Json(homeassistant::homeassistant_status(ctx.launcher.as_ref(), ctx.command_timeout).await)
}

pub(super) async fn esp_status(State(ctx): Ctx) -> Json<EspStatusResponse> {
    Json(esp::esp_status(&ctx.store.load()))
}

pub(super) async fn get_logs(State(ctx): Ctx) -> Response {
    match logs::get_logs(&ctx.log_file) {
        Ok(body) => Json(body).into_response(),
        Err(failure) => Json(failure).into_response(),
    }
}
