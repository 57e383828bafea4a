use std::{net::SocketAddr, sync::Arc};

use axum::{routing::get, Router};
use storage::MemberStore;
use tower_http::limit::RequestBodyLimitLayer;
use tracing::info;

mod app_state;
mod config;
mod front;
mod servlet;

use app_state::AppState;
use config::load_settings;

const MAX_FORM_BYTES: usize = 64 * 1024;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = load_settings();
    tracing_subscriber::fmt()
        .with_env_filter(settings.log_filter.as_str())
        .init();

    let state = AppState::new(MemberStore::new(), settings.view_resolver())?;
    info!(routes = ?state.front.routes(), "front controller ready");
    let app = build_router(Arc::new(state));

    let addr: SocketAddr = settings.server_bind.parse()?;
    info!(%addr, "server listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/servlet/members/new-form", get(servlet::new_form))
        .route(
            "/servlet/members/save",
            get(servlet::save).post(servlet::save),
        )
        .route("/servlet/members", get(servlet::members))
        .fallback(front::front_controller)
        .layer(RequestBodyLimitLayer::new(MAX_FORM_BYTES))
        .with_state(state)
}

async fn healthz() -> &'static str {
    "ok"
}

#[cfg(test)]
#[path = "tests/main_tests.rs"]
mod tests;
