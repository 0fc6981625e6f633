use anyhow::{Context, Result};
use axum::{routing::get, Router};
use dotenvy::dotenv;
use std::{net::SocketAddr, sync::Arc};
use tokio::net::TcpListener;
use tower_http::services::ServeDir;

mod handlers;
mod render;
mod state;
mod utils;

use render::TeraRenderer;
use state::AppState;

fn app(state: Arc<AppState>) -> Router {
    Router::new()
        // pages
        .route("/", get(handlers::pages::index))
        .route("/health", get(handlers::pages::health))
        // static
        .nest_service("/static", ServeDir::new("static"))
        // shared state
        .with_state(state)
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt().init();

    let bind_addr: SocketAddr = std::env::var("BIND_ADDR")
        .unwrap_or_else(|_| "0.0.0.0:8000".to_string())
        .parse()
        .context("BIND_ADDR must be host:port")?;

    let renderer = TeraRenderer::from_dir("templates/**/*.html")
        .context("loading templates")?;
    let state = Arc::new(AppState::new(Arc::new(renderer)));

    tracing::info!("listening on http://{bind_addr}");
    let listener = TcpListener::bind(bind_addr).await?;
    axum::serve(listener, app(state)).await.context("server crashed")
}
