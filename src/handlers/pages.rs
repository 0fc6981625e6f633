use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::Html};

use crate::{
    render::RenderContext,
    state::AppState,
    utils::internalize,
};

/// The one business rule in the service.
pub const GREETING: &str = "Hello World from JavaBackend.com!";

pub async fn index(
    State(st): State<Arc<AppState>>,
) -> Result<Html<String>, (StatusCode, String)> {
    let mut ctx = RenderContext::new();
    ctx.insert("message", GREETING);
    let html = st.renderer.render("index", &ctx).map_err(internalize)?;
    Ok(Html(html))
}

pub async fn health() -> &'static str {
    "ok"
}
