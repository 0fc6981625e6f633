use axum::http::StatusCode;

pub fn internalize<E: std::fmt::Display>(e: E) -> (StatusCode, String) {
    tracing::error!("render failed: {e}");
    (StatusCode::INTERNAL_SERVER_ERROR, format!("render failed: {e}"))
}
