pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::ats::handlers;
use crate::state::AppState;

/// Headroom above the file ceiling for multipart framing and the
/// job_description field, so oversize files reach upload validation.
const MULTIPART_OVERHEAD_BYTES: usize = 1024 * 1024;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes + MULTIPART_OVERHEAD_BYTES;

    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/health", get(health::health_handler))
        .route("/api/v1/ats/scan", post(handlers::handle_scan))
        .route(
            "/api/v1/ats/parse-resume",
            post(handlers::handle_parse_resume),
        )
        .route(
            "/api/v1/ats/extract-keywords",
            post(handlers::handle_extract_keywords),
        )
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
