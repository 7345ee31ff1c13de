pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::intake::MAX_DOCUMENT_BYTES;
use crate::render::handlers::handle_render;
use crate::session::handlers;
use crate::state::AppState;

/// Oversize PDFs must reach intake to be reported as too large, so the body
/// limit sits well above the document ceiling.
const UPLOAD_BODY_LIMIT: usize = 4 * MAX_DOCUMENT_BYTES as usize;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/session", get(handlers::handle_get_session))
        .route(
            "/api/v1/session/file",
            post(handlers::handle_select_file).delete(handlers::handle_clear_file),
        )
        .route("/api/v1/session/analyze", post(handlers::handle_analyze))
        .route("/api/v1/session/reset", post(handlers::handle_start_over))
        .route("/api/v1/render", post(handle_render))
        .layer(DefaultBodyLimit::max(UPLOAD_BODY_LIMIT))
        .with_state(state)
}
