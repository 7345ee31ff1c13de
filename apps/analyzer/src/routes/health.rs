use axum::{extract::State, Json};
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub service: &'static str,
    /// Lifecycle label of the hosted session, e.g. `idle` or `submitting`.
    pub session_state: String,
}

/// GET /health
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    let session_state = state
        .session
        .lock()
        .await
        .orchestrator()
        .state()
        .label()
        .to_string();

    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        service: "resume-analyzer",
        session_state,
    })
}
