use axum::Json;
use serde::{Deserialize, Serialize};

use crate::render::render_markdown;

#[derive(Debug, Deserialize)]
pub struct RenderRequest {
    pub text: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct RenderResponse {
    pub html: String,
}

/// POST /api/v1/render
pub async fn handle_render(Json(req): Json<RenderRequest>) -> Json<RenderResponse> {
    Json(RenderResponse {
        html: render_markdown(req.text.as_deref()),
    })
}
