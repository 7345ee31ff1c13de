use std::sync::Arc;

use axum::{
    extract::{Multipart, State},
    Json,
};
use tracing::debug;

use crate::errors::AppError;
use crate::models::CandidateFile;
use crate::session::SessionView;
use crate::state::AppState;

/// GET /api/v1/session
pub async fn handle_get_session(State(state): State<AppState>) -> Json<SessionView> {
    Json(state.session.lock().await.view())
}

/// POST /api/v1/session/file
/// A rejected file is reported through `error` in the returned view.
pub async fn handle_select_file(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<SessionView>, AppError> {
    let file = read_candidate(&mut multipart).await?;

    let mut session = state.session.lock().await;
    if let Err(e) = session.submit_candidate(file) {
        debug!("File selection rejected: {e}");
    }
    Ok(Json(session.view()))
}

/// DELETE /api/v1/session/file
pub async fn handle_clear_file(State(state): State<AppState>) -> Json<SessionView> {
    let mut session = state.session.lock().await;
    session.clear_file();
    Json(session.view())
}

/// POST /api/v1/session/analyze
/// Waits for the backend before answering. While a request is already in
/// flight this returns the current (loading) view without sending another.
///
/// The request runs in its own task so the session always leaves
/// `Submitting`, even if this caller disconnects before the backend answers.
pub async fn handle_analyze(State(state): State<AppState>) -> Result<Json<SessionView>, AppError> {
    let pending = {
        let mut session = state.session.lock().await;
        match session.begin_analysis() {
            Some(pending) => pending,
            None => return Ok(Json(session.view())),
        }
    };
    let session_id = pending.session_id();

    // Lock released: the session stays readable and resettable meanwhile.
    let shared = Arc::clone(&state.session);
    let request = tokio::spawn(async move {
        let finished = pending.run().await;
        let mut session = shared.lock().await;
        session.finish_analysis(finished);
        session.view()
    });

    match request.await {
        Ok(view) => Ok(Json(view)),
        Err(e) => {
            state.session.lock().await.abandon_analysis(session_id);
            Err(AppError::Internal(
                anyhow::Error::new(e).context(format!("analysis task {session_id} died")),
            ))
        }
    }
}

/// POST /api/v1/session/reset
pub async fn handle_start_over(State(state): State<AppState>) -> Json<SessionView> {
    let mut session = state.session.lock().await;
    session.start_over();
    Json(session.view())
}

/// Takes the first part that carries a file name.
async fn read_candidate(multipart: &mut Multipart) -> Result<CandidateFile, AppError> {
    while let Some(field) = multipart.next_field().await? {
        let Some(file_name) = field.file_name().map(str::to_string) else {
            continue;
        };
        let media_type = field.content_type().unwrap_or_default().to_string();
        let content = field.bytes().await?;
        return Ok(CandidateFile::new(file_name, media_type, content));
    }
    Err(AppError::BadRequest(
        "Multipart body contains no file part".to_string(),
    ))
}
