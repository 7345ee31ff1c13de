use std::sync::Arc;

use tokio::sync::Mutex;

use crate::session::ResumeSession;

/// Shared application state injected into all route handlers via Axum extractors.
/// One session: the service backs a single user in a single tab.
#[derive(Clone)]
pub struct AppState {
    pub session: Arc<Mutex<ResumeSession>>,
}

impl AppState {
    pub fn new(session: ResumeSession) -> Self {
        Self {
            session: Arc::new(Mutex::new(session)),
        }
    }
}
