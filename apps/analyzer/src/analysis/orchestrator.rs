//! Single-flight analysis lifecycle.
//!
//! `analyze` runs a whole request for a single owner. Shared owners (the HTTP
//! host keeps the session behind a mutex) use the split form instead:
//! `begin` under the lock, `PendingAnalysis::run` with the lock released, then
//! `complete` under the lock again. A completion is applied only if the
//! session that started it is still the one in `Submitting`.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::analysis::transport::{AnalysisTransport, TransportError};
use crate::locale::Locale;
use crate::models::{AgentDiagnostics, AnalysisResult, DocumentHandle};

#[derive(Debug, Clone)]
pub enum AnalysisState {
    Idle,
    Submitting {
        session_id: Uuid,
        started_at: DateTime<Utc>,
    },
    Succeeded {
        session_id: Uuid,
        started_at: DateTime<Utc>,
        result: Box<AnalysisResult>,
        diagnostics: AgentDiagnostics,
    },
    Failed {
        session_id: Uuid,
        started_at: DateTime<Utc>,
        message: String,
    },
}

impl AnalysisState {
    pub fn label(&self) -> &'static str {
        match self {
            AnalysisState::Idle => "idle",
            AnalysisState::Submitting { .. } => "submitting",
            AnalysisState::Succeeded { .. } => "succeeded",
            AnalysisState::Failed { .. } => "failed",
        }
    }

    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        match self {
            AnalysisState::Idle => None,
            AnalysisState::Submitting { started_at, .. }
            | AnalysisState::Succeeded { started_at, .. }
            | AnalysisState::Failed { started_at, .. } => Some(*started_at),
        }
    }
}

/// A request that has entered `Submitting` but not yet been sent.
pub struct PendingAnalysis {
    session_id: Uuid,
    document: DocumentHandle,
    transport: Arc<dyn AnalysisTransport>,
}

impl PendingAnalysis {
    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    /// Issues the request. Resolves exactly once, success or failure.
    pub async fn run(self) -> FinishedAnalysis {
        let outcome = self.transport.submit(&self.document).await;
        FinishedAnalysis {
            session_id: self.session_id,
            outcome,
        }
    }
}

pub struct FinishedAnalysis {
    session_id: Uuid,
    outcome: Result<AnalysisResult, TransportError>,
}

pub struct AnalysisOrchestrator {
    transport: Arc<dyn AnalysisTransport>,
    locale: Locale,
    state: AnalysisState,
}

impl AnalysisOrchestrator {
    pub fn new(transport: Arc<dyn AnalysisTransport>, locale: Locale) -> Self {
        Self {
            transport,
            locale,
            state: AnalysisState::Idle,
        }
    }

    pub fn state(&self) -> &AnalysisState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, AnalysisState::Submitting { .. })
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        match &self.state {
            AnalysisState::Succeeded { result, .. } => Some(result.as_ref()),
            _ => None,
        }
    }

    pub fn diagnostics(&self) -> Option<AgentDiagnostics> {
        match &self.state {
            AnalysisState::Succeeded { diagnostics, .. } => Some(*diagnostics),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.state {
            AnalysisState::Failed { message, .. } => Some(message.as_str()),
            _ => None,
        }
    }

    /// Moves to `Submitting` and hands back the request to run.
    /// Returns `None`, leaving state untouched, when there is no document or a
    /// request is already in flight.
    pub fn begin(&mut self, document: Option<&DocumentHandle>) -> Option<PendingAnalysis> {
        let document = document?;

        if let AnalysisState::Submitting { session_id, .. } = &self.state {
            warn!(%session_id, "Analysis already in flight, ignoring new request");
            return None;
        }

        let session_id = Uuid::new_v4();
        self.state = AnalysisState::Submitting {
            session_id,
            started_at: Utc::now(),
        };
        info!(%session_id, file = %document.name(), size = document.size(), "Submitting résumé for analysis");

        Some(PendingAnalysis {
            session_id,
            document: document.clone(),
            transport: Arc::clone(&self.transport),
        })
    }

    /// Applies a finished request. Returns `false` when the session it belongs
    /// to was discarded in the meantime; the outcome is then dropped.
    pub fn complete(&mut self, finished: FinishedAnalysis) -> bool {
        let started_at = match &self.state {
            AnalysisState::Submitting {
                session_id,
                started_at,
            } if *session_id == finished.session_id => *started_at,
            _ => {
                warn!(
                    session_id = %finished.session_id,
                    "Dropping analysis outcome for a discarded session"
                );
                return false;
            }
        };

        let session_id = finished.session_id;
        self.state = match finished.outcome {
            Ok(result) => {
                let diagnostics = result.diagnostics();
                info!(
                    %session_id,
                    service = diagnostics.used_service.as_str(),
                    attempt = diagnostics.attempt,
                    jobs = result.matched_jobs.len(),
                    "Analysis succeeded"
                );
                AnalysisState::Succeeded {
                    session_id,
                    started_at,
                    result: Box::new(result),
                    diagnostics,
                }
            }
            Err(e) => {
                error!(%session_id, "Analysis failed: {e}");
                AnalysisState::Failed {
                    session_id,
                    started_at,
                    message: self.locale.analysis_failed().to_string(),
                }
            }
        };
        true
    }

    /// Moves `session_id` from `Submitting` to `Failed` when its request can no
    /// longer deliver an outcome. No effect on any other session.
    pub fn abandon(&mut self, session_id: Uuid) -> bool {
        let started_at = match &self.state {
            AnalysisState::Submitting {
                session_id: current,
                started_at,
            } if *current == session_id => *started_at,
            _ => return false,
        };

        error!(%session_id, "Analysis request ended without an outcome");
        self.state = AnalysisState::Failed {
            session_id,
            started_at,
            message: self.locale.analysis_failed().to_string(),
        };
        true
    }

    /// One-shot form of `begin` → `run` → `complete`. Returns `false` when
    /// nothing was sent.
    pub async fn analyze(&mut self, document: Option<&DocumentHandle>) -> bool {
        let Some(pending) = self.begin(document) else {
            return false;
        };
        let finished = pending.run().await;
        self.complete(finished)
    }

    /// Discards the current session, whatever its state.
    pub fn reset(&mut self) {
        if let AnalysisState::Submitting { session_id, .. } = &self.state {
            info!(%session_id, "Abandoning in-flight analysis");
        }
        self.state = AnalysisState::Idle;
    }
}
