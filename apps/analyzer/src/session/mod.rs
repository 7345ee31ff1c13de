//! ResumeSession — one user's intake plus analysis lifecycle.
//!
//! Owns the side effects that span both components: a newly accepted file
//! discards the previous analysis, starting over clears everything, and only
//! one error is ever shown.

pub mod handlers;
pub mod view;

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use crate::analysis::{AnalysisOrchestrator, AnalysisTransport, FinishedAnalysis, PendingAnalysis};
use crate::intake::{FileIntake, IntakeError};
use crate::locale::Locale;
use crate::models::CandidateFile;

pub use view::SessionView;

pub struct ResumeSession {
    intake: FileIntake,
    orchestrator: AnalysisOrchestrator,
    locale: Locale,
    /// Set by `clear_file`: hides a `Failed` message without discarding the session.
    failure_dismissed: bool,
}

impl ResumeSession {
    pub fn new(transport: Arc<dyn AnalysisTransport>, locale: Locale) -> Self {
        Self {
            intake: FileIntake::new(),
            orchestrator: AnalysisOrchestrator::new(transport, locale),
            locale,
            failure_dismissed: false,
        }
    }

    pub fn intake(&self) -> &FileIntake {
        &self.intake
    }

    pub fn orchestrator(&self) -> &AnalysisOrchestrator {
        &self.orchestrator
    }

    /// Validates and holds `file`. On success any previous analysis, finished
    /// or in flight, is discarded.
    pub fn submit_candidate(&mut self, file: CandidateFile) -> Result<(), IntakeError> {
        self.intake.submit_candidate(file)?;
        self.orchestrator.reset();
        self.failure_dismissed = false;
        Ok(())
    }

    /// Drops the held file and hides any shown error. The analysis itself,
    /// result or in-flight request, is left alone.
    pub fn clear_file(&mut self) {
        self.intake.clear();
        self.failure_dismissed = true;
    }

    pub fn begin_analysis(&mut self) -> Option<PendingAnalysis> {
        let pending = self.orchestrator.begin(self.intake.held())?;
        self.intake.dismiss_error();
        self.failure_dismissed = false;
        Some(pending)
    }

    pub fn finish_analysis(&mut self, finished: FinishedAnalysis) -> bool {
        let applied = self.orchestrator.complete(finished);
        if applied {
            self.failure_dismissed = false;
        }
        applied
    }

    /// Fails the in-flight analysis `session_id` when its request task died
    /// without producing an outcome.
    pub fn abandon_analysis(&mut self, session_id: Uuid) -> bool {
        let applied = self.orchestrator.abandon(session_id);
        if applied {
            self.failure_dismissed = false;
        }
        applied
    }

    /// Runs one analysis of the held file to completion. No-op without a file
    /// or while another analysis is in flight.
    pub async fn analyze(&mut self) -> bool {
        let Some(pending) = self.begin_analysis() else {
            return false;
        };
        let finished = pending.run().await;
        self.finish_analysis(finished)
    }

    pub fn start_over(&mut self) {
        info!("Starting over");
        self.intake.clear();
        self.orchestrator.reset();
        self.failure_dismissed = false;
    }

    /// The single error to show: a validation error if one is pending,
    /// otherwise the failed analysis message.
    pub fn error_text(&self) -> Option<&str> {
        match self.intake.error() {
            Some(e) => Some(self.locale.intake_error(e)),
            None if self.failure_dismissed => None,
            None => self.orchestrator.error(),
        }
    }

    pub fn view(&self) -> SessionView {
        SessionView::from_session(self)
    }
}
