//! Analysis transport — the only place that talks to the analysis backend.
//!
//! `AnalysisOrchestrator` holds an `Arc<dyn AnalysisTransport>`; tests swap in a
//! double, production uses `HttpAnalysisTransport`.
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{multipart, Client};
use thiserror::Error;
use tracing::{debug, warn};

use crate::models::{AnalysisResult, DocumentHandle};

/// Multipart field the backend reads the document from.
pub const DOCUMENT_FIELD: &str = "pdfFile";
pub const DEFAULT_ANALYSIS_URL: &str = "http://localhost:5036/api/rating/pdf";

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Backend error (status {status}): {message}")]
    Status { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid payload: {0}")]
    InvalidPayload(String),
}

#[async_trait]
pub trait AnalysisTransport: Send + Sync {
    /// Sends one document for analysis. Exactly one request per call, no retries.
    async fn submit(&self, document: &DocumentHandle) -> Result<AnalysisResult, TransportError>;
}

#[derive(Clone)]
pub struct HttpAnalysisTransport {
    client: Client,
    endpoint: String,
}

impl HttpAnalysisTransport {
    pub fn new(endpoint: String, timeout: Duration) -> Result<Self, TransportError> {
        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            endpoint,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl AnalysisTransport for HttpAnalysisTransport {
    async fn submit(&self, document: &DocumentHandle) -> Result<AnalysisResult, TransportError> {
        let part = multipart::Part::stream_with_length(document.content().clone(), document.size())
            .file_name(document.name().to_string())
            .mime_str(document.media_type())?;
        let form = multipart::Form::new().part(DOCUMENT_FIELD, part);

        let response = self
            .client
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("Analysis backend returned {}: {}", status, body);
            return Err(TransportError::Status {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.bytes().await?;
        let result: AnalysisResult = serde_json::from_slice(&body)?;
        result.validate().map_err(TransportError::InvalidPayload)?;

        debug!(
            "Analysis succeeded: service={}, attempt={}, jobs={}",
            result.agent_result.used_service.as_str(),
            result.agent_result.gemini_attempt,
            result.matched_jobs.len()
        );

        Ok(result)
    }
}
