//! Analysis lifecycle: the injected transport plus the single-flight state machine.

pub mod orchestrator;
pub mod transport;

pub use orchestrator::{AnalysisOrchestrator, AnalysisState, FinishedAnalysis, PendingAnalysis};
pub use transport::{AnalysisTransport, HttpAnalysisTransport, TransportError};
