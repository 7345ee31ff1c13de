pub mod analysis;
pub mod document;

pub use analysis::{AgentDiagnostics, AnalysisResult, MatchedJob, UsedService};
pub use document::{CandidateFile, DocumentHandle};
