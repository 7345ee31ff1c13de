use serde::{Deserialize, Serialize};

/// Upstream model service that produced the agent's analysis.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum UsedService {
    Gemini,
    Openai,
}

impl UsedService {
    pub fn as_str(&self) -> &'static str {
        match self {
            UsedService::Gemini => "gemini",
            UsedService::Openai => "openai",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AgentResult {
    /// Markdown-formatted evaluation of the résumé.
    pub analysis: String,
    pub used_service: UsedService,
    pub gemini_attempt: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Job {
    pub id: i64,
    pub title: String,
    pub company: String,
    pub requirements: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MatchedJob {
    pub job: Job,
    pub match_score: f64, // 0.0 – 1.0
}

/// Payload returned by the analysis backend. `matched_jobs` is already ranked;
/// its order is kept exactly as received.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub agent_result: AgentResult,
    pub matched_jobs: Vec<MatchedJob>,
}

impl AnalysisResult {
    /// Rejects payloads carrying a match score outside [0, 1] (NaN included).
    pub fn validate(&self) -> Result<(), String> {
        for (rank, matched) in self.matched_jobs.iter().enumerate() {
            if !(0.0..=1.0).contains(&matched.match_score) {
                return Err(format!(
                    "matchedJobs[{rank}] (job {}) has score {} outside [0, 1]",
                    matched.job.id, matched.match_score
                ));
            }
        }
        Ok(())
    }

    pub fn diagnostics(&self) -> AgentDiagnostics {
        AgentDiagnostics {
            used_service: self.agent_result.used_service,
            attempt: self.agent_result.gemini_attempt,
        }
    }
}

/// Which service answered and on which attempt. Surfaced next to the result.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AgentDiagnostics {
    pub used_service: UsedService,
    pub attempt: u32,
}
