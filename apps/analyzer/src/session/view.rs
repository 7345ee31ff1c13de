use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::{AnalysisResult, MatchedJob, UsedService};
use crate::render::{format_match_score, render_markdown};
use crate::session::ResumeSession;

/// Everything the presentation layer reads, with Markdown already rendered
/// and sanitized.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SessionView {
    pub file_name: String,
    pub file_size: Option<u64>,
    pub loading: bool,
    pub state: String,
    pub error: Option<String>,
    pub used_service: Option<UsedService>,
    pub attempt: Option<u32>,
    pub submitted_at: Option<DateTime<Utc>>,
    pub result: Option<ResultView>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ResultView {
    pub analysis_html: String,
    /// Same order as received from the backend.
    pub jobs: Vec<JobCard>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct JobCard {
    pub id: i64,
    pub title: String,
    pub company: String,
    pub match_score: f64,
    pub match_percent: String,
    pub requirements_html: String,
    pub description_html: String,
}

impl SessionView {
    pub(crate) fn from_session(session: &ResumeSession) -> Self {
        let held = session.intake().held();
        let orchestrator = session.orchestrator();
        let diagnostics = orchestrator.diagnostics();

        SessionView {
            file_name: held.map(|h| h.name().to_string()).unwrap_or_default(),
            file_size: held.map(|h| h.size()),
            loading: orchestrator.is_loading(),
            state: orchestrator.state().label().to_string(),
            error: session.error_text().map(String::from),
            used_service: diagnostics.map(|d| d.used_service),
            attempt: diagnostics.map(|d| d.attempt),
            submitted_at: orchestrator.state().started_at(),
            result: orchestrator.result().map(ResultView::from_result),
        }
    }
}

impl ResultView {
    fn from_result(result: &AnalysisResult) -> Self {
        ResultView {
            analysis_html: render_markdown(Some(result.agent_result.analysis.as_str())),
            jobs: result.matched_jobs.iter().map(JobCard::from_match).collect(),
        }
    }
}

impl JobCard {
    fn from_match(matched: &MatchedJob) -> Self {
        JobCard {
            id: matched.job.id,
            title: matched.job.title.clone(),
            company: matched.job.company.clone(),
            match_score: matched.match_score,
            match_percent: format_match_score(matched.match_score),
            requirements_html: render_markdown(Some(matched.job.requirements.as_str())),
            description_html: render_markdown(Some(matched.job.description.as_str())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::orchestrator::tests::sample_result;
    use crate::models::analysis::Job;

    #[test]
    fn test_result_view_renders_markdown_fields() {
        let view = ResultView::from_result(&sample_result());
        assert!(view.analysis_html.contains("<h2>Summary</h2>"));
        assert!(view.analysis_html.contains("<strong>Rust</strong>"));
        assert!(view.jobs[0].requirements_html.contains("<li>Rust</li>"));
        assert!(view.jobs[0].description_html.contains("<em>APIs</em>"));
    }

    #[test]
    fn test_job_cards_keep_received_order() {
        let mut result = sample_result();
        let template = result.matched_jobs[0].clone();
        result.matched_jobs = [(3, 0.2), (1, 0.95), (2, 0.5)]
            .into_iter()
            .map(|(id, score)| MatchedJob {
                job: Job { id, ..template.job.clone() },
                match_score: score,
            })
            .collect();

        let view = ResultView::from_result(&result);
        let ids: Vec<i64> = view.jobs.iter().map(|j| j.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
        assert_eq!(view.jobs[1].match_percent, "95%");
    }

    #[test]
    fn test_job_fields_are_sanitized() {
        let mut result = sample_result();
        result.matched_jobs[0].job.description =
            "Great team <img src=x onerror=alert(1)><script>steal()</script>".to_string();

        let view = ResultView::from_result(&result);
        let html = &view.jobs[0].description_html;
        assert!(html.contains("Great team"));
        assert!(!html.contains("onerror"));
        assert!(!html.contains("<script"));
    }

    #[test]
    fn test_serializes_camel_case() {
        let view = ResultView::from_result(&sample_result());
        let value = serde_json::to_value(&view).unwrap();
        assert!(value.get("analysisHtml").is_some());
        assert_eq!(value["jobs"][0]["matchPercent"], "91%");
    }
}
