//! Result rendering — Markdown from the backend to HTML that is safe to inject.
//!
//! Conversion always happens before sanitization: raw HTML embedded in the
//! Markdown, and any markup the converter itself emits, both pass through
//! `ammonia` on the way out.

pub mod handlers;

use pulldown_cmark::{html, Options, Parser};

/// Converts `text` to sanitized HTML. Empty or absent input yields `""`.
pub fn render_markdown(text: Option<&str>) -> String {
    let text = match text {
        Some(t) if !t.is_empty() => t,
        _ => return String::new(),
    };

    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    let mut unsafe_html = String::with_capacity(text.len() * 3 / 2);
    html::push_html(&mut unsafe_html, Parser::new_ext(text, options));

    ammonia::clean(&unsafe_html)
}

/// Formats a match score in [0, 1] as a whole percentage.
/// Ties round half away from zero on the f64 product (`0.875` → `"88%"`).
pub fn format_match_score(score: f64) -> String {
    format!("{}%", (score * 100.0).round() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_and_absent_render_empty() {
        assert_eq!(render_markdown(None), "");
        assert_eq!(render_markdown(Some("")), "");
    }

    #[test]
    fn test_renders_basic_markdown() {
        let html = render_markdown(Some("## Strengths\n\n- **Rust**\n- SQL"));
        assert!(html.contains("<h2>Strengths</h2>"));
        assert!(html.contains("<strong>Rust</strong>"));
        assert!(html.contains("<li>SQL</li>"));
    }

    #[test]
    fn test_strips_raw_script_tags() {
        let html = render_markdown(Some("Hello <script>alert('x')</script> world"));
        assert!(!html.to_lowercase().contains("<script"));
        assert!(!html.contains("alert("));
        assert!(html.contains("Hello"));
    }

    #[test]
    fn test_strips_event_handler_attributes() {
        let inputs = [
            "<img src=\"x.png\" onerror=\"alert(1)\">",
            "<div onclick=\"steal()\">click</div>",
            "text <a href=\"#\" onmouseover=\"x()\">hover</a>",
        ];
        for input in inputs {
            let html = render_markdown(Some(input)).to_lowercase();
            assert!(!html.contains("onerror"), "{html}");
            assert!(!html.contains("onclick"), "{html}");
            assert!(!html.contains("onmouseover"), "{html}");
        }
    }

    #[test]
    fn test_strips_javascript_links_from_markdown() {
        let html = render_markdown(Some("[click me](javascript:alert(document.cookie))"));
        assert!(!html.to_lowercase().contains("javascript:"));
        assert!(html.contains("click me"));
    }

    #[test]
    fn test_keeps_safe_links() {
        let html = render_markdown(Some("[docs](https://example.com/jobs)"));
        assert!(html.contains("href=\"https://example.com/jobs\""));
    }

    #[test]
    fn test_malformed_markdown_degrades_gracefully() {
        let html = render_markdown(Some("**unclosed [link( `tick <b"));
        assert!(html.contains("unclosed"));
        assert!(!html.contains("<script"));
    }

    #[test]
    fn test_adversarial_inputs_never_yield_script() {
        let inputs = [
            "<scr<script>ipt>alert(1)</script>",
            "```html\n<script>alert(1)</script>\n```",
            "<svg><script>alert(1)</script></svg>",
            "<iframe src=\"javascript:alert(1)\"></iframe>",
            "![img](x \"title\" onerror=alert(1))",
            "<SCRIPT SRC=//evil.example/x.js></SCRIPT>",
        ];
        for input in inputs {
            let html = render_markdown(Some(input)).to_lowercase();
            assert!(!html.contains("<script"), "{input} -> {html}");
            assert!(!html.contains("<iframe"), "{input} -> {html}");
            assert!(!html.contains("javascript:"), "{input} -> {html}");
        }
    }

    #[test]
    fn test_format_match_score() {
        assert_eq!(format_match_score(0.8734), "87%");
        assert_eq!(format_match_score(0.91), "91%");
        assert_eq!(format_match_score(0.0), "0%");
        assert_eq!(format_match_score(1.0), "100%");
        assert_eq!(format_match_score(0.875), "88%");
    }
}
