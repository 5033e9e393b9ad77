//! Plain-text presenter
//!
//! Renders formatted insights for a terminal: section headings, one line per
//! content item, an ASCII confidence bar, and the citation list.

use crate::citations::{surface_citations, Citation};
use crate::config::PresenterConfig;
use crate::formatter::{ContentItem, FormattedInsight, Section};
use crate::models::InsightRecord;

/// Heading shown instead of a document when the analysis service failed
pub const UNAVAILABLE_TITLE: &str = "Analysis Temporarily Unavailable";

/// Message shown under [`UNAVAILABLE_TITLE`]
pub const UNAVAILABLE_MESSAGE: &str =
    "Our AI analysis service is experiencing high demand. Please try again in a moment.";

const INDENT: &str = "   ";

/// Renders documents, citations and insight listings as text
#[derive(Debug, Clone, Default)]
pub struct Presenter {
    config: PresenterConfig,
}

impl Presenter {
    pub fn new(config: PresenterConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PresenterConfig {
        &self.config
    }

    /// Render a formatted document, or the unavailable notice
    pub fn render_document(&self, doc: &FormattedInsight) -> String {
        match doc {
            FormattedInsight::UpstreamFailure => {
                format!("⚠️  {}\n{}{}\n", UNAVAILABLE_TITLE, INDENT, UNAVAILABLE_MESSAGE)
            }
            FormattedInsight::Sections(sections) => sections
                .iter()
                .map(|section| self.render_section(section))
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }

    pub fn render_section(&self, section: &Section) -> String {
        let mut lines = vec![
            section.title.clone(),
            "─".repeat(section.title.chars().count()),
        ];
        lines.extend(
            section
                .content
                .iter()
                .map(|item| format!("{}{}", INDENT, self.render_item(item))),
        );
        lines.push(String::new());
        lines.join("\n")
    }

    pub fn render_item(&self, item: &ContentItem) -> String {
        match item {
            ContentItem::NumberedEntry {
                index,
                name,
                description,
            } => format!("{}. {}: {}", index, name, description),
            ContentItem::RawEntry { text } => text.clone(),
            ContentItem::MetricRow {
                label,
                raw_value,
                percent,
            } => format!(
                "{}: {} {}",
                label,
                confidence_bar(*percent, self.config.bar_width),
                raw_value
            ),
            ContentItem::LabeledBullet { label, value } => format!("• {}: {}", label, value),
            ContentItem::PlainText { text } => text.clone(),
        }
    }

    /// Render the sources block; empty when there are no citations
    pub fn render_citations(&self, citations: &[Citation]) -> String {
        let surfaced = surface_citations(citations, self.config.max_citations);
        if surfaced.is_empty() {
            return String::new();
        }

        let mut lines = vec![format!("View Sources ({})", surfaced.len())];
        for citation in &surfaced {
            if citation.domain.is_empty() {
                lines.push(format!("{}• {}", INDENT, citation.text));
            } else {
                lines.push(format!("{}• {} ({})", INDENT, citation.text, citation.domain));
            }
            lines.push(format!("{}  {}", INDENT, citation.href));
            if let Some(snippet) = &citation.snippet {
                lines.push(format!("{}  {}", INDENT, snippet));
            }
        }
        lines.push(String::new());
        lines.join("\n")
    }

    /// Render one insight card: prompt, timestamp, document, sources
    pub fn render_insight(&self, record: &InsightRecord) -> String {
        let mut out = format!(
            "📊 {}\n{}Generated: {}\n\n",
            record.prompt,
            INDENT,
            record.created_at.format("%Y-%m-%d %H:%M:%S UTC")
        );
        out.push_str(&self.render_document(&record.formatted()));
        let sources = self.render_citations(&record.search_results);
        if !sources.is_empty() {
            out.push('\n');
            out.push_str(&sources);
        }
        out
    }

    /// Render a newest-first listing, honoring the latest/all setting
    pub fn render_listing(&self, records: &[InsightRecord]) -> String {
        if records.is_empty() {
            return "No insights yet\nTry analyzing some prompts to see brand intelligence insights!\n"
                .to_string();
        }

        let shown = if self.config.show_all {
            records
        } else {
            &records[..1]
        };

        let mut out = format!(
            "Brand Intelligence Results [{}]\n\n",
            toggle_label(records.len(), self.config.show_all)
        );
        let cards: Vec<String> = shown.iter().map(|r| self.render_insight(r)).collect();
        out.push_str(&cards.join("\n"));
        out
    }
}

/// Label of the control that switches between latest-only and all results
pub fn toggle_label(total: usize, show_all: bool) -> String {
    if show_all {
        "Show Latest Only".to_string()
    } else {
        format!("Show All Results ({})", total)
    }
}

/// Fixed-width bar with `percent` of its cells filled
pub fn confidence_bar(percent: f64, width: usize) -> String {
    let share = percent.clamp(0.0, 100.0) / 100.0;
    let filled = ((share * width as f64).round() as usize).min(width);
    format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formatter::format_insight;
    use chrono::{TimeZone, Utc};

    fn record(id: i64, prompt: &str, insights: &str, citations: Vec<Citation>) -> InsightRecord {
        InsightRecord {
            id,
            prompt: prompt.to_string(),
            insights: insights.to_string(),
            search_results: citations,
            created_at: Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).unwrap(),
        }
    }

    #[test]
    fn test_confidence_bar() {
        assert_eq!(confidence_bar(80.0, 10), "[########--]");
        assert_eq!(confidence_bar(0.0, 4), "[----]");
        assert_eq!(confidence_bar(100.0, 4), "[####]");
        assert_eq!(confidence_bar(45.0, 20), "[#########-----------]");
    }

    #[test]
    fn test_confidence_bar_clamps_out_of_range() {
        assert_eq!(confidence_bar(150.0, 4), "[####]");
        assert_eq!(confidence_bar(-5.0, 4), "[----]");
    }

    #[test]
    fn test_render_items() {
        let presenter = Presenter::new(PresenterConfig {
            bar_width: 10,
            ..PresenterConfig::default()
        });
        let doc = format_insight(
            "**Top Options:**\n1. Acme: Great tool\n1. Just a note\nConfidence: 8/10\nfoo: bar\nplain words",
        );
        let out = presenter.render_document(&doc);
        assert_eq!(
            out,
            "Top Options\n───────────\n   1. Acme: Great tool\n   1. Just a note\n   Confidence: [########--] 8/10\n   • foo: bar\n   plain words\n"
        );
    }

    #[test]
    fn test_render_upstream_failure() {
        let presenter = Presenter::default();
        let out = presenter.render_document(&format_insight("Analysis failed: boom"));
        assert!(out.contains(UNAVAILABLE_TITLE));
        assert!(out.contains(UNAVAILABLE_MESSAGE));
        assert!(!out.contains("boom"));
    }

    #[test]
    fn test_render_citations_caps_at_five() {
        let presenter = Presenter::default();
        let citations: Vec<Citation> = (0..12)
            .map(|i| Citation::new(format!("https://www.site{}.com", i)).with_title(format!("T{}", i)))
            .collect();
        let out = presenter.render_citations(&citations);
        assert!(out.starts_with("View Sources (5)"));
        assert!(out.contains("T0 (site0.com)"));
        assert!(out.contains("T4 (site4.com)"));
        assert!(!out.contains("T5"));
    }

    #[test]
    fn test_render_citations_malformed_url() {
        let presenter = Presenter::default();
        let citations = vec![
            Citation::new("not a url"),
            Citation::new("https://www.g2.com").with_snippet("Reviews"),
        ];
        let out = presenter.render_citations(&citations);
        assert!(out.contains("• Source\n"));
        assert!(out.contains("• g2.com (g2.com)"));
        assert!(out.contains("Reviews"));
    }

    #[test]
    fn test_render_citations_empty() {
        assert_eq!(Presenter::default().render_citations(&[]), "");
    }

    #[test]
    fn test_render_insight_card() {
        let presenter = Presenter::default();
        let out = presenter.render_insight(&record(
            1,
            "best crm",
            "foo: bar",
            vec![Citation::new("https://www.a.com")],
        ));
        assert!(out.starts_with("📊 best crm\n   Generated: 2024-05-01 09:30:00 UTC\n"));
        assert!(out.contains("Insight\n"));
        assert!(out.contains("View Sources (1)"));
    }

    #[test]
    fn test_render_listing_latest_only() {
        let presenter = Presenter::default();
        let records = vec![
            record(2, "newest", "a: b", vec![]),
            record(1, "oldest", "c: d", vec![]),
        ];
        let out = presenter.render_listing(&records);
        assert!(out.contains("Show All Results (2)"));
        assert!(out.contains("newest"));
        assert!(!out.contains("oldest"));
    }

    #[test]
    fn test_render_listing_all() {
        let presenter = Presenter::new(PresenterConfig {
            show_all: true,
            ..PresenterConfig::default()
        });
        let records = vec![
            record(2, "newest", "a: b", vec![]),
            record(1, "oldest", "c: d", vec![]),
        ];
        let out = presenter.render_listing(&records);
        assert!(out.contains("Show Latest Only"));
        assert!(out.contains("newest"));
        assert!(out.contains("oldest"));
    }

    #[test]
    fn test_render_empty_listing() {
        let out = Presenter::default().render_listing(&[]);
        assert!(out.starts_with("No insights yet"));
    }
}
