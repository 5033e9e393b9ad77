//! Insight Formatter
//!
//! Turns the free-form text returned by the analysis service into a
//! structured document: titled sections holding typed content items.
//!
//! ## Pipeline
//!
//! 1. Text starting with the failure sentinel is reported as
//!    [`FormattedInsight::UpstreamFailure`] without further parsing.
//! 2. Lines are trimmed and blank lines dropped.
//! 3. Header lines (see [`header`]) close the current section and open a new one.
//! 4. Remaining lines are classified one by one (see [`items`]).
//!
//! Formatting is total: every input string produces a valid document.
//!
//! ```rust,ignore
//! use spice_core::formatter::format_insight;
//!
//! let doc = format_insight("**Top 3 Options:**\n1. Acme: Great tool");
//! assert_eq!(doc.sections()[0].title, "Top 3 Options");
//! ```

pub mod header;
pub mod items;
pub mod types;

use tracing::debug;

pub use header::header_title;
pub use items::{classify_line, confidence_percent};
pub use types::{
    ContentItem, FormattedInsight, Section, CONFIDENCE_LABEL, DEFAULT_SECTION_TITLE,
};

/// Prefix the analysis service writes in place of content when generation fails
pub const FAILURE_SENTINEL: &str = "Analysis failed:";

/// Format one insight text into sections
pub fn format_insight(raw: &str) -> FormattedInsight {
    if raw.starts_with(FAILURE_SENTINEL) {
        debug!("Insight text carries the failure sentinel");
        return FormattedInsight::UpstreamFailure;
    }

    let sections = segment(raw);
    debug!(sections = sections.len(), "Formatted insight text");
    FormattedInsight::Sections(sections)
}

/// Accumulator threaded through the line scan
#[derive(Default)]
struct Segmenter {
    sections: Vec<Section>,
    title: String,
    pending: Vec<String>,
}

impl Segmenter {
    fn push_line(mut self, line: &str) -> Self {
        match header_title(line) {
            Some(title) => {
                self.flush();
                self.title = title;
            }
            None => self.pending.push(line.to_string()),
        }
        self
    }

    /// Emit the in-progress section, if it has a title or any content
    fn flush(&mut self) {
        let title = std::mem::take(&mut self.title);
        let lines: Vec<String> = std::mem::take(&mut self.pending)
            .into_iter()
            .map(|line| trim_line(strip_bullet_marker(&line)).to_string())
            .filter(|line| !line.is_empty())
            .collect();

        if title.is_empty() && lines.is_empty() {
            return;
        }

        self.sections.push(Section {
            title: if title.is_empty() {
                DEFAULT_SECTION_TITLE.to_string()
            } else {
                title
            },
            content: lines.iter().map(|line| classify_line(line)).collect(),
        });
    }

    fn finish(mut self) -> Vec<Section> {
        self.flush();
        self.sections
    }
}

fn segment(raw: &str) -> Vec<Section> {
    raw.split('\n')
        .map(trim_line)
        .filter(|line| !line.is_empty())
        .fold(Segmenter::default(), Segmenter::push_line)
        .finish()
}

/// Trim whitespace and byte order marks
fn trim_line(line: &str) -> &str {
    line.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

fn strip_bullet_marker(line: &str) -> &str {
    line.strip_prefix("* ").unwrap_or(line)
}
