//! Structured document types produced by the formatter

use serde::Serialize;

/// Title given to a section that has no header line of its own
pub const DEFAULT_SECTION_TITLE: &str = "Insight";

/// Label shown on every confidence metric row
pub const CONFIDENCE_LABEL: &str = "Confidence";

/// Result of formatting one insight text
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "sections", rename_all = "snake_case")]
pub enum FormattedInsight {
    /// The text parsed into zero or more sections
    Sections(Vec<Section>),
    /// The upstream generator reported a failure instead of content
    UpstreamFailure,
}

impl FormattedInsight {
    pub fn is_upstream_failure(&self) -> bool {
        matches!(self, FormattedInsight::UpstreamFailure)
    }

    /// Sections of a successful result; empty for an upstream failure
    pub fn sections(&self) -> &[Section] {
        match self {
            FormattedInsight::Sections(sections) => sections,
            FormattedInsight::UpstreamFailure => &[],
        }
    }
}

/// A titled group of content items
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Section {
    pub title: String,
    pub content: Vec<ContentItem>,
}

/// One classified line of a section
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ContentItem {
    /// `N. Name: Description`
    NumberedEntry {
        index: String,
        name: String,
        description: String,
    },
    /// A numbered line whose name/description split failed (bold markers removed)
    RawEntry { text: String },
    /// Confidence score scaled to a percentage
    MetricRow {
        label: String,
        raw_value: String,
        percent: f64,
    },
    /// Generic `Label: value` pair
    LabeledBullet { label: String, value: String },
    /// A line with no recognized structure
    PlainText { text: String },
}

impl ContentItem {
    pub fn kind(&self) -> &'static str {
        match self {
            ContentItem::NumberedEntry { .. } => "numbered_entry",
            ContentItem::RawEntry { .. } => "raw_entry",
            ContentItem::MetricRow { .. } => "metric_row",
            ContentItem::LabeledBullet { .. } => "labeled_bullet",
            ContentItem::PlainText { .. } => "plain_text",
        }
    }
}
