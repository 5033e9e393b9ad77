//! Data models for stored insights

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::citations::Citation;
use crate::formatter::{format_insight, FormattedInsight};

/// Insight text shown for an analysis that has not produced output yet
pub const PENDING_INSIGHT_TEXT: &str = "Analysis pending...";

/// One analysis result for a submitted query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsightRecord {
    pub id: i64,
    pub prompt: String,
    /// Raw text returned by the analysis service
    pub insights: String,
    /// Sources the analysis was grounded on
    #[serde(default)]
    pub search_results: Vec<Citation>,
    pub created_at: DateTime<Utc>,
}

impl InsightRecord {
    /// Run the formatter over this record's text
    pub fn formatted(&self) -> FormattedInsight {
        format_insight(&self.insights)
    }
}

/// Parse a stored timestamp.
///
/// Accepts SQLite's `YYYY-MM-DD HH:MM:SS` (with optional fractional seconds),
/// the same with a `T` separator, and RFC 3339.
pub fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .map(|dt| dt.and_utc())
}
