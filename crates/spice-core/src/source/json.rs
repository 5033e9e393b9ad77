//! Saved insight listings
//!
//! Reads a JSON array in the shape the analysis service returns from its
//! insight listing endpoint:
//!
//! ```json
//! [{"id": 1, "prompt": "...", "insights": "...",
//!   "search_results": [{"title": "...", "url": "...", "snippet": "..."}],
//!   "created_at": "2024-01-01 10:00:00"}]
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use super::InsightSource;
use crate::citations::Citation;
use crate::error::{Error, Result};
use crate::models::{parse_timestamp, InsightRecord, PENDING_INSIGHT_TEXT};

/// Insight records loaded from a JSON file
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

/// Listing entry as written by the service; everything but `id` may be loose
#[derive(Debug, Deserialize)]
struct RawRecord {
    id: i64,
    #[serde(default)]
    prompt: String,
    #[serde(default)]
    insights: Option<String>,
    #[serde(default)]
    search_results: Option<Value>,
    #[serde(default)]
    created_at: Option<String>,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parse listing content directly (used for stdin and tests)
    pub fn parse(content: &str) -> Result<Vec<InsightRecord>> {
        let raw: Vec<RawRecord> = serde_json::from_str(content)?;

        let mut records: Vec<InsightRecord> = raw
            .into_iter()
            .filter_map(|r| {
                let Some(created_at) = r.created_at.as_deref().and_then(parse_timestamp) else {
                    warn!(id = r.id, "Skipping insight without a readable created_at");
                    return None;
                };
                Some(InsightRecord {
                    id: r.id,
                    prompt: r.prompt,
                    insights: r
                        .insights
                        .unwrap_or_else(|| PENDING_INSIGHT_TEXT.to_string()),
                    search_results: citations_from_value(r.id, r.search_results),
                    created_at,
                })
            })
            .collect();

        // Stable: equal timestamps keep file order
        records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(records)
    }
}

fn citations_from_value(id: i64, value: Option<Value>) -> Vec<Citation> {
    match value {
        None | Some(Value::Null) => Vec::new(),
        Some(value) => serde_json::from_value(value).unwrap_or_else(|e| {
            warn!(id, error = %e, "Listed search results are malformed, ignoring");
            Vec::new()
        }),
    }
}

impl InsightSource for JsonFileSource {
    fn list_insights(&self) -> Result<Vec<InsightRecord>> {
        if !self.path.exists() {
            return Err(Error::NotFound(format!(
                "Insight listing {}",
                self.path.display()
            )));
        }
        let content = fs::read_to_string(&self.path)?;
        let records = Self::parse(&content)?;
        debug!(count = records.len(), path = %self.path.display(), "Loaded insights from file");
        Ok(records)
    }
}
