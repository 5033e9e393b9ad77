//! Insight sources
//!
//! A source hands out stored insight records (raw text plus citations),
//! newest first. Sources are read-only: producing and storing insights is the
//! analysis service's job.
//!
//! - `sqlite` - the analysis service's `analyses` table, opened read-only
//! - `json` - a saved insight listing (JSON array of records)

mod json;
mod sqlite;

pub use json::JsonFileSource;
pub use sqlite::SqliteSource;

use tracing::warn;

use crate::citations::Citation;
use crate::error::{Error, Result};
use crate::models::InsightRecord;

/// Read-only supplier of insight records
pub trait InsightSource {
    /// All records, newest first
    fn list_insights(&self) -> Result<Vec<InsightRecord>>;

    /// A single record by id
    fn get_insight(&self, id: i64) -> Result<InsightRecord> {
        self.list_insights()?
            .into_iter()
            .find(|record| record.id == id)
            .ok_or_else(|| Error::NotFound(format!("Insight {}", id)))
    }
}

/// Decode a stored citation blob, degrading to no citations
pub(crate) fn decode_citations(id: i64, blob: Option<&str>) -> Vec<Citation> {
    let Some(blob) = blob.filter(|b| !b.trim().is_empty()) else {
        return Vec::new();
    };
    match serde_json::from_str(blob) {
        Ok(citations) => citations,
        Err(e) => {
            warn!(id, error = %e, "Stored search results are not valid JSON, ignoring");
            Vec::new()
        }
    }
}
