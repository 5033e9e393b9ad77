//! Test utilities
//!
//! Builds analyses databases laid out the way the analysis service writes
//! them, plus a realistic insight text fixture.
//!
//! Enable with the `test-utils` feature for use outside this crate.

use std::path::Path;

use rusqlite::{params, Connection};

use crate::error::Result;

/// Create the `analyses` table at `path` (the file is created if needed)
pub fn create_analyses_db(path: &Path) -> Result<()> {
    let conn = Connection::open(path)?;
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS analyses (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            prompt TEXT NOT NULL,
            search_results TEXT,
            insights TEXT,
            created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
        )
        "#,
    )?;
    Ok(())
}

/// Insert one analysis row and return its id
pub fn insert_analysis(
    path: &Path,
    prompt: &str,
    search_results: Option<&str>,
    insights: Option<&str>,
    created_at: &str,
) -> Result<i64> {
    let conn = Connection::open(path)?;
    conn.execute(
        "INSERT INTO analyses (prompt, search_results, insights, created_at) VALUES (?1, ?2, ?3, ?4)",
        params![prompt, search_results, insights, created_at],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Citation blob with `count` entries, as the service stores it
pub fn citations_json(count: usize) -> String {
    let entries: Vec<String> = (1..=count)
        .map(|i| {
            format!(
                r#"{{"title": "Source {i}", "url": "https://www.source{i}.com/article", "snippet": "Snippet {i}"}}"#
            )
        })
        .collect();
    format!("[{}]", entries.join(", "))
}

/// A typical analysis response, following the service's requested layout
pub const SAMPLE_INSIGHT: &str = r#"**Brand Intelligence Summary:**
HubSpot and Salesforce dominate CRM mindshare, with Pipedrive winning small sales teams.

**Top 3 Options:**
1. **HubSpot**: Free CRM with strong inbound marketing tools
2. **Salesforce**: Enterprise-grade customization and ecosystem
3. **Pipedrive**: Simple pipeline management for small teams

**Brand Signals:**
* **HubSpot**: Heavy content marketing presence
* **Salesforce**: Frequent enterprise case studies

**Market Reality:**
* **Pricing**: Per-seat pricing from $15 to $300 per month

Confidence: 8/10
Risks: Vendor lock-in, rising seat costs
"#;
