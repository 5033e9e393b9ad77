//! Read-only access to the analysis service's SQLite store

use std::path::Path;

use chrono::Utc;
use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::{params, OpenFlags, OptionalExtension};
use tracing::{debug, info, warn};

use super::{decode_citations, InsightSource};
use crate::error::{Error, Result};
use crate::models::{parse_timestamp, InsightRecord, PENDING_INSIGHT_TEXT};

pub type DbPool = Pool<SqliteConnectionManager>;
pub type DbConn = PooledConnection<SqliteConnectionManager>;

/// Stored analyses, read through a small read-only connection pool
#[derive(Clone)]
pub struct SqliteSource {
    pool: DbPool,
    db_path: String,
}

impl SqliteSource {
    /// Open an existing database read-only.
    ///
    /// Nothing is created or migrated; a missing file is an error.
    pub fn open(path: &str) -> Result<Self> {
        if !Path::new(path).exists() {
            return Err(Error::NotFound(format!("Database {}", path)));
        }

        let manager = SqliteConnectionManager::file(path)
            .with_flags(OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX);
        let pool = Pool::builder().max_size(2).build(manager)?;

        info!(path, "Opened insight database (read-only)");
        Ok(Self {
            pool,
            db_path: path.to_string(),
        })
    }

    /// Get the path to the database file
    pub fn path(&self) -> &str {
        &self.db_path
    }

    /// Get a connection from the pool
    pub fn conn(&self) -> Result<DbConn> {
        Ok(self.pool.get()?)
    }
}

const SELECT_ANALYSES: &str = r#"
    SELECT id, prompt, search_results, insights, created_at
    FROM analyses
"#;

/// Raw `analyses` row, before defaults and decoding are applied
type AnalysisRow = (i64, String, Option<String>, Option<String>, Option<String>);

fn read_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<AnalysisRow> {
    Ok((
        row.get(0)?,
        row.get(1)?,
        row.get(2)?,
        row.get(3)?,
        row.get(4)?,
    ))
}

fn row_to_record(row: AnalysisRow) -> InsightRecord {
    let (id, prompt, search_results, insights, created_at) = row;
    InsightRecord {
        id,
        prompt,
        insights: insights.unwrap_or_else(|| PENDING_INSIGHT_TEXT.to_string()),
        search_results: decode_citations(id, search_results.as_deref()),
        created_at: created_at
            .as_deref()
            .and_then(parse_timestamp)
            .unwrap_or_else(|| {
                warn!(id, "Analysis has no readable created_at, using now");
                Utc::now()
            }),
    }
}

impl InsightSource for SqliteSource {
    fn list_insights(&self) -> Result<Vec<InsightRecord>> {
        let conn = self.conn()?;

        let sql = format!("{} ORDER BY created_at DESC, id DESC", SELECT_ANALYSES);
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt.query_map([], read_row)?;
        let records = rows
            .map(|row| row.map(row_to_record))
            .collect::<std::result::Result<Vec<_>, _>>()?;

        debug!(count = records.len(), "Loaded insights from database");
        Ok(records)
    }

    fn get_insight(&self, id: i64) -> Result<InsightRecord> {
        let conn = self.conn()?;

        let sql = format!("{} WHERE id = ?", SELECT_ANALYSES);
        let row = conn
            .query_row(&sql, params![id], read_row)
            .optional()?
            .ok_or_else(|| Error::NotFound(format!("Insight {}", id)))?;

        Ok(row_to_record(row))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{create_analyses_db, insert_analysis};

    #[test]
    fn test_open_missing_database() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.db");
        let result = SqliteSource::open(path.to_str().unwrap());
        assert!(matches!(result, Err(Error::NotFound(_))));
        assert!(!path.exists());
    }

    #[test]
    fn test_list_newest_first() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("spice.db");
        create_analyses_db(&path).unwrap();
        insert_analysis(&path, "older", None, Some("foo: bar"), "2024-01-01 10:00:00").unwrap();
        insert_analysis(&path, "newer", None, Some("baz: qux"), "2024-02-01 10:00:00").unwrap();

        let source = SqliteSource::open(path.to_str().unwrap()).unwrap();
        assert_eq!(source.path(), path.to_str().unwrap());
        let records = source.list_insights().unwrap();
        let prompts: Vec<&str> = records.iter().map(|r| r.prompt.as_str()).collect();
        assert_eq!(prompts, vec!["newer", "older"]);
    }

    #[test]
    fn test_missing_fields_degrade() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("spice.db");
        create_analyses_db(&path).unwrap();
        let id = insert_analysis(&path, "pending", Some("not json"), None, "2024-01-01 10:00:00")
            .unwrap();

        let source = SqliteSource::open(path.to_str().unwrap()).unwrap();
        let record = source.get_insight(id).unwrap();
        assert_eq!(record.insights, "Analysis pending...");
        assert!(record.search_results.is_empty());
    }

    #[test]
    fn test_get_unknown_insight() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("spice.db");
        create_analyses_db(&path).unwrap();

        let source = SqliteSource::open(path.to_str().unwrap()).unwrap();
        assert!(matches!(source.get_insight(42), Err(Error::NotFound(_))));
    }

    #[test]
    fn test_source_is_read_only() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("spice.db");
        create_analyses_db(&path).unwrap();

        let source = SqliteSource::open(path.to_str().unwrap()).unwrap();
        let conn = source.conn().unwrap();
        let result = conn.execute(
            "INSERT INTO analyses (prompt, insights) VALUES ('x', 'y')",
            [],
        );
        assert!(result.is_err());
    }
}
