//! Insight listing commands

use std::path::Path;

use anyhow::Result;
use serde_json::{json, Value};
use spice_core::{surface_citations, InsightRecord, InsightSource, Presenter};
use tracing::info;

use super::{load_presenter, open_source};

const SHOW_ALL_TIP: &str = "💡 Tip: Run with --all to show every stored insight";

/// Record plus its formatted document and surfaced citations
fn insight_json(record: &InsightRecord, presenter: &Presenter) -> Value {
    json!({
        "id": record.id,
        "prompt": record.prompt,
        "created_at": record.created_at,
        "document": record.formatted(),
        "sources": surface_citations(&record.search_results, presenter.config().max_citations),
    })
}

/// Render one insight (by id) or the listing, as text or JSON
pub fn render_insights(
    source: &dyn InsightSource,
    presenter: &Presenter,
    id: Option<i64>,
    json: bool,
) -> Result<String> {
    if let Some(id) = id {
        let record = source.get_insight(id)?;
        return Ok(if json {
            serde_json::to_string_pretty(&insight_json(&record, presenter))?
        } else {
            presenter.render_insight(&record)
        });
    }

    let records = source.list_insights()?;
    info!(count = records.len(), "Loaded insights");

    if json {
        let shown = if presenter.config().show_all {
            &records[..]
        } else {
            &records[..records.len().min(1)]
        };
        let values: Vec<Value> = shown.iter().map(|r| insight_json(r, presenter)).collect();
        return Ok(serde_json::to_string_pretty(&values)?);
    }

    let mut output = presenter.render_listing(&records);
    // Latest-only view with older records hidden
    if !presenter.config().show_all && records.len() > 1 {
        output = format!("{}\n\n{}", output.trim_end(), SHOW_ALL_TIP);
    }
    Ok(output)
}

pub fn cmd_insights(
    db_path: &Path,
    file: Option<&Path>,
    config_path: Option<&Path>,
    all: bool,
    id: Option<i64>,
    json: bool,
) -> Result<()> {
    let presenter = load_presenter(config_path, all)?;
    let source = open_source(db_path, file)?;

    let output = render_insights(source.as_ref(), &presenter, id, json)?;
    println!("{}", output.trim_end());
    Ok(())
}
