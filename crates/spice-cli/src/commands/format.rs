//! Format command: text blob in, rendered document out

use std::path::Path;

use anyhow::Result;
use spice_core::{format_insight, Presenter};

use super::{load_presenter, read_input};

/// Format `text` and render it as text, or as the JSON document
pub fn render_formatted(text: &str, presenter: &Presenter, json: bool) -> Result<String> {
    let doc = format_insight(text);
    if json {
        Ok(serde_json::to_string_pretty(&doc)?)
    } else {
        Ok(presenter.render_document(&doc))
    }
}

pub fn cmd_format(file: Option<&Path>, config_path: Option<&Path>, json: bool) -> Result<()> {
    let presenter = load_presenter(config_path, false)?;
    let text = read_input(file)?;

    let output = render_formatted(&text, &presenter, json)?;
    if output.is_empty() {
        // Nothing recognizable, e.g. blank input
        eprintln!("(no content)");
    } else {
        println!("{}", output.trim_end());
    }
    Ok(())
}
