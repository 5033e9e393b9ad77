//! Shared command utilities
//!
//! This module contains:
//! - `load_presenter` - Resolve the presenter config and build a presenter
//! - `open_source` - Open the insight source selected on the command line
//! - `read_input` - Read a text blob from a file or stdin

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use spice_core::{
    ConfigOrigin, InsightSource, JsonFileSource, Presenter, PresenterConfig, SqliteSource,
};
use tracing::debug;

/// Build a presenter from the resolved config, applying command-line overrides
pub fn load_presenter(config_path: Option<&Path>, show_all: bool) -> Result<Presenter> {
    let (mut config, _) = load_config(config_path)?;
    if show_all {
        config.show_all = true;
    }
    Ok(Presenter::new(config))
}

pub fn load_config(config_path: Option<&Path>) -> Result<(PresenterConfig, ConfigOrigin)> {
    let (config, origin) =
        PresenterConfig::load(config_path).context("Failed to load presenter config")?;
    debug!(%origin, "Using presenter config");
    Ok((config, origin))
}

/// Open the JSON listing when given, otherwise the analyses database
pub fn open_source(db_path: &Path, file: Option<&Path>) -> Result<Box<dyn InsightSource>> {
    if let Some(file) = file {
        let source = JsonFileSource::new(file);
        debug!(path = %source.path().display(), "Reading insight listing");
        return Ok(Box::new(source));
    }

    let path_str = db_path
        .to_str()
        .context("Database path is not valid UTF-8")?;
    let source = SqliteSource::open(path_str)
        .with_context(|| format!("Failed to open database {}", db_path.display()))?;
    debug!(path = source.path(), "Reading insight database");
    Ok(Box::new(source))
}

/// Read the whole file, or stdin when `file` is `None` or `-`
pub fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        _ => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            Ok(buf)
        }
    }
}
