//! Presenter configuration
//!
//! ## Configuration Resolution
//!
//! Config is loaded with a two-layer resolution:
//! 1. An explicit path, else the override in the data dir
//!    (~/.local/share/spice/config/presenter.toml)
//! 2. Fall back to embedded defaults (compiled into binary)

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::citations::MAX_SURFACED_CITATIONS;
use crate::error::{Error, Result};

/// Embedded default config (compiled into binary)
const DEFAULT_CONFIG: &str = include_str!("../../../config/presenter.toml");

/// Settings that control how formatted insights are presented
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PresenterConfig {
    /// Most citations listed under an insight
    pub max_citations: usize,
    /// List every insight instead of only the latest
    pub show_all: bool,
    /// Width of the confidence bar in characters
    pub bar_width: usize,
}

impl Default for PresenterConfig {
    fn default() -> Self {
        Self {
            max_citations: MAX_SURFACED_CITATIONS,
            show_all: false,
            bar_width: 20,
        }
    }
}

/// Where a loaded configuration came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigOrigin {
    File(PathBuf),
    Embedded,
}

impl std::fmt::Display for ConfigOrigin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigOrigin::File(path) => write!(f, "{}", path.display()),
            ConfigOrigin::Embedded => write!(f, "(embedded defaults)"),
        }
    }
}

impl PresenterConfig {
    /// Load from `path` if given, else from the default override location,
    /// else from the embedded defaults.
    ///
    /// An explicit path that does not exist is an error; a missing default
    /// override is not.
    pub fn load(path: Option<&Path>) -> Result<(Self, ConfigOrigin)> {
        if let Some(path) = path {
            if !path.exists() {
                return Err(Error::NotFound(format!(
                    "Config file {}",
                    path.display()
                )));
            }
            return Ok((Self::from_file(path)?, ConfigOrigin::File(path.to_path_buf())));
        }

        if let Some(default_path) = default_config_path() {
            if default_path.exists() {
                let config = Self::from_file(&default_path)?;
                return Ok((config, ConfigOrigin::File(default_path)));
            }
        }

        Ok((parse_config(DEFAULT_CONFIG)?, ConfigOrigin::Embedded))
    }

    fn from_file(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "Loading presenter config");
        let content = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("Failed to read {}: {}", path.display(), e)))?;
        parse_config(&content)
    }
}

/// Default config override path
pub fn default_config_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|d| d.join("spice").join("config").join("presenter.toml"))
}

/// Raw config structure for TOML parsing
#[derive(Debug, Deserialize)]
struct RawConfig {
    citations: Option<RawCitations>,
    listing: Option<RawListing>,
    metrics: Option<RawMetrics>,
}

#[derive(Debug, Deserialize)]
struct RawCitations {
    max: Option<usize>,
}

#[derive(Debug, Deserialize)]
struct RawListing {
    show_all: Option<bool>,
}

#[derive(Debug, Deserialize)]
struct RawMetrics {
    bar_width: Option<usize>,
}

/// Parse config from TOML content
pub fn parse_config(content: &str) -> Result<PresenterConfig> {
    let raw: RawConfig = toml::from_str(content)
        .map_err(|e| Error::Config(format!("Invalid config TOML: {}", e)))?;

    let mut config = PresenterConfig::default();

    if let Some(max) = raw.citations.and_then(|c| c.max) {
        // The surfaced list is capped no matter what the file asks for
        config.max_citations = max.min(MAX_SURFACED_CITATIONS);
    }
    if let Some(show_all) = raw.listing.and_then(|l| l.show_all) {
        config.show_all = show_all;
    }
    if let Some(width) = raw.metrics.and_then(|m| m.bar_width) {
        if width == 0 {
            return Err(Error::Config("metrics.bar_width must be at least 1".into()));
        }
        config.bar_width = width;
    }

    Ok(config)
}
