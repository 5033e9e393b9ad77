//! Spice Core Library
//!
//! Shared functionality for the Spice brand intelligence tool:
//! - Insight formatter: free-form analysis text into titled sections of typed items
//! - Citation surfacing and domain extraction
//! - Plain-text presenter for documents, citations and insight listings
//! - Presenter configuration with embedded defaults
//! - Read-only insight sources (SQLite store, saved JSON listings)

pub mod citations;
pub mod config;
pub mod error;
pub mod formatter;
pub mod models;
pub mod render;
pub mod source;

/// Test utilities for building analyses databases
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use citations::{domain_for_url, surface_citations, Citation, SurfacedCitation};
pub use config::{ConfigOrigin, PresenterConfig};
pub use error::{Error, Result};
pub use formatter::{format_insight, ContentItem, FormattedInsight, Section};
pub use models::InsightRecord;
pub use render::Presenter;
pub use source::{InsightSource, JsonFileSource, SqliteSource};
