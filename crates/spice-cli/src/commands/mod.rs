//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `config` - Show the resolved presenter configuration
//! - `core` - Shared utilities (load_presenter, open_source, read_input)
//! - `format` - Format a text blob from a file or stdin
//! - `insights` - Show stored insights from a database or JSON listing

pub mod config;
pub mod core;
pub mod format;
pub mod insights;

// Re-export command functions for main.rs
pub use config::*;
pub use core::*;
pub use format::*;
pub use insights::*;
