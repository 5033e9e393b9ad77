//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI arguments.
//! The actual command implementations are in the `commands` module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Spice - Turn brand intelligence analyses into readable reports
#[derive(Parser)]
#[command(name = "spice")]
#[command(about = "Brand intelligence insight formatter", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Presenter config file
    ///
    /// Defaults to ~/.local/share/spice/config/presenter.toml when present,
    /// otherwise the built-in defaults.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Format an analysis text into sections
    Format {
        /// Text file to format (reads stdin when omitted or "-")
        file: Option<PathBuf>,

        /// Print the structured document as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Show stored insights (latest only unless --all)
    Insights {
        /// Analyses database written by the analysis service
        #[arg(long, default_value = "spice.db", conflicts_with = "file")]
        db: PathBuf,

        /// Read a saved JSON insight listing instead of the database
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Show all insights instead of only the latest
        #[arg(long)]
        all: bool,

        /// Show a single insight by id
        #[arg(long, conflicts_with = "all")]
        id: Option<i64>,

        /// Print insights with their structured documents as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the resolved presenter configuration
    Config,
}
