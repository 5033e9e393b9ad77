//! Spice CLI - Brand intelligence insight formatter
//!
//! Usage:
//!   spice format report.txt       Format an analysis text
//!   spice insights --db spice.db  Show the latest stored insight
//!   spice insights --all          Show every stored insight
//!   spice config                  Show presenter configuration

mod cli;
mod commands;


use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact().with_writer(std::io::stderr))
        .init();

    let config = cli.config.as_deref();

    match cli.command {
        Commands::Format { file, json } => commands::cmd_format(file.as_deref(), config, json),
        Commands::Insights {
            db,
            file,
            all,
            id,
            json,
        } => commands::cmd_insights(&db, file.as_deref(), config, all, id, json),
        Commands::Config => commands::cmd_config(config),
    }
}
