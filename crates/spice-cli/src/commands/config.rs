//! Config command implementation

use std::path::Path;

use anyhow::Result;
use spice_core::config::default_config_path;

use super::load_config;

pub fn cmd_config(config_path: Option<&Path>) -> Result<()> {
    let (config, origin) = load_config(config_path)?;

    println!();
    println!("⚙️  Spice Presenter Config");
    println!("   ─────────────────────────────────────────────────────────────");
    println!("   Source: {}", origin);
    if let Some(path) = default_config_path() {
        println!("   Override path: {}", path.display());
    }
    println!();
    println!("   Max citations: {}", config.max_citations);
    println!("   Show all insights: {}", config.show_all);
    println!("   Confidence bar width: {}", config.bar_width);
    println!();
    Ok(())
}
