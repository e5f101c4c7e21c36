//! Marquee TUI - search OMDb and keep up to five nominations.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "marquee-tui")]
#[command(about = "Search movies and nominate your top five", long_about = None)]
#[command(version = marquee_core::build_info::BUILD_INFO.version)]
struct Args {
    /// Path to config file (defaults to $MARQUEE_DIR/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config_path = args
        .config
        .unwrap_or_else(marquee_core::paths::config_path);
    let config = marquee_core::Config::load_or_default(&config_path)
        .with_context(|| format!("Failed to load config from {}", config_path.display()))?;

    marquee_core::logging::init_to_file(&marquee_core::paths::tui_log_path())?;
    tracing::info!(
        "{}",
        marquee_core::build_info::version_string("marquee-tui")
    );

    // Run the TUI
    marquee_tui::run(config)
}
