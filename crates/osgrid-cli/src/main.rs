//! osgrid CLI - Command-line interface
//!
//! This is the boundary caller for the conversion engine: it takes grid
//! references or latitude/longitude pairs as text and prints converted
//! results. Presentation, configuration, and logging live here; the engine
//! crates stay pure.

mod cli;
mod commands;
mod config;
mod output;

use anyhow::Result;
use clap::Parser;
use cli::Cli;

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    commands::execute(cli)
}
