//! Command implementations

mod convert;
mod datums;
mod to_grid;
mod to_latlon;

use crate::cli::{Cli, Commands};
use crate::config::LayeredConfig;
use crate::output::OutputWriter;
use anyhow::Result;

/// Execute a CLI command
pub fn execute(cli: Cli) -> Result<()> {
    let output = OutputWriter::new(cli.json);

    let mut config = LayeredConfig::with_defaults();
    if let Some(path) = &cli.config {
        config = config.load_from_file(path)?;
    }
    let config = config.load_from_env();

    match cli.command {
        Commands::ToLatlon(args) => to_latlon::execute(args, &output, &config),
        Commands::ToGrid(args) => to_grid::execute(args, &output, &config),
        Commands::Convert(args) => convert::execute(args, &output),
        Commands::Datums => datums::execute(&output),
    }
}
