//! Stations command
use transit_core::error::Result;
use transit_core::format::{format_stations_human, stations_to_json, OutputFormat};
use transit_core::Graph;

use crate::cli::Cli;

pub fn execute(cli: &Cli, graph: &Graph, units: &str) -> Result<()> {
    match cli.format {
        OutputFormat::Human => println!("{}", format_stations_human(graph, units)),
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&stations_to_json(graph, units))?
            );
        }
    }
    Ok(())
}
