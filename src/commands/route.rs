//! Route command
use std::time::Instant;

use transit_core::error::Result;
use transit_core::format::{format_route_human, route_to_json, OutputFormat};
use transit_core::{find_best_route, Graph};

use crate::cli::Cli;

/// Execute the route command
pub fn execute(cli: &Cli, graph: &Graph, units: &str, from: &str, to: &str) -> Result<()> {
    let start = Instant::now();

    let route = find_best_route(graph, from, to)?;

    tracing::debug!(elapsed = ?start.elapsed(), "find_route");

    match cli.format {
        OutputFormat::Human => println!("{}", format_route_human(&route, units)),
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&route_to_json(&route, units))?
            );
        }
    }

    Ok(())
}
