//! Command dispatch logic for transit-route
use std::time::Instant;

use transit_core::error::{Result, RouteError};
use transit_core::network::{NetworkConfig, REFERENCE_DESTINATION, REFERENCE_START};

use crate::cli::{Cli, Commands};
use crate::commands;

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let network = load_network(cli)?;
    let graph = network.build_graph()?;

    tracing::debug!(
        elapsed = ?start.elapsed(),
        stations = graph.station_count(),
        connections = graph.connection_count(),
        "load_network"
    );

    match &cli.command {
        None => handle_no_command(cli, &graph, &network),

        Some(Commands::Route { from, to }) => {
            commands::route::execute(cli, &graph, &network.units, from, to)
        }

        Some(Commands::Stations) => commands::stations::execute(cli, &graph, &network.units),
    }
}

fn load_network(cli: &Cli) -> Result<NetworkConfig> {
    match &cli.network {
        Some(path) => NetworkConfig::load(path),
        None => Ok(NetworkConfig::reference()),
    }
}

/// Without a command, answer the reference query on the reference network
fn handle_no_command(
    cli: &Cli,
    graph: &transit_core::Graph,
    network: &NetworkConfig,
) -> Result<()> {
    if cli.network.is_some() {
        return Err(RouteError::UsageError(
            "no command given; try `transit-route route <FROM> <TO>`".to_string(),
        ));
    }

    commands::route::execute(
        cli,
        graph,
        &network.units,
        REFERENCE_START,
        REFERENCE_DESTINATION,
    )
}
