//! Output format handling for transit-route
//!
//! - human: the two-line route summary, readable in a terminal
//! - json: stable, machine-readable JSON

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::error::RouteError;
use crate::graph::{Graph, Route};

/// Separator placed between stations in a human-readable route
pub const ROUTE_SEPARATOR: &str = " → ";

/// Output format for transit-route commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for machine consumption
    Json,
}

impl FromStr for OutputFormat {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" => Ok(OutputFormat::Human),
            "json" => Ok(OutputFormat::Json),
            other => Err(RouteError::UnknownFormat(other.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Human => write!(f, "human"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Format a route as two lines: the stations, then the total cost
pub fn format_route_human(route: &Route, units: &str) -> String {
    format!(
        "Best route from {} to {}: {}\nTotal travel cost: {} {}",
        route.from,
        route.to,
        route.path.join(ROUTE_SEPARATOR),
        route.total_cost,
        units
    )
}

pub fn route_to_json(route: &Route, units: &str) -> serde_json::Value {
    json!({
        "from": route.from,
        "to": route.to,
        "path": route.path,
        "hops": route.hops(),
        "total_cost": route.total_cost,
        "units": units,
    })
}

/// One line per station listing its connections
pub fn format_stations_human(graph: &Graph, units: &str) -> String {
    graph
        .station_connections()
        .into_iter()
        .map(|(station, connections)| {
            if connections.is_empty() {
                format!("{station}: (no connections)")
            } else {
                let listed: Vec<String> = connections
                    .iter()
                    .map(|(neighbor, cost)| format!("{neighbor} ({cost} {units})"))
                    .collect();
                format!("{station}: {}", listed.join(", "))
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn stations_to_json(graph: &Graph, units: &str) -> serde_json::Value {
    let stations: Vec<serde_json::Value> = graph
        .station_connections()
        .into_iter()
        .map(|(station, connections)| {
            let connections: Vec<serde_json::Value> = connections
                .into_iter()
                .map(|(to, cost)| json!({ "to": to, "cost": cost }))
                .collect();
            json!({ "station": station, "connections": connections })
        })
        .collect();

    json!({ "units": units, "stations": stations })
}
