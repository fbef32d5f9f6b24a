//! Network files and the built-in reference network
//!
//! A network file is TOML:
//!
//! ```toml
//! units = "minutes"
//! stations = ["Z"]        # optional, for stations with no connections
//!
//! [[connections]]
//! from = "A"
//! to = "B"
//! minutes = 5
//! ```
//!
//! Every connection is undirected.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, RouteError};
use crate::graph::{Graph, GraphBuilder};

/// Units label used when a network file does not name one
pub const DEFAULT_UNITS: &str = "minutes";

/// Start station of the reference query
pub const REFERENCE_START: &str = "A";

/// Destination station of the reference query
pub const REFERENCE_DESTINATION: &str = "I";

const REFERENCE_CONNECTIONS: &[(&str, &str, f64)] = &[
    ("A", "B", 5.0),
    ("A", "C", 10.0),
    ("B", "D", 7.0),
    ("B", "E", 3.0),
    ("C", "F", 8.0),
    ("D", "E", 2.0),
    ("D", "G", 6.0),
    ("E", "H", 4.0),
    ("G", "H", 5.0),
    ("F", "I", 12.0),
    ("H", "I", 7.0),
];

fn default_units() -> String {
    DEFAULT_UNITS.to_string()
}

/// A single undirected connection between two stations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Connection {
    pub from: String,
    pub to: String,
    /// Travel time; `weight` is accepted as an alias
    #[serde(alias = "weight")]
    pub minutes: f64,
}

/// Parsed network description
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NetworkConfig {
    /// Label printed after route costs
    #[serde(default = "default_units")]
    pub units: String,

    /// Extra stations, including ones with no connections
    #[serde(default)]
    pub stations: Vec<String>,

    #[serde(default)]
    pub connections: Vec<Connection>,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            units: default_units(),
            stations: Vec::new(),
            connections: Vec::new(),
        }
    }
}

impl NetworkConfig {
    /// The nine-station network the planner ships with
    pub fn reference() -> Self {
        Self {
            connections: REFERENCE_CONNECTIONS
                .iter()
                .map(|&(from, to, minutes)| Connection {
                    from: from.to_string(),
                    to: to.to_string(),
                    minutes,
                })
                .collect(),
            ..Default::default()
        }
    }

    /// Parse a network description from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load a network description from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content).map_err(|e| RouteError::InvalidNetworkFile {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        tracing::debug!(
            path = %path.display(),
            stations = config.stations.len(),
            connections = config.connections.len(),
            "network_loaded"
        );

        Ok(config)
    }

    /// Build the validated station graph
    pub fn build_graph(&self) -> Result<Graph> {
        let builder = self
            .stations
            .iter()
            .fold(GraphBuilder::new(), |builder, station| {
                builder.station(station.as_str())
            });

        self.connections
            .iter()
            .fold(builder, |builder, c| {
                builder.connect(c.from.as_str(), c.to.as_str(), c.minutes)
            })
            .build()
    }
}

/// The reference network as a ready-to-query graph
pub fn reference_network() -> Result<Graph> {
    NetworkConfig::reference().build_graph()
}
