//! Validated, immutable station graph

use crate::error::Result;
use crate::graph::traversal::{Adjacency, GraphProvider};
use crate::graph::types::Cost;
use crate::{bail_invalid_graph, bail_unknown_node};
use std::collections::{BTreeSet, HashMap};

/// Raw adjacency description: station -> (neighbor -> minutes)
pub type RawAdjacency = HashMap<String, HashMap<String, f64>>;

/// A static, weighted station graph.
///
/// Construction validates that every neighbor is itself a station and that
/// every weight is a finite, non-negative number. There is no mutation path
/// after construction, so a `Graph` can be shared across threads freely.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    adjacency: HashMap<String, Adjacency>,
}

impl Graph {
    /// Build a graph from a raw adjacency description
    pub fn new(adjacency: RawAdjacency) -> Result<Self> {
        validate(&adjacency)?;
        warn_asymmetric(&adjacency);

        let adjacency = adjacency
            .into_iter()
            .map(|(node, neighbors)| {
                let neighbors = neighbors
                    .into_iter()
                    // `+ 0.0` folds -0.0 into 0.0
                    .map(|(neighbor, minutes)| (neighbor, Cost::new(minutes + 0.0)))
                    .collect();
                (node, neighbors)
            })
            .collect();

        Ok(Graph { adjacency })
    }

    /// All station identifiers, sorted
    pub fn stations(&self) -> Vec<&str> {
        let mut stations: Vec<&str> = self.adjacency.keys().map(String::as_str).collect();
        stations.sort_unstable();
        stations
    }

    pub fn station_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of distinct undirected connections
    pub fn connection_count(&self) -> usize {
        self.adjacency
            .iter()
            .flat_map(|(node, neighbors)| {
                neighbors.keys().map(move |neighbor| {
                    if node <= neighbor {
                        (node.as_str(), neighbor.as_str())
                    } else {
                        (neighbor.as_str(), node.as_str())
                    }
                })
            })
            .collect::<BTreeSet<_>>()
            .len()
    }

    /// Every station with its outgoing connections, both sorted by id
    pub fn station_connections(&self) -> Vec<(&str, Vec<(&str, Cost)>)> {
        self.stations()
            .into_iter()
            .map(|station| {
                let mut connections: Vec<(&str, Cost)> = self.adjacency[station]
                    .iter()
                    .map(|(neighbor, &cost)| (neighbor.as_str(), cost))
                    .collect();
                connections.sort_unstable_by(|a, b| a.0.cmp(b.0));
                (station, connections)
            })
            .collect()
    }

    /// Weight of the direct edge `from -> to`, if one exists
    pub fn edge_weight(&self, from: &str, to: &str) -> Option<Cost> {
        self.adjacency.get(from)?.get(to).copied()
    }
}

impl GraphProvider for Graph {
    fn neighbors(&self, node: &str) -> Result<&Adjacency> {
        match self.adjacency.get(node) {
            Some(neighbors) => Ok(neighbors),
            None => bail_unknown_node!(node),
        }
    }

    fn contains(&self, node: &str) -> bool {
        self.adjacency.contains_key(node)
    }
}

fn sorted_keys<V>(map: &HashMap<String, V>) -> Vec<&String> {
    let mut keys: Vec<&String> = map.keys().collect();
    keys.sort_unstable();
    keys
}

/// Check graph invariants, reporting the first violation in station order
fn validate(adjacency: &RawAdjacency) -> Result<()> {
    for node in sorted_keys(adjacency) {
        let neighbors = &adjacency[node];
        for neighbor in sorted_keys(neighbors) {
            let minutes = neighbors[neighbor];
            if neighbor == node {
                bail_invalid_graph!("station {node} is connected to itself");
            }
            if !adjacency.contains_key(neighbor) {
                bail_invalid_graph!("station {node} references unknown station {neighbor}");
            }
            if !Cost::is_valid_weight(minutes) {
                bail_invalid_graph!(
                    "connection {node} -> {neighbor} has invalid weight {minutes} (must be finite and >= 0)"
                );
            }
        }
    }
    Ok(())
}

/// Undirected routing needs both directions with equal weights; a mismatch
/// is allowed but almost always a data-entry mistake.
fn warn_asymmetric(adjacency: &RawAdjacency) {
    for (node, neighbors) in adjacency {
        for (neighbor, &minutes) in neighbors {
            match adjacency.get(neighbor).and_then(|back| back.get(node)) {
                None => tracing::warn!(
                    from = %node,
                    to = %neighbor,
                    "connection has no reverse direction"
                ),
                Some(&reverse) if node < neighbor && reverse != minutes => tracing::warn!(
                    from = %node,
                    to = %neighbor,
                    forward = minutes,
                    reverse,
                    "connection weights differ by direction"
                ),
                Some(_) => {}
            }
        }
    }
}

/// Builder for undirected station graphs.
///
/// ```
/// use transit_core::graph::GraphBuilder;
///
/// let graph = GraphBuilder::new()
///     .connect("A", "B", 5.0)
///     .station("Z")
///     .build()
///     .unwrap();
/// assert_eq!(graph.station_count(), 3);
/// ```
#[derive(Debug, Default)]
pub struct GraphBuilder {
    adjacency: RawAdjacency,
    conflicts: Vec<String>,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a station, connected or not
    pub fn station(mut self, id: impl Into<String>) -> Self {
        self.adjacency.entry(id.into()).or_default();
        self
    }

    /// Connect two stations in both directions
    pub fn connect(mut self, a: impl Into<String>, b: impl Into<String>, minutes: f64) -> Self {
        let a = a.into();
        let b = b.into();
        self.insert_directed(&a, &b, minutes);
        self.insert_directed(&b, &a, minutes);
        self
    }

    fn insert_directed(&mut self, from: &str, to: &str, minutes: f64) {
        self.adjacency.entry(to.to_string()).or_default();
        let neighbors = self.adjacency.entry(from.to_string()).or_default();
        if let Some(previous) = neighbors.insert(to.to_string(), minutes) {
            if previous != minutes {
                self.conflicts.push(format!(
                    "connection {from} -> {to} given twice with weights {previous} and {minutes}"
                ));
            }
        }
    }

    pub fn build(self) -> Result<Graph> {
        if let Some(conflict) = self.conflicts.into_iter().next() {
            bail_invalid_graph!("{conflict}");
        }
        Graph::new(self.adjacency)
    }
}
