use crate::error::Result;
use crate::graph::types::Cost;
use std::collections::HashMap;

/// Neighbor station -> travel time
pub type Adjacency = HashMap<String, Cost>;

/// Trait for providing read-only station adjacency
pub trait GraphProvider {
    /// Neighbors of `node` with their edge weights; fails with
    /// `RouteError::UnknownNode` when `node` is not in the graph
    fn neighbors(&self, node: &str) -> Result<&Adjacency>;

    fn contains(&self, node: &str) -> bool;
}
