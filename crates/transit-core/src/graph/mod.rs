//! Station graph and route-finding operations
//!
//! Provides the pieces needed to answer a route query:
//! - `store`: the validated, immutable station graph
//! - `algos`: Dijkstra shortest-path search and path reconstruction
//! - `traversal`: the read-only provider trait the solver consumes

pub mod algos;
pub mod store;
pub mod traversal;
pub mod types;

pub use algos::find_best_route;
pub use store::{Graph, GraphBuilder};
pub use traversal::{Adjacency, GraphProvider};
pub use types::{Cost, Route};
