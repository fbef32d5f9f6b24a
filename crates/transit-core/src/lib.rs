//! Transit Core Library
//!
//! Core domain logic for the transit-route planner: a validated, immutable
//! station graph and a Dijkstra shortest-path solver over it.

pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
pub mod network;

pub use error::{Result, RouteError};
pub use graph::{find_best_route, Cost, Graph, GraphBuilder, GraphProvider, Route};
