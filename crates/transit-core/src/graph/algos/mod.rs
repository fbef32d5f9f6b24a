//! Route-finding algorithm implementations
//!
//! - `dijkstra`: label-setting shortest path between two stations
//! - `path`: predecessor-chain reconstruction shared by route searches

pub mod dijkstra;
pub mod path;

pub use dijkstra::find_best_route;
pub use path::reconstruct_path;
