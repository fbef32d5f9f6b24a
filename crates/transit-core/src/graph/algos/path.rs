//! Path reconstruction utilities for route search

use std::collections::HashMap;

/// Walk the predecessor chain back from `destination` and return the
/// stations in travel order.
///
/// Returns `None` when the chain ends somewhere other than `start`, i.e.
/// `destination` was never reached.
pub fn reconstruct_path(
    start: &str,
    destination: &str,
    predecessors: &HashMap<String, String>,
) -> Option<Vec<String>> {
    let mut path = vec![destination.to_string()];
    let mut current = destination;

    while let Some(pred) = predecessors.get(current) {
        path.push(pred.clone());
        current = pred;
    }

    if current != start {
        return None;
    }

    path.reverse();
    Some(path)
}
