use crate::error::{Result, RouteError};
use crate::graph::algos::path::reconstruct_path;
use crate::graph::types::{Cost, Route};
use crate::graph::GraphProvider;
use crate::{bail_unknown_node, trace_time};
use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashMap};
use std::time::Instant;

/// Frontier entry, ordered by accumulated cost then station id so that
/// equal-cost ties pop in a stable order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeapEntry {
    pub node_id: String,
    pub accumulated_cost: Cost,
}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.accumulated_cost
            .cmp(&other.accumulated_cost)
            .then_with(|| self.node_id.cmp(&other.node_id))
    }
}

/// Working state for a single search. A station missing from `best_cost`
/// has not been reached yet (best-known cost is infinite).
struct DijkstraState {
    heap: BinaryHeap<Reverse<HeapEntry>>,
    best_cost: HashMap<String, Cost>,
    predecessors: HashMap<String, String>,
    settled: usize,
}

impl DijkstraState {
    fn new(start: &str) -> Self {
        let mut state = Self {
            heap: BinaryHeap::new(),
            best_cost: HashMap::new(),
            predecessors: HashMap::new(),
            settled: 0,
        };
        state.best_cost.insert(start.to_string(), Cost::ZERO);
        state.heap.push(Reverse(HeapEntry {
            node_id: start.to_string(),
            accumulated_cost: Cost::ZERO,
        }));
        state
    }

    /// A popped entry is stale when a cheaper path was found after it was pushed
    fn is_stale(&self, node_id: &str, cost: Cost) -> bool {
        self.best_cost.get(node_id).is_some_and(|&best| cost > best)
    }

    /// Record `candidate` for `neighbor` if it beats the best-known cost
    fn relax(&mut self, current_id: &str, neighbor_id: &str, candidate: Cost) {
        if self
            .best_cost
            .get(neighbor_id)
            .is_some_and(|&best| candidate >= best)
        {
            return;
        }

        self.best_cost.insert(neighbor_id.to_string(), candidate);
        self.predecessors
            .insert(neighbor_id.to_string(), current_id.to_string());
        self.heap.push(Reverse(HeapEntry {
            node_id: neighbor_id.to_string(),
            accumulated_cost: candidate,
        }));
    }
}

/// Find the minimum-cost route from `start` to `destination`.
///
/// Stops as soon as `destination` is settled: with non-negative weights a
/// settled station can never be improved. Neighbors are relaxed in station
/// order, so among equal-cost routes the result is deterministic.
///
/// # Errors
/// - `UnknownNode` if either station is not in the graph
/// - `Unreachable` if no path connects them
#[tracing::instrument(skip(provider), fields(start = %start, destination = %destination))]
pub fn find_best_route(
    provider: &dyn GraphProvider,
    start: &str,
    destination: &str,
) -> Result<Route> {
    let timer = Instant::now();

    for station in [start, destination] {
        if !provider.contains(station) {
            bail_unknown_node!(station);
        }
    }

    let mut state = DijkstraState::new(start);

    while let Some(Reverse(HeapEntry {
        node_id: current_id,
        accumulated_cost,
    })) = state.heap.pop()
    {
        if state.is_stale(&current_id, accumulated_cost) {
            continue;
        }
        state.settled += 1;

        if current_id == destination {
            break;
        }

        let mut neighbors: Vec<(&String, &Cost)> =
            provider.neighbors(&current_id)?.iter().collect();
        neighbors.sort_by(|a, b| a.0.cmp(b.0));

        for (neighbor_id, &edge_cost) in neighbors {
            state.relax(&current_id, neighbor_id, accumulated_cost + edge_cost);
        }
    }

    let total_cost = state.best_cost.get(destination).copied();
    let path = reconstruct_path(start, destination, &state.predecessors);

    let (Some(total_cost), Some(path)) = (total_cost, path) else {
        tracing::debug!(settled = state.settled, "destination_unreachable");
        return Err(RouteError::unreachable(start, destination));
    };

    tracing::debug!(
        settled = state.settled,
        hops = path.len() - 1,
        total_cost = %total_cost,
        "route_found"
    );
    trace_time!(timer, "find_best_route");

    Ok(Route {
        from: start.to_string(),
        to: destination.to_string(),
        path,
        total_cost,
    })
}

#[cfg(test)]
mod tests;
