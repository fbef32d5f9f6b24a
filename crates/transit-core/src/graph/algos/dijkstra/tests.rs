use super::*;
use crate::graph::{Graph, GraphBuilder};
use crate::network::reference_network;

fn path_of(route: &Route) -> Vec<&str> {
    route.path.iter().map(String::as_str).collect()
}

/// Sum the edge weights along `path` straight from the graph
fn recomputed_cost(graph: &Graph, path: &[String]) -> Cost {
    path.windows(2)
        .map(|leg| graph.edge_weight(&leg[0], &leg[1]).unwrap())
        .sum()
}

/// Cheapest cost over every simple path, by exhaustive search
fn brute_force_min_cost(graph: &Graph, start: &str, destination: &str) -> Option<Cost> {
    fn walk(
        graph: &Graph,
        current: &str,
        destination: &str,
        visited: &mut Vec<String>,
        cost: Cost,
        best: &mut Option<Cost>,
    ) {
        if current == destination {
            if best.is_none_or(|b| cost < b) {
                *best = Some(cost);
            }
            return;
        }
        for (neighbor, &weight) in graph.neighbors(current).unwrap() {
            if visited.contains(neighbor) {
                continue;
            }
            visited.push(neighbor.clone());
            walk(graph, neighbor, destination, visited, cost + weight, best);
            visited.pop();
        }
    }

    let mut best = None;
    let mut visited = vec![start.to_string()];
    walk(graph, start, destination, &mut visited, Cost::ZERO, &mut best);
    best
}

/// Reference network plus an island that cannot be reached from it
fn network_with_island() -> Graph {
    GraphBuilder::new()
        .connect("A", "B", 5.0)
        .connect("B", "C", 1.0)
        .connect("X", "Y", 2.0)
        .station("Z")
        .build()
        .unwrap()
}

#[test]
fn test_heap_entry_ordering() {
    let entry1 = HeapEntry {
        node_id: "A".to_string(),
        accumulated_cost: Cost::from(1),
    };
    let entry2 = HeapEntry {
        node_id: "B".to_string(),
        accumulated_cost: Cost::from(2),
    };
    let entry3 = HeapEntry {
        node_id: "C".to_string(),
        accumulated_cost: Cost::from(1),
    };

    // Lower cost compares as less
    assert_eq!(entry1.cmp(&entry2), Ordering::Less);
    assert_eq!(entry2.cmp(&entry1), Ordering::Greater);

    // Equal costs fall back to station id
    assert_eq!(entry1.cmp(&entry3), Ordering::Less);

    // Min-heap pops cheapest, then lowest id
    let mut heap = BinaryHeap::new();
    heap.push(Reverse(entry2.clone()));
    heap.push(Reverse(entry3.clone()));
    heap.push(Reverse(entry1.clone()));
    assert_eq!(heap.pop().unwrap().0, entry1);
    assert_eq!(heap.pop().unwrap().0, entry3);
    assert_eq!(heap.pop().unwrap().0, entry2);
}

#[test]
fn test_reference_route_a_to_i() {
    let graph = reference_network().unwrap();
    let route = find_best_route(&graph, "A", "I").unwrap();

    assert_eq!(path_of(&route), vec!["A", "B", "E", "H", "I"]);
    assert_eq!(route.total_cost, Cost::from(19));
    assert_eq!(route.from, "A");
    assert_eq!(route.to, "I");
    assert_eq!(route.hops(), 4);

    // The route through C and F costs 10 + 8 + 12 = 30
    let via_f = ["A", "C", "F", "I"].map(String::from);
    assert_eq!(recomputed_cost(&graph, &via_f), Cost::from(30));
    assert!(route.total_cost <= recomputed_cost(&graph, &via_f));
}

#[test]
fn test_route_to_self_is_single_station() {
    let graph = reference_network().unwrap();
    for station in graph.stations() {
        let route = find_best_route(&graph, station, station).unwrap();
        assert_eq!(path_of(&route), vec![station]);
        assert_eq!(route.total_cost, Cost::ZERO);
    }
}

#[test]
fn test_cost_matches_path_weights() {
    let graph = reference_network().unwrap();
    for start in graph.stations() {
        for destination in graph.stations() {
            let route = find_best_route(&graph, start, destination).unwrap();
            assert_eq!(route.path.first().map(String::as_str), Some(start));
            assert_eq!(route.path.last().map(String::as_str), Some(destination));
            assert_eq!(
                recomputed_cost(&graph, &route.path),
                route.total_cost,
                "{start} -> {destination}"
            );
        }
    }
}

#[test]
fn test_routes_are_symmetric() {
    let graph = reference_network().unwrap();
    for start in graph.stations() {
        for destination in graph.stations() {
            let forward = find_best_route(&graph, start, destination).unwrap();
            let backward = find_best_route(&graph, destination, start).unwrap();
            assert_eq!(forward.total_cost, backward.total_cost);

            // The reversed forward path is a valid backward route of the same cost
            let mut reversed = forward.path.clone();
            reversed.reverse();
            assert_eq!(recomputed_cost(&graph, &reversed), backward.total_cost);
        }
    }
}

#[test]
fn test_routes_are_optimal() {
    let graph = reference_network().unwrap();
    for start in graph.stations() {
        for destination in graph.stations() {
            let route = find_best_route(&graph, start, destination).unwrap();
            let best = brute_force_min_cost(&graph, start, destination).unwrap();
            assert_eq!(route.total_cost, best, "{start} -> {destination}");
        }
    }
}

#[test]
fn test_unreachable_destination() {
    let graph = network_with_island();
    let err = find_best_route(&graph, "A", "Y").unwrap_err();
    assert!(matches!(
        err,
        RouteError::Unreachable { ref from, ref to } if from == "A" && to == "Y"
    ));
}

#[test]
fn test_unreachable_isolated_station() {
    let graph = network_with_island();
    assert!(matches!(
        find_best_route(&graph, "Z", "A"),
        Err(RouteError::Unreachable { .. })
    ));
    // An isolated station still routes to itself
    let route = find_best_route(&graph, "Z", "Z").unwrap();
    assert_eq!(path_of(&route), vec!["Z"]);
}

#[test]
fn test_unknown_start_and_destination() {
    let graph = reference_network().unwrap();
    assert!(matches!(
        find_best_route(&graph, "Q", "A"),
        Err(RouteError::UnknownNode { ref id }) if id == "Q"
    ));
    assert!(matches!(
        find_best_route(&graph, "A", "Q"),
        Err(RouteError::UnknownNode { ref id }) if id == "Q"
    ));
}

#[test]
fn test_stale_entries_are_skipped() {
    // C is first reached directly at cost 10, then improved to 3 via B.
    // The superseded (10, C) entry pops before D and is discarded.
    let graph = GraphBuilder::new()
        .connect("A", "C", 10.0)
        .connect("A", "B", 1.0)
        .connect("B", "C", 2.0)
        .connect("C", "D", 20.0)
        .build()
        .unwrap();

    let route = find_best_route(&graph, "A", "D").unwrap();
    assert_eq!(path_of(&route), vec!["A", "B", "C", "D"]);
    assert_eq!(route.total_cost, Cost::from(23));
}

#[test]
fn test_zero_weight_edges() {
    let graph = GraphBuilder::new()
        .connect("A", "B", 0.0)
        .connect("B", "C", 0.0)
        .connect("A", "C", 1.0)
        .build()
        .unwrap();

    let route = find_best_route(&graph, "A", "C").unwrap();
    assert_eq!(path_of(&route), vec!["A", "B", "C"]);
    assert_eq!(route.total_cost, Cost::ZERO);
}

#[test]
fn test_fractional_weights() {
    let graph = GraphBuilder::new()
        .connect("A", "B", 1.5)
        .connect("B", "C", 2.25)
        .connect("A", "C", 4.0)
        .build()
        .unwrap();

    let route = find_best_route(&graph, "A", "C").unwrap();
    assert_eq!(route.total_cost, Cost::new(3.75));
}

#[test]
fn test_equal_cost_ties_are_deterministic() {
    // A-B-D and A-C-D both cost 2; relaxing in station order settles on B.
    let graph = GraphBuilder::new()
        .connect("A", "C", 1.0)
        .connect("A", "B", 1.0)
        .connect("C", "D", 1.0)
        .connect("B", "D", 1.0)
        .build()
        .unwrap();

    for _ in 0..10 {
        let route = find_best_route(&graph, "A", "D").unwrap();
        assert_eq!(path_of(&route), vec!["A", "B", "D"]);
    }
}

#[test]
fn test_shared_graph_across_threads() {
    let graph = reference_network().unwrap();
    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| find_best_route(&graph, "A", "I").unwrap()))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap().total_cost, Cost::from(19));
        }
    });
}
