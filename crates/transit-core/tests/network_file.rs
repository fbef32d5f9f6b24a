//! Loading network files from disk and routing over them

use std::fs;

use tempfile::tempdir;
use transit_core::error::RouteError;
use transit_core::network::NetworkConfig;
use transit_core::{find_best_route, Cost};

const LOOP_LINE: &str = r#"
units = "min"

[[connections]]
from = "North"
to = "East"
minutes = 4

[[connections]]
from = "East"
to = "South"
minutes = 4

[[connections]]
from = "South"
to = "West"
minutes = 4

[[connections]]
from = "West"
to = "North"
minutes = 9
"#;

#[test]
fn test_load_and_route() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("loop.toml");
    fs::write(&path, LOOP_LINE).unwrap();

    let config = NetworkConfig::load(&path).unwrap();
    assert_eq!(config.units, "min");

    let graph = config.build_graph().unwrap();
    let route = find_best_route(&graph, "North", "West").unwrap();
    assert_eq!(route.path, vec!["North", "West"]);
    assert_eq!(route.total_cost, Cost::from(9));

    let route = find_best_route(&graph, "East", "West").unwrap();
    assert_eq!(route.path, vec!["East", "South", "West"]);
    assert_eq!(route.total_cost, Cost::from(8));
}

#[test]
fn test_load_missing_file() {
    let dir = tempdir().unwrap();
    let err = NetworkConfig::load(&dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, RouteError::Io(_)));
}

#[test]
fn test_load_malformed_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("broken.toml");
    fs::write(&path, "[[connections]]\nfrom = \"A\"\n").unwrap();

    let err = NetworkConfig::load(&path).unwrap_err();
    assert!(matches!(err, RouteError::InvalidNetworkFile { .. }));
}

#[test]
fn test_isolated_station_is_unreachable() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("depot.toml");
    fs::write(&path, format!("stations = [\"Depot\"]\n{LOOP_LINE}")).unwrap();

    let graph = NetworkConfig::load(&path).unwrap().build_graph().unwrap();
    assert_eq!(graph.station_count(), 5);

    let err = find_best_route(&graph, "North", "Depot").unwrap_err();
    assert!(matches!(err, RouteError::Unreachable { .. }));
}
