mod common;

use common::{node, triangle};
use saferoute_lib::{Coordinates, Error, Node, RiskGraph};

#[test]
fn add_edge_is_symmetric() {
    let graph = triangle();

    let from_a: Vec<_> = graph
        .neighbors("A")
        .expect("A exists")
        .iter()
        .map(|edge| (edge.target.as_str(), edge.weight, edge.danger_level))
        .collect();
    assert_eq!(from_a, vec![("B", 100.0, 2), ("C", 500.0, 0)]);

    let from_b: Vec<_> = graph
        .neighbors("B")
        .expect("B exists")
        .iter()
        .map(|edge| (edge.target.as_str(), edge.weight, edge.danger_level))
        .collect();
    assert_eq!(from_b, vec![("A", 100.0, 2), ("C", 100.0, 2)]);

    for id in ["A", "B", "C"] {
        for edge in graph.neighbors(id).unwrap() {
            let back = graph
                .neighbors(&edge.target)
                .unwrap()
                .iter()
                .any(|rev| {
                    rev.target == id
                        && rev.weight == edge.weight
                        && rev.danger_level == edge.danger_level
                });
            assert!(back, "missing reverse edge {} -> {}", edge.target, id);
        }
    }
    assert_eq!(graph.edge_count(), 3);
}

#[test]
fn add_node_twice_overwrites_without_duplicating_adjacency() {
    let mut graph = triangle();
    let replacement = Node::new("B", "Bridge", Coordinates::new(1.0, 2.0), false, 9);
    graph.add_node(replacement.clone()).expect("overwrite B");

    assert_eq!(graph.node_count(), 3);
    assert_eq!(graph.node("B").unwrap(), &replacement);
    assert_eq!(graph.neighbors("B").unwrap().len(), 2);
    assert_eq!(graph.edge_count(), 3);
}

#[test]
fn unknown_endpoints_fail_before_validation() {
    let mut graph = triangle();

    let error = graph
        .add_edge("A", "Z", -1.0, 99)
        .expect_err("unknown node wins over invalid edge");
    assert!(matches!(error, Error::UnknownNode { ref id, .. } if id == "Z"));

    let error = graph.add_edge("Y", "A", 1.0, 0).expect_err("unknown from");
    assert!(matches!(error, Error::UnknownNode { ref id, .. } if id == "Y"));

    assert_eq!(graph.edge_count(), 3);
}

#[test]
fn invalid_edges_are_rejected_without_mutation() {
    let mut graph = triangle();

    for (weight, danger) in [
        (0.0, 1),
        (-5.0, 1),
        (f64::NAN, 1),
        (f64::INFINITY, 1),
        (10.0, 11),
    ] {
        let error = graph
            .add_edge("A", "B", weight, danger)
            .expect_err("invalid edge");
        assert!(
            matches!(error, Error::InvalidEdge { .. }),
            "weight {weight}, danger {danger}: {error}"
        );
    }

    assert_eq!(graph.neighbors("A").unwrap().len(), 2);
    assert_eq!(graph.edge_count(), 3);
}

#[test]
fn lookups_of_unknown_ids_fail() {
    let graph = triangle();
    assert!(matches!(
        graph.node("nope"),
        Err(Error::UnknownNode { .. })
    ));
    assert!(matches!(
        graph.neighbors("nope"),
        Err(Error::UnknownNode { .. })
    ));
    assert!(!graph.contains("nope"));
    assert!(graph.contains("A"));
}

#[test]
fn isolated_node_has_empty_adjacency() {
    let mut graph = RiskGraph::new();
    graph.add_node(node("solo", true, 0)).unwrap();
    assert!(graph.neighbors("solo").unwrap().is_empty());
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn safe_nodes_are_sorted_by_id() {
    let graph = triangle();
    let ids: Vec<_> = graph.safe_nodes().iter().map(|n| n.id.as_str()).collect();
    assert_eq!(ids, vec!["A", "C"]);
}

#[test]
fn resolve_accepts_ids_and_names() {
    let mut graph = RiskGraph::new();
    graph
        .add_node(Node::new(
            "paltan",
            "Paltan Bazaar",
            Coordinates::default(),
            false,
            7,
        ))
        .unwrap();

    assert_eq!(graph.resolve("paltan").unwrap().id, "paltan");
    assert_eq!(graph.resolve("paltan bazaar").unwrap().id, "paltan");
    assert_eq!(graph.find_by_name("PALTAN BAZAAR").unwrap().id, "paltan");

    let error = graph.resolve("Paltan Bazar").expect_err("typo");
    assert!(error.to_string().contains("Did you mean 'paltan'?"));
}
