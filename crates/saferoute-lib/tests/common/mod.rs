#![allow(dead_code)]

use saferoute_lib::{Coordinates, Node, RiskGraph};

pub fn node(id: &str, is_safe: bool, danger_level: u8) -> Node {
    Node::new(id, id, Coordinates::default(), is_safe, danger_level)
}

/// A(0, safe) - B(6) - C(0, safe) with a long but harmless A - C road.
pub fn triangle() -> RiskGraph {
    let mut graph = RiskGraph::new();
    graph.add_node(node("A", true, 0)).expect("add A");
    graph.add_node(node("B", false, 6)).expect("add B");
    graph.add_node(node("C", true, 0)).expect("add C");
    graph.add_edge("A", "B", 100.0, 2).expect("A-B");
    graph.add_edge("B", "C", 100.0, 2).expect("B-C");
    graph.add_edge("A", "C", 500.0, 0).expect("A-C");
    graph
}

/// Square grid with `size * size` nodes named `r{row}c{col}`. Danger levels
/// and weights vary deterministically with position.
pub fn grid(size: usize) -> RiskGraph {
    let mut graph = RiskGraph::new();
    let id = |row: usize, col: usize| format!("r{row}c{col}");
    for row in 0..size {
        for col in 0..size {
            let danger = ((row * 7 + col * 3) % 11) as u8;
            let is_safe = danger == 0;
            graph
                .add_node(Node::new(
                    id(row, col),
                    "",
                    Coordinates::new(30.0 + row as f64 * 0.001, 78.0 + col as f64 * 0.001),
                    is_safe,
                    danger,
                ))
                .expect("grid node");
        }
    }
    for row in 0..size {
        for col in 0..size {
            let weight = 50.0 + ((row * 13 + col * 17) % 90) as f64;
            let danger = ((row + col * 5) % 11) as u8;
            if col + 1 < size {
                graph
                    .add_edge(&id(row, col), &id(row, col + 1), weight, danger)
                    .expect("grid edge");
            }
            if row + 1 < size {
                graph
                    .add_edge(&id(row, col), &id(row + 1, col), weight + 10.0, danger / 2)
                    .expect("grid edge");
            }
        }
    }
    graph
}
