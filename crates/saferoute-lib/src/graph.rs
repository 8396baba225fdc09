use std::cmp::Ordering;
use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};

/// Highest danger level accepted for nodes and edges.
pub const MAX_DANGER_LEVEL: u8 = 10;

/// Residual danger a node may carry while still being flagged safe. Matches
/// the upper bound of the low risk band.
pub const SAFE_DANGER_CEILING: u8 = 3;

/// Minimum Jaro-Winkler similarity for an id or name to be offered as a
/// suggestion when a lookup misses.
const SUGGESTION_THRESHOLD: f64 = 0.8;
const MAX_SUGGESTIONS: usize = 3;

const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// Geographic position of a location. Only used for rendering and for the
/// straight-line refuge lookup; the path search never reads it.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Great-circle distance to another position in meters (haversine).
    pub fn distance_to(&self, other: &Self) -> f64 {
        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();
        let dlat = lat2 - lat1;
        let dlng = (other.lng - self.lng).to_radians();

        let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlng / 2.0).sin().powi(2);
        2.0 * EARTH_RADIUS_METERS * a.sqrt().atan2((1.0 - a).sqrt())
    }
}

/// A location in the graph with its own danger rating.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(flatten)]
    pub coordinates: Coordinates,
    pub is_safe: bool,
    pub danger_level: u8,
}

impl Node {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        coordinates: Coordinates,
        is_safe: bool,
        danger_level: u8,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            coordinates,
            is_safe,
            danger_level,
        }
    }

    /// Name shown to users; falls back to the id for unnamed nodes.
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            &self.id
        } else {
            &self.name
        }
    }

    fn validate(&self) -> Result<()> {
        if self.id.is_empty() {
            return Err(Error::invalid_node(&self.id, "node id must not be empty"));
        }
        if self.danger_level > MAX_DANGER_LEVEL {
            return Err(Error::invalid_node(
                &self.id,
                format!(
                    "danger level {} exceeds maximum of {MAX_DANGER_LEVEL}",
                    self.danger_level
                ),
            ));
        }
        if self.is_safe && self.danger_level > SAFE_DANGER_CEILING {
            return Err(Error::invalid_node(
                &self.id,
                format!(
                    "flagged safe but danger level {} exceeds safe ceiling of {SAFE_DANGER_CEILING}",
                    self.danger_level
                ),
            ));
        }
        Ok(())
    }
}

/// One direction of an undirected edge as stored in the adjacency list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Neighbor {
    pub target: String,
    pub weight: f64,
    pub danger_level: u8,
}

/// Locations joined by undirected, weighted and danger-rated roads.
///
/// Every id referenced by the adjacency is a node key, and the adjacency is
/// symmetric: inserting `a - b` stores `a -> b` and `b -> a` with the same
/// weight and danger.
#[derive(Debug, Clone, Default)]
pub struct RiskGraph {
    nodes: HashMap<String, Node>,
    adjacency: HashMap<String, Vec<Neighbor>>,
}

impl RiskGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite a node. Existing adjacency for the id is kept.
    pub fn add_node(&mut self, node: Node) -> Result<()> {
        node.validate()?;

        self.adjacency.entry(node.id.clone()).or_default();
        if let Some(previous) = self.nodes.insert(node.id.clone(), node) {
            debug!(id = %previous.id, "overwrote existing node record");
        }
        Ok(())
    }

    /// Connect two existing nodes in both directions.
    pub fn add_edge(&mut self, from: &str, to: &str, weight: f64, danger_level: u8) -> Result<()> {
        self.node(from)?;
        self.node(to)?;

        if from == to {
            return Err(Error::invalid_edge(from, to, "edge endpoints must differ"));
        }
        if !weight.is_finite() || weight <= 0.0 {
            return Err(Error::invalid_edge(
                from,
                to,
                format!("weight must be a positive finite number, got {weight}"),
            ));
        }
        if danger_level > MAX_DANGER_LEVEL {
            return Err(Error::invalid_edge(
                from,
                to,
                format!("danger level {danger_level} exceeds maximum of {MAX_DANGER_LEVEL}"),
            ));
        }

        self.adjacency
            .entry(from.to_string())
            .or_default()
            .push(Neighbor {
                target: to.to_string(),
                weight,
                danger_level,
            });
        self.adjacency
            .entry(to.to_string())
            .or_default()
            .push(Neighbor {
                target: from.to_string(),
                weight,
                danger_level,
            });

        debug!(from, to, weight, danger_level, "added edge");
        Ok(())
    }

    /// Lookup a node record by id.
    pub fn node(&self, id: &str) -> Result<&Node> {
        self.nodes.get(id).ok_or_else(|| self.unknown_node(id))
    }

    /// Return the adjacency entries of `id` in insertion order.
    pub fn neighbors(&self, id: &str) -> Result<&[Neighbor]> {
        self.node(id)?;
        Ok(self
            .adjacency
            .get(id)
            .map(Vec::as_slice)
            .unwrap_or(&[]))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    /// All node records in no particular order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum::<usize>() / 2
    }

    /// Nodes flagged safe, ordered by id.
    pub fn safe_nodes(&self) -> Vec<&Node> {
        let mut safe: Vec<&Node> = self.nodes.values().filter(|node| node.is_safe).collect();
        safe.sort_by(|a, b| a.id.cmp(&b.id));
        safe
    }

    /// Case-insensitive lookup by display name. When several nodes share a
    /// name the one with the smallest id wins.
    pub fn find_by_name(&self, name: &str) -> Option<&Node> {
        let needle = name.to_lowercase();
        self.nodes
            .values()
            .filter(|node| node.name.to_lowercase() == needle)
            .min_by(|a, b| a.id.cmp(&b.id))
    }

    /// Resolve user input to a node: exact id first, then display name.
    pub fn resolve(&self, query: &str) -> Result<&Node> {
        if let Some(node) = self.nodes.get(query) {
            return Ok(node);
        }
        self.find_by_name(query)
            .ok_or_else(|| self.unknown_node(query))
    }

    /// Build an [`Error::UnknownNode`] with close matches for `id`.
    pub(crate) fn unknown_node(&self, id: &str) -> Error {
        Error::UnknownNode {
            id: id.to_string(),
            suggestions: self.suggestions(id),
        }
    }

    fn suggestions(&self, query: &str) -> Vec<String> {
        let needle = query.to_lowercase();
        let mut scored: Vec<(f64, &str)> = self
            .nodes
            .values()
            .filter_map(|node| {
                let by_id = strsim::jaro_winkler(&needle, &node.id.to_lowercase());
                let by_name = strsim::jaro_winkler(&needle, &node.name.to_lowercase());
                let score = by_id.max(by_name);
                (score >= SUGGESTION_THRESHOLD).then_some((score, node.id.as_str()))
            })
            .collect();

        scored.sort_by(|a, b| {
            b.0.partial_cmp(&a.0)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.1.cmp(b.1))
        });
        scored
            .into_iter()
            .take(MAX_SUGGESTIONS)
            .map(|(_, id)| id.to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(id: &str, is_safe: bool, danger_level: u8) -> Node {
        Node::new(id, id.to_uppercase(), Coordinates::default(), is_safe, danger_level)
    }

    #[test]
    fn haversine_matches_known_distance() {
        // One degree of latitude is roughly 111.2 km.
        let a = Coordinates::new(30.0, 78.0);
        let b = Coordinates::new(31.0, 78.0);
        let meters = a.distance_to(&b);
        assert!((meters - 111_195.0).abs() < 100.0, "got {meters}");
        assert_eq!(a.distance_to(&a), 0.0);
    }

    #[test]
    fn display_name_falls_back_to_id() {
        let unnamed = Node::new("x", "", Coordinates::default(), true, 0);
        assert_eq!(unnamed.display_name(), "x");
        assert_eq!(node("y", true, 0).display_name(), "Y");
    }

    #[test]
    fn rejects_out_of_range_node_danger() {
        let mut graph = RiskGraph::new();
        let error = graph.add_node(node("a", false, 11)).expect_err("danger too high");
        assert!(matches!(error, Error::InvalidNode { .. }));
        assert_eq!(graph.node_count(), 0);
    }

    #[test]
    fn rejects_safe_node_above_ceiling() {
        let mut graph = RiskGraph::new();
        graph
            .add_node(node("ok", true, SAFE_DANGER_CEILING))
            .expect("ceiling is allowed");
        let error = graph
            .add_node(node("bad", true, SAFE_DANGER_CEILING + 1))
            .expect_err("safe flag contradicts danger");
        assert!(error.to_string().contains("safe ceiling"));
        assert!(!graph.contains("bad"));
    }

    #[test]
    fn self_loop_is_rejected() {
        let mut graph = RiskGraph::new();
        graph.add_node(node("a", true, 0)).unwrap();
        let error = graph.add_edge("a", "a", 1.0, 0).expect_err("self loop");
        assert!(matches!(error, Error::InvalidEdge { .. }));
        assert!(graph.neighbors("a").unwrap().is_empty());
    }

    #[test]
    fn suggestions_rank_closest_first() {
        let mut graph = RiskGraph::new();
        for id in ["paltan", "parade", "isbt"] {
            graph.add_node(node(id, false, 1)).unwrap();
        }
        let error = graph.node("paltn").expect_err("typo");
        match error {
            Error::UnknownNode { suggestions, .. } => {
                assert_eq!(suggestions.first().map(String::as_str), Some("paltan"));
                assert!(!suggestions.contains(&"isbt".to_string()));
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
