//! JSON seed documents used to build a graph from user-supplied data.
//!
//! A seed lists nodes and undirected edges:
//!
//! ```json
//! {
//!   "nodes": [
//!     { "id": "a", "name": "Alpha", "lat": 30.1, "lng": 78.0, "isSafe": true, "dangerLevel": 0 }
//!   ],
//!   "edges": [
//!     { "from": "a", "to": "b", "weight": 120.0, "dangerLevel": 2 }
//!   ]
//! }
//! ```

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::graph::{Node, RiskGraph};

/// Undirected edge as written in a seed document.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeSeed {
    pub from: String,
    pub to: String,
    pub weight: f64,
    pub danger_level: u8,
}

/// Nodes and edges to load into a fresh [`RiskGraph`].
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GraphSeed {
    pub nodes: Vec<Node>,
    #[serde(default)]
    pub edges: Vec<EdgeSeed>,
}

impl GraphSeed {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|source| Error::SeedRead {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "loaded graph seed");
        Self::from_json_str(&contents)
    }

    /// Build a graph, applying the same validation as the mutation API. The
    /// first invalid node or edge aborts the build.
    pub fn build(&self) -> Result<RiskGraph> {
        let mut graph = RiskGraph::new();
        let mut seen = HashSet::new();
        for node in &self.nodes {
            if !seen.insert(node.id.as_str()) {
                warn!(id = %node.id, "seed lists node more than once; keeping the last record");
            }
            graph.add_node(node.clone())?;
        }
        for edge in &self.edges {
            graph.add_edge(&edge.from, &edge.to, edge.weight, edge.danger_level)?;
        }
        debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "built graph from seed"
        );
        Ok(graph)
    }
}
