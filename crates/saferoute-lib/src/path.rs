//! Safest-shortest path search.
//!
//! The search is Dijkstra's algorithm over a composite cost: every candidate
//! path is ranked by `distance * w_d + safety * w_s`, where `safety` is the
//! start node's danger plus the danger of every edge and every node entered
//! along the way. Both terms only grow along a path, so the first time a node
//! leaves the frontier its label is final.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};

use serde::Serialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::graph::RiskGraph;

/// Relative weighting of travelled distance against accumulated danger.
///
/// The two components do not need to sum to one, but conventionally do.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CostWeights {
    pub distance: f64,
    pub safety: f64,
}

impl Default for CostWeights {
    fn default() -> Self {
        Self {
            distance: 0.7,
            safety: 0.3,
        }
    }
}

impl CostWeights {
    /// Validated constructor.
    pub fn new(distance: f64, safety: f64) -> Result<Self> {
        let weights = Self { distance, safety };
        weights.validate()?;
        Ok(weights)
    }

    /// Rank paths by physical distance only.
    pub fn shortest() -> Self {
        Self {
            distance: 1.0,
            safety: 0.0,
        }
    }

    /// Rank paths by accumulated danger only.
    pub fn safest() -> Self {
        Self {
            distance: 0.0,
            safety: 1.0,
        }
    }

    pub fn validate(&self) -> Result<()> {
        for (label, value) in [("distance", self.distance), ("safety", self.safety)] {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::InvalidWeights {
                    reason: format!("{label} weight must be a non-negative finite number, got {value}"),
                });
            }
        }
        if self.distance == 0.0 && self.safety == 0.0 {
            return Err(Error::InvalidWeights {
                reason: "at least one weight must be positive".to_string(),
            });
        }
        Ok(())
    }

    /// Composite score of a path with the given totals. A zero-weighted
    /// component contributes nothing, even when its total is infinite.
    pub fn score(&self, distance: f64, safety: f64) -> f64 {
        weighted(distance, self.distance) + weighted(safety, self.safety)
    }
}

fn weighted(total: f64, weight: f64) -> f64 {
    if weight == 0.0 {
        0.0
    } else {
        total * weight
    }
}

/// Options controlling a single search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchOptions {
    pub weights: CostWeights,
    /// Stop as soon as the destination leaves the frontier.
    pub early_exit: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            weights: CostWeights::default(),
            early_exit: true,
        }
    }
}

/// A route from start to goal, both inclusive.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathResult {
    pub path: Vec<String>,
    pub distance: f64,
    pub safety_score: f64,
    pub score: f64,
}

impl PathResult {
    /// Number of edges travelled.
    pub fn hop_count(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// Outcome of a search between two known nodes.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RouteOutcome {
    Found(PathResult),
    Unreachable { start: String, goal: String },
}

impl RouteOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self, RouteOutcome::Found(_))
    }

    pub fn as_found(&self) -> Option<&PathResult> {
        match self {
            RouteOutcome::Found(result) => Some(result),
            RouteOutcome::Unreachable { .. } => None,
        }
    }

    pub fn into_found(self) -> Option<PathResult> {
        match self {
            RouteOutcome::Found(result) => Some(result),
            RouteOutcome::Unreachable { .. } => None,
        }
    }
}

/// Best known totals for a node.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub distance: f64,
    pub safety: f64,
    pub score: f64,
    pub predecessor: Option<String>,
}

/// Settled labels produced by a search from a single start node.
#[derive(Debug, Clone)]
pub struct SearchTree {
    start: String,
    weights: CostWeights,
    labels: HashMap<String, Label>,
    settled: HashSet<String>,
}

impl SearchTree {
    pub fn start(&self) -> &str {
        &self.start
    }

    pub fn weights(&self) -> CostWeights {
        self.weights
    }

    /// Final label for `id`, if the search settled it.
    pub fn label(&self, id: &str) -> Option<&Label> {
        if self.settled.contains(id) {
            self.labels.get(id)
        } else {
            None
        }
    }

    pub fn is_reached(&self, id: &str) -> bool {
        self.settled.contains(id)
    }

    /// Ids of all settled nodes, ordered by id.
    pub fn reached(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.settled.iter().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    /// Walk predecessor links back from `goal`.
    pub fn path_to(&self, goal: &str) -> RouteOutcome {
        let Some(label) = self.label(goal) else {
            return RouteOutcome::Unreachable {
                start: self.start.clone(),
                goal: goal.to_string(),
            };
        };

        let mut path = vec![goal.to_string()];
        let mut current = label.predecessor.as_deref();
        while let Some(node) = current {
            path.push(node.to_string());
            current = self
                .labels
                .get(node)
                .and_then(|label| label.predecessor.as_deref());
        }
        path.reverse();

        RouteOutcome::Found(PathResult {
            path,
            distance: label.distance,
            safety_score: label.safety,
            score: label.score,
        })
    }
}

/// Stateless search strategy configured with [`SearchOptions`].
#[derive(Debug, Clone, Copy, Default)]
pub struct PathFinder {
    options: SearchOptions,
}

impl PathFinder {
    pub fn new(options: SearchOptions) -> Self {
        Self { options }
    }

    pub fn with_weights(weights: CostWeights) -> Self {
        Self::new(SearchOptions {
            weights,
            ..SearchOptions::default()
        })
    }

    pub fn options(&self) -> SearchOptions {
        self.options
    }

    /// Find the lowest composite-cost path from `start` to `goal`.
    pub fn find_path(&self, graph: &RiskGraph, start: &str, goal: &str) -> Result<RouteOutcome> {
        graph.node(start)?;
        graph.node(goal)?;

        let stop_at = self.options.early_exit.then_some(goal);
        let tree = self.search(graph, start, stop_at)?;
        let outcome = tree.path_to(goal);

        match &outcome {
            RouteOutcome::Found(result) => debug!(
                start,
                goal,
                hops = result.hop_count(),
                distance = result.distance,
                safety = result.safety_score,
                "route found"
            ),
            RouteOutcome::Unreachable { .. } => debug!(start, goal, "destination unreachable"),
        }
        Ok(outcome)
    }

    /// Settle every node reachable from `start`.
    pub fn explore(&self, graph: &RiskGraph, start: &str) -> Result<SearchTree> {
        self.search(graph, start, None)
    }

    fn search(&self, graph: &RiskGraph, start: &str, stop_at: Option<&str>) -> Result<SearchTree> {
        let weights = self.options.weights;
        weights.validate()?;
        let start_node = graph.node(start)?;

        let mut labels: HashMap<String, Label> = HashMap::new();
        let mut settled: HashSet<String> = HashSet::new();
        let mut frontier = BinaryHeap::new();

        let start_safety = f64::from(start_node.danger_level);
        let start_score = weights.score(0.0, start_safety);
        labels.insert(
            start.to_string(),
            Label {
                distance: 0.0,
                safety: start_safety,
                score: start_score,
                predecessor: None,
            },
        );
        frontier.push(FrontierEntry::new(start.to_string(), start_score));

        while let Some(entry) = frontier.pop() {
            if !settled.insert(entry.node.clone()) {
                continue;
            }
            if stop_at == Some(entry.node.as_str()) {
                break;
            }

            let (distance, safety) = match labels.get(&entry.node) {
                Some(label) => (label.distance, label.safety),
                None => continue,
            };

            for edge in graph.neighbors(&entry.node)? {
                if settled.contains(&edge.target) {
                    continue;
                }
                let target = graph.node(&edge.target)?;

                let candidate_distance = distance + edge.weight;
                if !candidate_distance.is_finite() {
                    // Overflowed past f64::MAX; no valid route continues this way.
                    continue;
                }
                let candidate_safety =
                    safety + f64::from(edge.danger_level) + f64::from(target.danger_level);
                let candidate_score = weights.score(candidate_distance, candidate_safety);

                let improves = labels
                    .get(&edge.target)
                    .is_none_or(|current| candidate_score < current.score);
                if improves {
                    labels.insert(
                        edge.target.clone(),
                        Label {
                            distance: candidate_distance,
                            safety: candidate_safety,
                            score: candidate_score,
                            predecessor: Some(entry.node.clone()),
                        },
                    );
                    frontier.push(FrontierEntry::new(edge.target.clone(), candidate_score));
                }
            }
        }

        debug!(start, settled = settled.len(), "search finished");
        Ok(SearchTree {
            start: start.to_string(),
            weights,
            labels,
            settled,
        })
    }
}

/// Find a route with default early exit. `weights` falls back to 0.7 / 0.3.
pub fn find_path(
    graph: &RiskGraph,
    start: &str,
    goal: &str,
    weights: Option<CostWeights>,
) -> Result<RouteOutcome> {
    PathFinder::with_weights(weights.unwrap_or_default()).find_path(graph, start, goal)
}

/// Run a full search from `start`. `weights` falls back to 0.7 / 0.3.
pub fn explore(graph: &RiskGraph, start: &str, weights: Option<CostWeights>) -> Result<SearchTree> {
    PathFinder::with_weights(weights.unwrap_or_default()).explore(graph, start)
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct FrontierEntry {
    node: String,
    score: FloatOrd,
}

impl FrontierEntry {
    fn new(node: String, score: f64) -> Self {
        Self {
            node,
            score: FloatOrd(score),
        }
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by score.
        other
            .score
            .cmp(&self.score)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[derive(Copy, Clone, Debug, Default)]
struct FloatOrd(f64);

impl PartialEq for FloatOrd {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FloatOrd {}

impl PartialOrd for FloatOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatOrd {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}
