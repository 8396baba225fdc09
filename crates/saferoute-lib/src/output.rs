use std::fmt::Write;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::evacuation::RiskBand;
use crate::graph::{Coordinates, Neighbor, RiskGraph};
use crate::path::{CostWeights, PathResult};

/// Classifies the request that produced a route summary.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RouteOutputKind {
    Route,
    Evacuation,
}

impl RouteOutputKind {
    /// Human-readable label shown in textual renderings.
    pub fn label(self) -> &'static str {
        match self {
            RouteOutputKind::Route => "Route",
            RouteOutputKind::Evacuation => "Evacuation",
        }
    }
}

/// Presentation style for turning a [`RouteSummary`] into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteRenderMode {
    /// One line per step with leg details.
    PlainText,
    /// Single line joining the step names.
    Compact,
}

/// Location visited by a route, resolved against the graph so renderers can
/// place it on a map.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteStep {
    pub index: usize,
    pub id: String,
    pub name: String,
    pub coordinates: Coordinates,
    pub danger_level: u8,
    pub band: RiskBand,
    /// Weight of the road taken to reach this step; absent for the first step.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub leg_distance: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub leg_danger: Option<u8>,
}

/// Structured representation of a route that front ends can serialise.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteSummary {
    pub kind: RouteOutputKind,
    pub weights: CostWeights,
    pub hops: usize,
    pub distance: f64,
    pub safety_score: f64,
    pub score: f64,
    pub steps: Vec<RouteStep>,
}

impl RouteSummary {
    /// Resolve every id of `result` against `graph`.
    pub fn from_result(
        kind: RouteOutputKind,
        graph: &RiskGraph,
        result: &PathResult,
        weights: CostWeights,
    ) -> Result<Self> {
        if result.path.is_empty() {
            return Err(Error::EmptyRoute);
        }

        let mut steps = Vec::with_capacity(result.path.len());
        for (index, id) in result.path.iter().enumerate() {
            let node = graph.node(id)?;
            let leg = match index.checked_sub(1) {
                Some(previous) => cheapest_leg(graph, &result.path[previous], id, weights)?,
                None => None,
            };

            steps.push(RouteStep {
                index,
                id: node.id.clone(),
                name: node.display_name().to_string(),
                coordinates: node.coordinates,
                danger_level: node.danger_level,
                band: RiskBand::from_danger(node.danger_level),
                leg_distance: leg.map(|edge| edge.weight),
                leg_danger: leg.map(|edge| edge.danger_level),
            });
        }

        Ok(Self {
            kind,
            weights,
            hops: result.hop_count(),
            distance: result.distance,
            safety_score: result.safety_score,
            score: result.score,
            steps,
        })
    }

    pub fn start(&self) -> Option<&RouteStep> {
        self.steps.first()
    }

    pub fn goal(&self) -> Option<&RouteStep> {
        self.steps.last()
    }

    /// Render the summary using the requested textual mode.
    pub fn render(&self, mode: RouteRenderMode) -> String {
        match mode {
            RouteRenderMode::PlainText => self.render_plain(),
            RouteRenderMode::Compact => self.render_compact(),
        }
    }

    fn header(&self) -> String {
        format!(
            "{}: {} -> {} ({} hops, distance: {:.0} m, safety score: {:.0}, score: {:.1})",
            self.kind.label(),
            step_name(self.start()),
            step_name(self.goal()),
            self.hops,
            self.distance,
            self.safety_score,
            self.score
        )
    }

    fn render_plain(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(buffer, "{}", self.header());
        for step in &self.steps {
            let leg = match (step.leg_distance, step.leg_danger) {
                (Some(distance), Some(danger)) => {
                    format!(" via road {distance:.0} m, danger {danger}")
                }
                _ => String::new(),
            };
            let _ = writeln!(
                buffer,
                "{:>3}: {} ({}) [danger {}, {}]{}",
                step.index, step.name, step.id, step.danger_level, step.band, leg
            );
        }
        buffer
    }

    fn render_compact(&self) -> String {
        let joined = self
            .steps
            .iter()
            .map(|step| step.name.as_str())
            .collect::<Vec<_>>()
            .join(" -> ");
        format!("{}\n{joined}\n", self.header())
    }
}

fn step_name(step: Option<&RouteStep>) -> &str {
    step.map_or("<none>", |step| step.name.as_str())
}

/// Cheapest stored edge between consecutive steps under `weights`.
fn cheapest_leg<'a>(
    graph: &'a RiskGraph,
    from: &str,
    to: &str,
    weights: CostWeights,
) -> Result<Option<&'a Neighbor>> {
    Ok(graph
        .neighbors(from)?
        .iter()
        .filter(|edge| edge.target == to)
        .min_by(|a, b| {
            let a_cost = weights.score(a.weight, f64::from(a.danger_level));
            let b_cost = weights.score(b.weight, f64::from(b.danger_level));
            a_cost.total_cmp(&b_cost)
        }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Node;
    use crate::path::find_path;

    fn corridor() -> RiskGraph {
        let mut graph = RiskGraph::new();
        graph
            .add_node(Node::new("a", "Alpha", Coordinates::new(30.0, 78.0), true, 0))
            .unwrap();
        graph
            .add_node(Node::new("b", "Bravo", Coordinates::new(30.01, 78.0), false, 5))
            .unwrap();
        graph.add_edge("a", "b", 300.0, 4).unwrap();
        // Parallel road: shorter but far more dangerous.
        graph.add_edge("a", "b", 250.0, 10).unwrap();
        graph
    }

    #[test]
    fn summary_resolves_names_and_legs() {
        let graph = corridor();
        let result = find_path(&graph, "a", "b", None)
            .unwrap()
            .into_found()
            .unwrap();
        let summary =
            RouteSummary::from_result(RouteOutputKind::Route, &graph, &result, CostWeights::default())
                .expect("summary builds");

        assert_eq!(summary.hops, 1);
        assert_eq!(summary.start().map(|step| step.name.as_str()), Some("Alpha"));
        assert_eq!(summary.goal().map(|step| step.band), Some(RiskBand::Moderate));
        assert_eq!(summary.steps[0].leg_distance, None);
        assert_eq!(summary.steps[1].leg_distance, Some(250.0));
        assert_eq!(summary.steps[1].leg_danger, Some(10));

        let safest = RouteSummary::from_result(
            RouteOutputKind::Route,
            &graph,
            &result,
            CostWeights::safest(),
        )
        .unwrap();
        assert_eq!(safest.steps[1].leg_danger, Some(4));
    }

    #[test]
    fn empty_path_is_rejected() {
        let graph = corridor();
        let empty = PathResult {
            path: Vec::new(),
            distance: 0.0,
            safety_score: 0.0,
            score: 0.0,
        };
        let error =
            RouteSummary::from_result(RouteOutputKind::Route, &graph, &empty, CostWeights::default())
                .expect_err("empty route");
        assert!(matches!(error, Error::EmptyRoute));
    }

    #[test]
    fn hand_built_summary_without_steps_renders() {
        let summary = RouteSummary {
            kind: RouteOutputKind::Route,
            weights: CostWeights::default(),
            hops: 0,
            distance: 0.0,
            safety_score: 0.0,
            score: 0.0,
            steps: Vec::new(),
        };
        assert!(summary.start().is_none());
        assert!(summary.goal().is_none());
        let plain = summary.render(RouteRenderMode::PlainText);
        assert!(plain.starts_with("Route: <none> -> <none> (0 hops"));
    }

    #[test]
    fn renders_plain_and_compact() {
        let graph = corridor();
        let result = find_path(&graph, "a", "b", None)
            .unwrap()
            .into_found()
            .unwrap();
        let summary =
            RouteSummary::from_result(RouteOutputKind::Evacuation, &graph, &result, CostWeights::default())
                .unwrap();

        let plain = summary.render(RouteRenderMode::PlainText);
        assert!(plain.starts_with("Evacuation: Alpha -> Bravo (1 hops"));
        assert!(plain.contains("  1: Bravo (b) [danger 5, moderate] via road 250 m, danger 10"));

        let compact = summary.render(RouteRenderMode::Compact);
        assert!(compact.ends_with("Alpha -> Bravo\n"));
    }
}
