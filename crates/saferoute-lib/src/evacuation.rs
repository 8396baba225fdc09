//! Risk classification for single locations and evacuation to the best
//! reachable refuge.

use std::cmp::Ordering;
use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::error::Result;
use crate::graph::{Node, RiskGraph, SAFE_DANGER_CEILING};
use crate::path::{CostWeights, PathFinder, PathResult};

const MODERATE_DANGER_CEILING: u8 = 7;

/// Coarse risk bucket for a danger level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskBand {
    Low,
    Moderate,
    High,
}

impl RiskBand {
    pub fn from_danger(level: u8) -> Self {
        if level <= SAFE_DANGER_CEILING {
            RiskBand::Low
        } else if level <= MODERATE_DANGER_CEILING {
            RiskBand::Moderate
        } else {
            RiskBand::High
        }
    }

    /// Advice shown for an unsafe location in this band.
    pub fn advisory(self) -> &'static str {
        match self {
            RiskBand::Low => "Relatively safe area. Stay alert for any changes.",
            RiskBand::Moderate => "Moderate risk area. Consider moving somewhere safer soon.",
            RiskBand::High => "High risk area. Evacuate to the nearest safe location immediately.",
        }
    }
}

impl fmt::Display for RiskBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            RiskBand::Low => "low",
            RiskBand::Moderate => "moderate",
            RiskBand::High => "high",
        };
        f.write_str(value)
    }
}

/// Closest other safe location by straight-line distance.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Refuge {
    pub id: String,
    pub name: String,
    pub straight_line_meters: f64,
}

/// Safety status of a single location.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SafetyAssessment {
    pub id: String,
    pub name: String,
    pub is_safe: bool,
    pub danger_level: u8,
    pub band: RiskBand,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nearest_refuge: Option<Refuge>,
}

/// Route from a location to the refuge with the lowest composite cost.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Evacuation {
    pub refuge: String,
    pub route: PathResult,
}

/// Classify `id` and find the closest other refuge as the crow flies.
pub fn assess_location(graph: &RiskGraph, id: &str) -> Result<SafetyAssessment> {
    let node = graph.node(id)?;
    let band = RiskBand::from_danger(node.danger_level);
    let message = if node.is_safe {
        "Safe location. No immediate threats detected.".to_string()
    } else {
        band.advisory().to_string()
    };

    Ok(SafetyAssessment {
        id: node.id.clone(),
        name: node.display_name().to_string(),
        is_safe: node.is_safe,
        danger_level: node.danger_level,
        band,
        message,
        nearest_refuge: nearest_refuge(graph, node),
    })
}

fn nearest_refuge(graph: &RiskGraph, from: &Node) -> Option<Refuge> {
    graph
        .safe_nodes()
        .into_iter()
        .filter(|candidate| candidate.id != from.id)
        .map(|candidate| {
            let meters = from.coordinates.distance_to(&candidate.coordinates);
            (candidate, meters)
        })
        .min_by(|a, b| a.1.total_cmp(&b.1).then_with(|| a.0.id.cmp(&b.0.id)))
        .map(|(candidate, meters)| Refuge {
            id: candidate.id.clone(),
            name: candidate.display_name().to_string(),
            straight_line_meters: meters,
        })
}

/// Route from `start` to the reachable safe node with the lowest composite
/// score. The start node never counts as its own refuge. Returns `None` when
/// no other refuge is reachable.
pub fn plan_evacuation(
    graph: &RiskGraph,
    start: &str,
    weights: Option<CostWeights>,
) -> Result<Option<Evacuation>> {
    let tree = PathFinder::with_weights(weights.unwrap_or_default()).explore(graph, start)?;

    let best = graph
        .safe_nodes()
        .into_iter()
        .filter(|refuge| refuge.id != start)
        .filter_map(|refuge| tree.label(&refuge.id).map(|label| (refuge, label.score)))
        .min_by(|a, b| {
            a.1.partial_cmp(&b.1)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.0.id.cmp(&b.0.id))
        });

    let Some((refuge, _)) = best else {
        debug!(start, "no refuge reachable");
        return Ok(None);
    };

    let route = tree.path_to(&refuge.id).into_found();
    Ok(route.map(|route| {
        debug!(start, refuge = %refuge.id, distance = route.distance, "evacuation planned");
        Evacuation {
            refuge: refuge.id.clone(),
            route,
        }
    }))
}
