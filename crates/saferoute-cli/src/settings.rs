//! Resolution of global CLI options into library inputs.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use tracing::{debug, info};

use saferoute_lib::{demo_city, CostWeights, GraphSeed, RiskGraph};

/// Named presets for the composite cost weighting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum RouteMode {
    /// 0.7 distance / 0.3 danger.
    #[default]
    Balanced,
    /// Distance only.
    Shortest,
    /// Danger only.
    Safest,
}

impl RouteMode {
    fn weights(self) -> CostWeights {
        match self {
            RouteMode::Balanced => CostWeights::default(),
            RouteMode::Shortest => CostWeights::shortest(),
            RouteMode::Safest => CostWeights::safest(),
        }
    }
}

/// Options shaping the composite cost metric.
#[derive(Args, Debug, Clone, Default)]
pub struct WeightArgs {
    /// Weighting preset.
    #[arg(long, value_enum, default_value_t = RouteMode::Balanced, global = true)]
    pub mode: RouteMode,

    /// Override the distance component of the selected preset.
    #[arg(long, global = true)]
    pub distance_weight: Option<f64>,

    /// Override the danger component of the selected preset.
    #[arg(long, global = true)]
    pub safety_weight: Option<f64>,
}

impl WeightArgs {
    /// Combine the preset with explicit overrides and validate the result.
    pub fn resolve(&self) -> Result<CostWeights> {
        let preset = self.mode.weights();
        let weights = CostWeights::new(
            self.distance_weight.unwrap_or(preset.distance),
            self.safety_weight.unwrap_or(preset.safety),
        )
        .context("invalid --distance-weight/--safety-weight combination")?;
        debug!(
            distance = weights.distance,
            safety = weights.safety,
            "resolved cost weights"
        );
        Ok(weights)
    }
}

/// Load the graph from a seed file, or fall back to the built-in demo city.
pub fn load_graph(seed: Option<&Path>) -> Result<RiskGraph> {
    match seed {
        Some(path) => {
            let graph = GraphSeed::from_path(path)
                .and_then(|seed| seed.build())
                .with_context(|| format!("failed to load graph seed from {}", path.display()))?;
            info!(
                path = %path.display(),
                nodes = graph.node_count(),
                edges = graph.edge_count(),
                "loaded graph"
            );
            Ok(graph)
        }
        None => {
            debug!("no graph seed supplied; using demo city");
            Ok(demo_city())
        }
    }
}

/// Path of the seed file, if any, after argument and environment resolution.
pub fn seed_path(arg: Option<PathBuf>) -> Option<PathBuf> {
    arg.filter(|path| !path.as_os_str().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_replace_preset_components() {
        let args = WeightArgs {
            mode: RouteMode::Shortest,
            distance_weight: None,
            safety_weight: Some(0.5),
        };
        let weights = args.resolve().unwrap();
        assert_eq!(weights.distance, 1.0);
        assert_eq!(weights.safety, 0.5);
    }

    #[test]
    fn zero_weights_are_rejected() {
        let args = WeightArgs {
            mode: RouteMode::Safest,
            distance_weight: None,
            safety_weight: Some(0.0),
        };
        assert!(args.resolve().is_err());
    }

    #[test]
    fn empty_seed_path_means_demo_city() {
        assert_eq!(seed_path(Some(PathBuf::new())), None);
        assert!(load_graph(None).unwrap().contains("clockTower"));
    }
}
