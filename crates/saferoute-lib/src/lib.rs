//! SafeRoute library entry points.
//!
//! This crate owns the in-memory risk graph (locations joined by weighted,
//! danger-rated roads) and the search that balances travelled distance against
//! accumulated danger. Front ends (the CLI, map renderers) build a graph, ask
//! for a route, and render the returned node ids by looking each one up again.
//!

#![deny(warnings)]

pub mod demo;
pub mod error;
pub mod evacuation;
pub mod graph;
pub mod output;
pub mod path;
pub mod seed;
pub mod shared;

pub use demo::demo_city;
pub use error::{Error, Result};
pub use evacuation::{assess_location, plan_evacuation, Evacuation, RiskBand, SafetyAssessment};
pub use graph::{Coordinates, Neighbor, Node, RiskGraph, MAX_DANGER_LEVEL, SAFE_DANGER_CEILING};
pub use output::{RouteStep, RouteSummary};
pub use path::{
    explore, find_path, CostWeights, PathFinder, PathResult, RouteOutcome, SearchOptions,
    SearchTree,
};
pub use seed::{EdgeSeed, GraphSeed};
pub use shared::SharedGraph;
