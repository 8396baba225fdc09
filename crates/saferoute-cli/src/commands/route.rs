//! Route command handler for computing a path between two locations.

use std::process::ExitCode;

use anyhow::{Context, Result};

use saferoute_lib::output::RouteOutputKind;
use saferoute_lib::{CostWeights, PathFinder, RiskGraph, RouteOutcome, RouteSummary};

use crate::commands::no_route;
use crate::output::{render_summary, to_json, OutputFormat};

/// Arguments for the route command.
#[derive(Debug, Clone)]
pub struct RouteCommandArgs {
    /// Starting location id or name.
    pub from: String,
    /// Destination location id or name.
    pub to: String,
}

/// Handle the `route` subcommand.
pub fn handle_route(
    graph: &RiskGraph,
    args: &RouteCommandArgs,
    weights: CostWeights,
    format: OutputFormat,
) -> Result<ExitCode> {
    let start = graph
        .resolve(&args.from)
        .context("failed to resolve --from location")?;
    let goal = graph
        .resolve(&args.to)
        .context("failed to resolve --to location")?;

    let outcome = PathFinder::with_weights(weights)
        .find_path(graph, &start.id, &goal.id)
        .context("route search failed")?;

    match outcome {
        RouteOutcome::Found(result) => {
            let summary = RouteSummary::from_result(RouteOutputKind::Route, graph, &result, weights)
                .context("failed to build route summary")?;
            print!("{}", render_summary(&summary, format)?);
            Ok(ExitCode::SUCCESS)
        }
        unreachable @ RouteOutcome::Unreachable { .. } => {
            if format == OutputFormat::Json {
                print!("{}", to_json(&unreachable)?);
            } else {
                println!(
                    "No route found from {} to {}",
                    start.display_name(),
                    goal.display_name()
                );
            }
            Ok(no_route())
        }
    }
}
