//! Evacuate command handler: route to the best reachable refuge.

use std::process::ExitCode;

use anyhow::{Context, Result};

use saferoute_lib::output::RouteOutputKind;
use saferoute_lib::{plan_evacuation, CostWeights, RiskGraph, RouteSummary};

use crate::commands::no_route;
use crate::output::{render_summary, OutputFormat};

/// Handle the `evacuate` subcommand.
pub fn handle_evacuate(
    graph: &RiskGraph,
    from: &str,
    weights: CostWeights,
    format: OutputFormat,
) -> Result<ExitCode> {
    let start = graph
        .resolve(from)
        .context("failed to resolve --from location")?;

    let Some(evacuation) =
        plan_evacuation(graph, &start.id, Some(weights)).context("evacuation search failed")?
    else {
        if format == OutputFormat::Json {
            println!("null");
        } else {
            println!("No reachable refuge from {}", start.display_name());
        }
        return Ok(no_route());
    };

    let summary = RouteSummary::from_result(
        RouteOutputKind::Evacuation,
        graph,
        &evacuation.route,
        weights,
    )
    .context("failed to build evacuation summary")?;
    print!("{}", render_summary(&summary, format)?);
    Ok(ExitCode::SUCCESS)
}
