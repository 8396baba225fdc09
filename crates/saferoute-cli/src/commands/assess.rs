use anyhow::{Context, Result};

use saferoute_lib::{assess_location, RiskGraph};

use crate::output::{render_assessment, OutputFormat};

/// Handle the `assess` subcommand.
pub fn handle_assess(graph: &RiskGraph, at: &str, format: OutputFormat) -> Result<()> {
    let node = graph.resolve(at).context("failed to resolve --at location")?;
    let assessment = assess_location(graph, &node.id)?;
    print!("{}", render_assessment(&assessment, format)?);
    Ok(())
}
