//! Nodes command handler: list every location with its risk rating.

use std::fmt::Write;

use anyhow::Result;
use serde::Serialize;

use saferoute_lib::{Coordinates, RiskBand, RiskGraph};

use crate::output::{to_json, OutputFormat};

#[derive(Debug, Serialize)]
struct NodeRow<'a> {
    id: &'a str,
    name: &'a str,
    coordinates: Coordinates,
    is_safe: bool,
    danger_level: u8,
    band: RiskBand,
    roads: usize,
}

/// Handle the `nodes` subcommand.
pub fn handle_nodes(graph: &RiskGraph, safe_only: bool, format: OutputFormat) -> Result<()> {
    let mut nodes: Vec<_> = graph
        .nodes()
        .filter(|node| !safe_only || node.is_safe)
        .collect();
    nodes.sort_by(|a, b| a.id.cmp(&b.id));

    let mut rows = Vec::with_capacity(nodes.len());
    for node in nodes {
        rows.push(NodeRow {
            id: &node.id,
            name: node.display_name(),
            coordinates: node.coordinates,
            is_safe: node.is_safe,
            danger_level: node.danger_level,
            band: RiskBand::from_danger(node.danger_level),
            roads: graph.neighbors(&node.id)?.len(),
        });
    }

    if format == OutputFormat::Json {
        print!("{}", to_json(&rows)?);
        return Ok(());
    }

    let mut buffer = String::new();
    for row in &rows {
        let status = if row.is_safe { "safe" } else { "unsafe" };
        let _ = writeln!(
            buffer,
            "{:<26} {:<26} {:<6} danger {:>2} ({}), {} roads",
            row.id, row.name, status, row.danger_level, row.band, row.roads
        );
    }
    let _ = writeln!(
        buffer,
        "{} locations, {} roads",
        rows.len(),
        graph.edge_count()
    );
    print!("{buffer}");
    Ok(())
}
