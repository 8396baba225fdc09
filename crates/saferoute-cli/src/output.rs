//! Output formats for CLI results.

use std::fmt::Write;

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::Serialize;

use saferoute_lib::output::RouteRenderMode;
use saferoute_lib::{RouteSummary, SafetyAssessment};

/// How results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable, one line per step.
    #[default]
    Text,
    /// Header plus a single joined line of names.
    Compact,
    /// Pretty-printed JSON.
    Json,
}

/// Serialise any result as pretty JSON.
pub fn to_json<T: Serialize>(value: &T) -> Result<String> {
    let mut json = serde_json::to_string_pretty(value).context("failed to serialise output")?;
    json.push('\n');
    Ok(json)
}

pub fn render_summary(summary: &RouteSummary, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(summary.render(RouteRenderMode::PlainText)),
        OutputFormat::Compact => Ok(summary.render(RouteRenderMode::Compact)),
        OutputFormat::Json => to_json(summary),
    }
}

pub fn render_assessment(assessment: &SafetyAssessment, format: OutputFormat) -> Result<String> {
    if format == OutputFormat::Json {
        return to_json(assessment);
    }

    let mut buffer = String::new();
    let status = if assessment.is_safe { "safe" } else { "unsafe" };
    let _ = writeln!(
        buffer,
        "Location: {} ({})",
        assessment.name, assessment.id
    );
    let _ = writeln!(
        buffer,
        "Status: {status}, danger {}/10 ({} risk)",
        assessment.danger_level, assessment.band
    );
    let _ = writeln!(buffer, "Advice: {}", assessment.message);
    match &assessment.nearest_refuge {
        Some(refuge) => {
            let _ = writeln!(
                buffer,
                "Nearest refuge: {} ({}), {:.0} m straight-line",
                refuge.name, refuge.id, refuge.straight_line_meters
            );
        }
        None => {
            let _ = writeln!(buffer, "Nearest refuge: none");
        }
    }
    Ok(buffer)
}
