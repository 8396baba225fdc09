use std::path::PathBuf;

use thiserror::Error;

/// Convenient result alias for the SafeRoute library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// An operation referenced a node id that is not part of the graph.
    #[error("unknown node: {id}{}", format_suggestions(.suggestions))]
    UnknownNode {
        id: String,
        suggestions: Vec<String>,
    },

    /// Raised when an edge has a non-positive weight, an out-of-range danger
    /// level, or joins a node to itself.
    #[error("invalid edge {from} -> {to}: {reason}")]
    InvalidEdge {
        from: String,
        to: String,
        reason: String,
    },

    /// Raised when a node record fails validation.
    #[error("invalid node {id}: {reason}")]
    InvalidNode { id: String, reason: String },

    /// Raised when the composite cost weighting cannot rank paths.
    #[error("invalid cost weights: {reason}")]
    InvalidWeights { reason: String },

    /// Raised when rendering a route that lacks any nodes.
    #[error("route was empty")]
    EmptyRoute,

    /// Raised when a graph seed file could not be read.
    #[error("failed to read graph seed from {path}")]
    SeedRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Wrapper for JSON seed parsing errors.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Build an [`Error::InvalidEdge`] from anything printable.
    pub(crate) fn invalid_edge(from: &str, to: &str, reason: impl Into<String>) -> Self {
        Error::InvalidEdge {
            from: from.to_string(),
            to: to.to_string(),
            reason: reason.into(),
        }
    }

    /// Build an [`Error::InvalidNode`].
    pub(crate) fn invalid_node(id: &str, reason: impl Into<String>) -> Self {
        Error::InvalidNode {
            id: id.to_string(),
            reason: reason.into(),
        }
    }
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}
