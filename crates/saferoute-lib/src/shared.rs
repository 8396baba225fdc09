//! Graph handle for sharing one graph between threads.
//!
//! Readers take an immutable snapshot and search it without holding any lock.
//! Writers apply a batch of mutations to a private copy and publish it in one
//! step, so a search never observes a half-applied update.

use std::sync::{Arc, PoisonError, RwLock};

use tracing::debug;

use crate::error::Result;
use crate::graph::RiskGraph;

/// Cheaply cloneable copy-on-write graph handle.
#[derive(Debug, Clone, Default)]
pub struct SharedGraph {
    inner: Arc<RwLock<Arc<RiskGraph>>>,
}

impl SharedGraph {
    pub fn new(graph: RiskGraph) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Arc::new(graph))),
        }
    }

    /// Current published graph.
    pub fn snapshot(&self) -> Arc<RiskGraph> {
        // The lock only guards an Arc swap, so a poisoned lock still holds a
        // complete graph.
        let guard = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&guard)
    }

    /// Apply `mutate` to a copy of the current graph and publish the copy if
    /// it succeeds. On error the published graph is left untouched.
    pub fn update<T>(&self, mutate: impl FnOnce(&mut RiskGraph) -> Result<T>) -> Result<T> {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        let mut next = RiskGraph::clone(&guard);
        let value = mutate(&mut next)?;
        debug!(
            nodes = next.node_count(),
            edges = next.edge_count(),
            "published graph update"
        );
        *guard = Arc::new(next);
        Ok(value)
    }
}

impl From<RiskGraph> for SharedGraph {
    fn from(graph: RiskGraph) -> Self {
        Self::new(graph)
    }
}
