//! Observability hook for hydration passes.

use crate::domain::errors::DexError;
use crate::domain::models::{CatalogEntry, HydrationSummary};

/// Receives hydration progress. Callbacks run inline on the hydrating
/// task and must not block.
pub trait HydrationObserver: Send + Sync {
    /// A catalog entry was dropped because its record could not be resolved.
    fn on_entry_dropped(&self, entry: &CatalogEntry, id: u32, error: &DexError);

    /// A hydration pass finished.
    fn on_complete(&self, summary: &HydrationSummary);
}

/// Observer that reports through `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl HydrationObserver for TracingObserver {
    fn on_entry_dropped(&self, entry: &CatalogEntry, id: u32, error: &DexError) {
        tracing::warn!(id, name = %entry.name, error = %error, "dropping catalog entry");
    }

    fn on_complete(&self, summary: &HydrationSummary) {
        tracing::info!(
            requested = summary.requested,
            hydrated = summary.hydrated,
            dropped = summary.dropped,
            cache_hits = summary.cache_hits,
            elapsed_ms = u64::try_from(summary.elapsed.as_millis()).unwrap_or(u64::MAX),
            "hydration complete"
        );
    }
}
