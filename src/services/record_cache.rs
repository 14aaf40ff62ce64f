//! Read-through / write-through record cache keyed by numeric id.
//!
//! Each id owns a slot holding a [`OnceCell`]. A successful fetch fills
//! the cell exactly once and the record is immutable from then on. A
//! failed fetch leaves the cell empty so a later call may retry. Two
//! callers racing on the same id share the slot, so only one fetcher runs
//! at a time and a record is fetched at most once per cache.
//!
//! Nothing is ever evicted: the catalog is bounded and the cache lives
//! for one session.

use std::collections::HashMap;
use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use serde::Serialize;
use tokio::sync::{OnceCell, RwLock};
use tracing::debug;

use crate::domain::errors::DexResult;
use crate::domain::models::Record;

type Slot = Arc<OnceCell<Arc<Record>>>;

/// Where a resolved record came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheOutcome {
    /// Served from the cache; the fetcher was not invoked.
    Hit,
    /// Fetched remotely and stored.
    Fetched,
}

/// Counters exposed for observability.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    /// Lookups served without invoking a fetcher.
    pub hits: u64,
    /// Lookups that ran a fetcher to completion.
    pub misses: u64,
    /// Records currently cached.
    pub entries: usize,
}

/// Shared id-keyed record memo with at-most-once fetch per id.
#[derive(Debug, Default)]
pub struct RecordCache {
    slots: RwLock<HashMap<u32, Slot>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl RecordCache {
    /// Empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached record for `id`, if any.
    pub async fn get(&self, id: u32) -> Option<Arc<Record>> {
        self.slots
            .read()
            .await
            .get(&id)
            .and_then(|slot| slot.get().cloned())
    }

    /// Store `record` under `id`.
    ///
    /// Records are immutable once cached: if `id` already holds a record
    /// the new one is discarded and the existing one returned. A fetch
    /// already in flight for `id` is awaited first; `record` is stored
    /// only if that fetch fails.
    pub async fn put(&self, id: u32, record: Record) -> Arc<Record> {
        let slot = self.slot(id).await;
        let mut stored = false;
        let record = slot
            .get_or_init(|| {
                stored = true;
                async move { Arc::new(record) }
            })
            .await;
        if stored {
            debug!(id, "cached record");
        }
        Arc::clone(record)
    }

    /// Cached record for `id`, invoking `fetcher` and storing its result
    /// on a miss. A failed fetch stores nothing.
    pub async fn get_or_fetch<F, Fut>(&self, id: u32, fetcher: F) -> DexResult<Arc<Record>>
    where
        F: FnOnce(u32) -> Fut,
        Fut: Future<Output = DexResult<Record>>,
    {
        self.resolve(id, fetcher).await.map(|(record, _)| record)
    }

    /// Like [`get_or_fetch`](Self::get_or_fetch), also reporting whether
    /// the record came from the cache.
    pub async fn resolve<F, Fut>(
        &self,
        id: u32,
        fetcher: F,
    ) -> DexResult<(Arc<Record>, CacheOutcome)>
    where
        F: FnOnce(u32) -> Fut,
        Fut: Future<Output = DexResult<Record>>,
    {
        let slot = self.slot(id).await;

        if let Some(record) = slot.get() {
            self.hits.fetch_add(1, Ordering::Relaxed);
            debug!(id, "cache hit");
            return Ok((Arc::clone(record), CacheOutcome::Hit));
        }

        let mut fetched = false;
        let record = slot
            .get_or_try_init(|| {
                fetched = true;
                let pending = fetcher(id);
                async move { pending.await.map(Arc::new) }
            })
            .await?;

        if fetched {
            self.misses.fetch_add(1, Ordering::Relaxed);
            debug!(id, "cached record");
            Ok((Arc::clone(record), CacheOutcome::Fetched))
        } else {
            // Another caller filled the slot while we waited.
            self.hits.fetch_add(1, Ordering::Relaxed);
            debug!(id, "cache hit");
            Ok((Arc::clone(record), CacheOutcome::Hit))
        }
    }

    /// Number of cached records.
    pub async fn len(&self) -> usize {
        self.slots
            .read()
            .await
            .values()
            .filter(|slot| slot.initialized())
            .count()
    }

    /// True when no record is cached.
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Snapshot of the hit/miss counters and entry count.
    pub async fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            entries: self.len().await,
        }
    }

    async fn slot(&self, id: u32) -> Slot {
        if let Some(slot) = self.slots.read().await.get(&id) {
            return Arc::clone(slot);
        }
        Arc::clone(self.slots.write().await.entry(id).or_default())
    }
}
