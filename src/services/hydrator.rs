//! Detail hydration: resolves catalog index entries into full records
//! through the record cache.
//!
//! Entries are resolved in index order. With the default concurrency of
//! one, each fetch completes before the next starts. Higher concurrency
//! keeps a bounded number of fetches in flight but still yields records
//! in index order; the cache guarantees at most one fetch per id either
//! way. An entry whose record cannot be resolved is dropped and counted,
//! never surfaced as an error.

use std::sync::Arc;
use std::time::{Duration, Instant};

use futures::stream::{self, StreamExt};
use tracing::{debug, instrument};

use crate::domain::errors::{DexError, DexResult};
use crate::domain::models::{CatalogEntry, HydrationConfig, HydrationSummary, Record};
use crate::domain::ports::{HydrationObserver, RecordSource, TracingObserver};

use super::record_cache::{CacheOutcome, RecordCache};

/// Upper bound on in-flight detail requests.
pub const MAX_CONCURRENCY: usize = 64;

/// Records produced by one hydration pass plus its counters.
#[derive(Debug, Clone, Default)]
pub struct HydrationReport {
    /// Resolved records in index order.
    pub records: Vec<Arc<Record>>,
    /// Counters for the pass.
    pub summary: HydrationSummary,
}

/// Resolves catalog entries into records through the cache.
pub struct Hydrator {
    cache: Arc<RecordCache>,
    source: Arc<dyn RecordSource>,
    observer: Arc<dyn HydrationObserver>,
    concurrency: usize,
    request_timeout: Option<Duration>,
    deadline: Option<Duration>,
}

impl Hydrator {
    /// Sequential hydrator with no deadlines, reporting through tracing.
    pub fn new(cache: Arc<RecordCache>, source: Arc<dyn RecordSource>) -> Self {
        Self {
            cache,
            source,
            observer: Arc::new(TracingObserver),
            concurrency: 1,
            request_timeout: None,
            deadline: None,
        }
    }

    /// Hydrator tuned by `hydration` settings and the per-request timeout.
    pub fn from_config(
        cache: Arc<RecordCache>,
        source: Arc<dyn RecordSource>,
        config: &HydrationConfig,
        request_timeout_secs: Option<u64>,
    ) -> Self {
        Self::new(cache, source)
            .with_concurrency(config.concurrency)
            .with_deadline(config.deadline_secs.map(Duration::from_secs))
            .with_request_timeout(request_timeout_secs.map(Duration::from_secs))
    }

    /// Report drops and pass summaries to `observer`.
    #[must_use]
    pub fn with_observer(mut self, observer: Arc<dyn HydrationObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// Clamped to `1..=MAX_CONCURRENCY`.
    #[must_use]
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.clamp(1, MAX_CONCURRENCY);
        self
    }

    /// Deadline applied to each detail fetch.
    #[must_use]
    pub fn with_request_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Deadline for a whole pass. Fetches still in flight when it elapses
    /// are abandoned; afterwards only cached records are served and every
    /// other entry is dropped.
    #[must_use]
    pub fn with_deadline(mut self, deadline: Option<Duration>) -> Self {
        self.deadline = deadline;
        self
    }

    /// The shared record cache.
    pub const fn cache(&self) -> &Arc<RecordCache> {
        &self.cache
    }

    /// Maximum requests in flight during a pass.
    pub const fn concurrency(&self) -> usize {
        self.concurrency
    }

    /// Resolve every entry of `index`, in order, dropping failures.
    #[instrument(skip_all, fields(entries = index.len(), concurrency = self.concurrency))]
    pub async fn hydrate_all(&self, index: &[CatalogEntry]) -> HydrationReport {
        let started = Instant::now();
        let deadline = self.deadline.map(|d| tokio::time::Instant::now() + d);

        let outcomes: Vec<_> = stream::iter(index)
            .map(|entry| self.resolve_entry(entry, deadline))
            .buffered(self.concurrency)
            .collect()
            .await;

        let mut report = HydrationReport {
            records: Vec::with_capacity(index.len()),
            summary: HydrationSummary {
                requested: index.len(),
                ..HydrationSummary::default()
            },
        };

        for (entry, id, outcome) in outcomes {
            match outcome {
                Ok((record, origin)) => {
                    if origin == CacheOutcome::Hit {
                        report.summary.cache_hits += 1;
                    }
                    report.records.push(record);
                }
                Err(error) => {
                    report.summary.dropped += 1;
                    self.observer.on_entry_dropped(entry, id, &error);
                }
            }
        }

        report.summary.hydrated = report.records.len();
        report.summary.elapsed = started.elapsed();
        self.observer.on_complete(&report.summary);
        report
    }

    /// Cache-first resolution of a single id.
    #[instrument(skip(self))]
    pub async fn lookup(&self, id: u32) -> DexResult<Arc<Record>> {
        if id == 0 {
            return Err(DexError::unavailable(id, "no record has id 0"));
        }
        self.cache.get_or_fetch(id, |id| self.fetch_one(id)).await
    }

    /// Fresh remote fetch by name. Names are not cache keys, so this
    /// always hits the network; the result is cached under its id.
    #[instrument(skip(self))]
    pub async fn fetch_by_name(&self, name: &str) -> DexResult<Arc<Record>> {
        let name = name.to_lowercase();
        let pending = self.source.fetch_by_name(&name);
        let record = match self.request_timeout {
            Some(limit) => tokio::time::timeout(limit, pending)
                .await
                .unwrap_or_else(|_| Err(DexError::Timeout(format!("fetch '{name}'")))),
            None => pending.await,
        }?;

        debug!(name = %name, id = record.id, "resolved by name");
        Ok(self.cache.put(record.id, record).await)
    }

    async fn resolve_entry<'a>(
        &self,
        entry: &'a CatalogEntry,
        deadline: Option<tokio::time::Instant>,
    ) -> (&'a CatalogEntry, u32, DexResult<(Arc<Record>, CacheOutcome)>) {
        let id = entry.id();
        if id == 0 {
            let error = DexError::unavailable(&entry.name, "malformed reference");
            return (entry, id, Err(error));
        }

        if let Some(at) = deadline {
            if tokio::time::Instant::now() >= at {
                // Past the deadline only cached records are still served.
                let outcome = self
                    .cache
                    .get(id)
                    .await
                    .map(|record| (record, CacheOutcome::Hit))
                    .ok_or_else(|| DexError::Timeout("hydration deadline elapsed".to_string()));
                return (entry, id, outcome);
            }
        }

        let resolving = self.cache.resolve(id, |id| self.fetch_one(id));
        let outcome = match deadline {
            Some(at) => tokio::time::timeout_at(at, resolving)
                .await
                .unwrap_or_else(|_| Err(DexError::Timeout("hydration deadline elapsed".to_string()))),
            None => resolving.await,
        };
        (entry, id, outcome)
    }

    async fn fetch_one(&self, id: u32) -> DexResult<Record> {
        let pending = self.source.fetch_by_id(id);
        match self.request_timeout {
            Some(limit) => tokio::time::timeout(limit, pending)
                .await
                .unwrap_or_else(|_| Err(DexError::Timeout(format!("fetch #{id}")))),
            None => pending.await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::MockRecordSource;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingObserver {
        dropped: Mutex<Vec<u32>>,
        summaries: Mutex<Vec<HydrationSummary>>,
    }

    impl HydrationObserver for RecordingObserver {
        fn on_entry_dropped(&self, _entry: &CatalogEntry, id: u32, _error: &DexError) {
            self.dropped.lock().unwrap().push(id);
        }

        fn on_complete(&self, summary: &HydrationSummary) {
            self.summaries.lock().unwrap().push(summary.clone());
        }
    }

    fn setup(source: MockRecordSource) -> (Hydrator, Arc<MockRecordSource>) {
        let source = Arc::new(source);
        let hydrator = Hydrator::new(Arc::new(RecordCache::new()), source.clone());
        (hydrator, source)
    }

    async fn index_of(source: &MockRecordSource) -> Vec<CatalogEntry> {
        source.fetch_index(u32::MAX, 0).await.unwrap()
    }

    #[tokio::test]
    async fn test_hydrates_in_index_order() {
        let (hydrator, source) = setup(MockRecordSource::with_generated(5));
        let index = index_of(&source).await;

        let report = hydrator.hydrate_all(&index).await;

        let ids: Vec<u32> = report.records.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
        assert_eq!(source.fetched_ids().await, vec![1, 2, 3, 4, 5]);
        assert!(report.summary.is_complete());
    }

    #[tokio::test]
    async fn test_failed_entries_are_dropped_and_reported() {
        let observer = Arc::new(RecordingObserver::default());
        let source = MockRecordSource::with_generated(6)
            .with_failing_id(2)
            .with_failing_id(5);
        let (hydrator, source) = setup(source);
        let hydrator = hydrator.with_observer(observer.clone());
        let index = index_of(&source).await;

        let report = hydrator.hydrate_all(&index).await;

        let ids: Vec<u32> = report.records.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 3, 4, 6]);
        assert_eq!(report.summary.dropped, 2);
        assert_eq!(report.summary.hydrated, 4);
        assert_eq!(*observer.dropped.lock().unwrap(), vec![2, 5]);
        assert_eq!(observer.summaries.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_malformed_reference_dropped_without_fetch() {
        let source = MockRecordSource::with_generated(2)
            .with_index_entry(CatalogEntry::new("glitch", "https://mock.invalid/pokemon/abc/"));
        let (hydrator, source) = setup(source);
        let index = index_of(&source).await;

        let report = hydrator.hydrate_all(&index).await;

        assert_eq!(report.records.len(), 2);
        assert_eq!(report.summary.dropped, 1);
        assert!(!source.fetched_ids().await.contains(&0));
    }

    #[tokio::test]
    async fn test_second_pass_served_from_cache() {
        let (hydrator, source) = setup(MockRecordSource::with_generated(3));
        let index = index_of(&source).await;

        hydrator.hydrate_all(&index).await;
        let second = hydrator.hydrate_all(&index).await;

        assert_eq!(second.summary.cache_hits, 3);
        assert_eq!(source.fetched_ids().await.len(), 3);
    }

    #[tokio::test]
    async fn test_concurrent_hydration_preserves_order() {
        let source = MockRecordSource::with_generated(20)
            .with_failing_id(7)
            .with_delay(Duration::from_millis(5));
        let (hydrator, source) = setup(source);
        let hydrator = hydrator.with_concurrency(8);
        let index = index_of(&source).await;

        let report = hydrator.hydrate_all(&index).await;

        let ids: Vec<u32> = report.records.iter().map(|r| r.id).collect();
        let expected: Vec<u32> = (1..=20).filter(|&id| id != 7).collect();
        assert_eq!(ids, expected);
        for id in 1..=20 {
            assert_eq!(source.fetch_count(id).await, 1);
        }
    }

    #[tokio::test]
    async fn test_request_timeout_drops_hung_entry() {
        let source = MockRecordSource::with_generated(3).with_hanging_id(2);
        let (hydrator, source) = setup(source);
        let hydrator = hydrator.with_request_timeout(Some(Duration::from_millis(20)));
        let index = index_of(&source).await;

        let report = hydrator.hydrate_all(&index).await;

        let ids: Vec<u32> = report.records.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 3]);
        assert!(hydrator.cache().get(2).await.is_none());
    }

    #[tokio::test]
    async fn test_deadline_drops_remaining_entries() {
        let source = MockRecordSource::with_generated(4).with_hanging_id(2);
        let (hydrator, source) = setup(source);
        let hydrator = hydrator.with_deadline(Some(Duration::from_millis(30)));
        let index = index_of(&source).await;

        let report = hydrator.hydrate_all(&index).await;

        assert_eq!(report.records.len(), 1);
        assert_eq!(report.records[0].id, 1);
        assert_eq!(report.summary.dropped, 3);
        assert_eq!(source.fetched_ids().await, vec![1, 2]);
    }

    #[tokio::test]
    async fn test_fetch_by_name_caches_under_id() {
        let source = MockRecordSource::new()
            .with_unlisted_record(Record::new(25, "pikachu").with_categories(["electric"]));
        let (hydrator, source) = setup(source);

        let record = hydrator.fetch_by_name("Pikachu").await.unwrap();
        assert_eq!(record.id, 25);

        let again = hydrator.lookup(25).await.unwrap();
        assert_eq!(again, record);
        assert!(source.fetched_ids().await.is_empty());
        assert_eq!(source.name_calls(), 1);

        hydrator.fetch_by_name("pikachu").await.unwrap();
        assert_eq!(source.name_calls(), 2);
    }

    #[tokio::test]
    async fn test_lookup_unknown_id_fails() {
        let (hydrator, _source) = setup(MockRecordSource::with_generated(1));
        assert!(hydrator.lookup(999).await.unwrap_err().is_record_unavailable());
        assert!(hydrator.lookup(0).await.is_err());
    }

    #[test]
    fn test_concurrency_clamped() {
        let (hydrator, _) = setup(MockRecordSource::new());
        assert_eq!(hydrator.with_concurrency(0).concurrency(), 1);
        let (hydrator, _) = setup(MockRecordSource::new());
        assert_eq!(hydrator.with_concurrency(1_000).concurrency(), MAX_CONCURRENCY);
    }
}
