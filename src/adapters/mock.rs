//! Scripted in-memory record source for tests.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::errors::{DexError, DexResult};
use crate::domain::models::{CatalogEntry, Record};
use crate::domain::ports::RecordSource;

/// Reference prefix used for generated index entries.
const MOCK_BASE: &str = "https://mock.invalid/api/v2/pokemon";

/// Record source answering from a fixed script.
///
/// Every record added with [`with_record`](Self::with_record) is also
/// listed in the index, in insertion order. Ids marked failing stay in
/// the index but answer `RecordUnavailable`; ids marked hanging never
/// answer at all.
#[derive(Debug, Default)]
pub struct MockRecordSource {
    records: HashMap<u32, Record>,
    index: Vec<CatalogEntry>,
    index_failure: Option<DexError>,
    failing_ids: HashSet<u32>,
    hanging_ids: HashSet<u32>,
    delay: Option<Duration>,
    index_calls: AtomicUsize,
    name_calls: AtomicUsize,
    fetch_log: Mutex<Vec<u32>>,
}

impl MockRecordSource {
    /// Empty source: no index entries, no records.
    pub fn new() -> Self {
        Self::default()
    }

    /// Source listing `count` generated records with ids `1..=count`.
    pub fn with_generated(count: u32) -> Self {
        (1..=count).fold(Self::new(), |source, id| {
            source.with_record(Record::new(id, format!("record-{id}")))
        })
    }

    /// Add `record` to both the index and the detail store.
    pub fn with_record(mut self, record: Record) -> Self {
        self.index.push(CatalogEntry::new(
            record.name.clone(),
            format!("{MOCK_BASE}/{}/", record.id),
        ));
        self.records.insert(record.id, record);
        self
    }

    /// Record reachable by id or name but absent from the index.
    pub fn with_unlisted_record(mut self, record: Record) -> Self {
        self.records.insert(record.id, record);
        self
    }

    /// Append a raw index entry, e.g. one with a malformed reference.
    pub fn with_index_entry(mut self, entry: CatalogEntry) -> Self {
        self.index.push(entry);
        self
    }

    /// Make detail fetches for `id` fail with a transport error.
    pub fn with_failing_id(mut self, id: u32) -> Self {
        self.failing_ids.insert(id);
        self
    }

    /// Make detail fetches for `id` never complete.
    pub fn with_hanging_id(mut self, id: u32) -> Self {
        self.hanging_ids.insert(id);
        self
    }

    /// Make the index request fail with `error`.
    pub fn with_index_failure(mut self, error: DexError) -> Self {
        self.index_failure = Some(error);
        self
    }

    /// Delay applied to every detail fetch.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Number of index requests served.
    pub fn index_calls(&self) -> usize {
        self.index_calls.load(Ordering::SeqCst)
    }

    /// Number of by-name requests served.
    pub fn name_calls(&self) -> usize {
        self.name_calls.load(Ordering::SeqCst)
    }

    /// Ids requested through `fetch_by_id`, in request order.
    pub async fn fetched_ids(&self) -> Vec<u32> {
        self.fetch_log.lock().await.clone()
    }

    /// Number of detail fetches issued for `id`.
    pub async fn fetch_count(&self, id: u32) -> usize {
        self.fetch_log
            .lock()
            .await
            .iter()
            .filter(|&&fetched| fetched == id)
            .count()
    }
}

#[async_trait]
impl RecordSource for MockRecordSource {
    async fn fetch_index(&self, limit: u32, offset: u32) -> DexResult<Vec<CatalogEntry>> {
        self.index_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(error) = &self.index_failure {
            return Err(error.clone());
        }
        Ok(self
            .index
            .iter()
            .skip(offset as usize)
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn fetch_by_id(&self, id: u32) -> DexResult<Record> {
        self.fetch_log.lock().await.push(id);

        if self.hanging_ids.contains(&id) {
            std::future::pending::<()>().await;
        }
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if self.failing_ids.contains(&id) {
            return Err(DexError::unavailable(id, "HTTP 500"));
        }
        self.records
            .get(&id)
            .cloned()
            .ok_or_else(|| DexError::unavailable(id, "HTTP 404"))
    }

    async fn fetch_by_name(&self, name: &str) -> DexResult<Record> {
        self.name_calls.fetch_add(1, Ordering::SeqCst);
        let name = name.to_lowercase();
        self.records
            .values()
            .find(|record| record.name == name)
            .cloned()
            .ok_or_else(|| DexError::unavailable(name, "HTTP 404"))
    }
}
