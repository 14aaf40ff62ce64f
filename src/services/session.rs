//! Catalog session: the surface handed to a rendering front-end.
//!
//! A session owns one hydrated catalog, the current filter, the derived
//! filtered view and its page cursor. The record cache is shared and may
//! outlive the session, so several sessions can reuse one cache.

use std::sync::Arc;

use tracing::{debug, info, instrument};

use crate::domain::errors::{DexError, DexResult};
use crate::domain::models::{Config, FilterCriteria, HydrationSummary, Record};
use crate::domain::ports::{HydrationObserver, RecordSource};

use super::catalog_index::CatalogIndexLoader;
use super::filter;
use super::hydrator::Hydrator;
use super::pagination::PageCursor;
use super::record_cache::RecordCache;

/// One hydrated catalog with its filter and page cursor.
pub struct CatalogSession {
    loader: CatalogIndexLoader,
    hydrator: Hydrator,
    catalog: Vec<Arc<Record>>,
    criteria: FilterCriteria,
    filtered: Vec<Arc<Record>>,
    cursor: PageCursor,
    last_summary: Option<HydrationSummary>,
}

impl CatalogSession {
    /// Session with default limits: 151 entries, sequential hydration,
    /// windows of 20.
    pub fn new(source: Arc<dyn RecordSource>, cache: Arc<RecordCache>) -> Self {
        Self::from_parts(
            CatalogIndexLoader::new(Arc::clone(&source)),
            Hydrator::new(cache, source),
            PageCursor::default(),
        )
    }

    /// Session with limits, concurrency and timeouts taken from `config`.
    pub fn from_config(
        source: Arc<dyn RecordSource>,
        cache: Arc<RecordCache>,
        config: &Config,
    ) -> Self {
        Self::from_parts(
            CatalogIndexLoader::from_config(Arc::clone(&source), &config.catalog),
            Hydrator::from_config(
                cache,
                source,
                &config.hydration,
                config.api.request_timeout_secs,
            ),
            PageCursor::new(config.catalog.page_size),
        )
    }

    /// Session over explicitly built collaborators.
    pub fn from_parts(loader: CatalogIndexLoader, hydrator: Hydrator, cursor: PageCursor) -> Self {
        Self {
            loader,
            hydrator,
            catalog: Vec::new(),
            criteria: FilterCriteria::default(),
            filtered: Vec::new(),
            cursor,
            last_summary: None,
        }
    }

    /// Report hydration drops and summaries to `observer`.
    #[must_use]
    pub fn with_observer(mut self, observer: Arc<dyn HydrationObserver>) -> Self {
        self.hydrator = self.hydrator.with_observer(observer);
        self
    }

    /// Acquire the index, hydrate it, and reset the view to the default
    /// filter at window 0.
    ///
    /// Starts from scratch every time. On failure the session is left
    /// empty; there is no partial-state resume.
    #[instrument(skip(self))]
    pub async fn initialize_catalog(&mut self) -> DexResult<&[Arc<Record>]> {
        self.clear();

        let index = self.loader.fetch().await?;
        let report = self.hydrator.hydrate_all(&index).await;
        info!(
            indexed = index.len(),
            hydrated = report.summary.hydrated,
            dropped = report.summary.dropped,
            "catalog initialized"
        );

        self.last_summary = Some(report.summary);
        self.catalog = report.records;
        self.filtered = self.catalog.clone();
        Ok(&self.catalog)
    }

    /// Replace the filter, recompute the view and return its first window.
    pub fn set_filter(&mut self, criteria: FilterCriteria) -> &[Arc<Record>] {
        self.filtered = filter::apply(&self.catalog, &criteria);
        self.cursor.reset();
        debug!(
            category = %criteria.category,
            query = %criteria.query,
            matches = self.filtered.len(),
            "filter applied"
        );
        self.criteria = criteria;
        self.cursor.window(&self.filtered)
    }

    /// The next window, empty once the view is exhausted.
    pub fn load_more(&mut self) -> &[Arc<Record>] {
        let window = self.cursor.load_more(&self.filtered);
        debug!(
            page = self.cursor.page_index(),
            window_len = window.len(),
            "load more"
        );
        window
    }

    /// Cache-first single record resolution for detail views.
    pub async fn lookup(&self, id: u32) -> DexResult<Arc<Record>> {
        self.hydrator.lookup(id).await
    }

    /// Remote resolution by name; the result is cached under its id.
    pub async fn lookup_by_name(&self, name: &str) -> DexResult<Arc<Record>> {
        self.hydrator.fetch_by_name(name).await
    }

    /// Resolve `key` as an id when it is numeric (a leading `#` is
    /// allowed), otherwise as a name. Surrounding whitespace is ignored.
    pub async fn lookup_key(&self, key: &str) -> DexResult<Arc<Record>> {
        let key = key.trim();
        match key.trim_start_matches('#').parse::<u32>() {
            Ok(id) => self.lookup(id).await,
            Err(_) if key.is_empty() => Err(DexError::unavailable("''", "empty lookup key")),
            Err(_) => self.lookup_by_name(key).await,
        }
    }

    /// Sorted category names present in the catalog.
    pub fn categories(&self) -> Vec<String> {
        filter::unique_categories(&self.catalog)
    }

    /// Every hydrated record in index order.
    pub fn catalog(&self) -> &[Arc<Record>] {
        &self.catalog
    }

    /// The catalog narrowed by the current criteria.
    pub fn filtered(&self) -> &[Arc<Record>] {
        &self.filtered
    }

    /// Records exposed so far, windows `0..=page_index` joined.
    pub fn visible(&self) -> &[Arc<Record>] {
        self.cursor.visible(&self.filtered)
    }

    /// False once every filtered record is visible.
    pub fn has_more(&self) -> bool {
        !self.cursor.is_exhausted(&self.filtered)
    }

    /// Criteria of the current view.
    pub const fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// Index of the last exposed window.
    pub const fn page_index(&self) -> usize {
        self.cursor.page_index()
    }

    /// Counters from the last successful `initialize_catalog`.
    pub const fn last_summary(&self) -> Option<&HydrationSummary> {
        self.last_summary.as_ref()
    }

    /// The shared record cache.
    pub const fn cache(&self) -> &Arc<RecordCache> {
        self.hydrator.cache()
    }

    fn clear(&mut self) {
        self.catalog.clear();
        self.filtered.clear();
        self.criteria = FilterCriteria::default();
        self.cursor.reset();
        self.last_summary = None;
    }
}
