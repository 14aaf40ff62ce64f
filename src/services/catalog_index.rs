//! List acquisition: one request for the first batch of the catalog index.

use std::sync::Arc;

use tracing::{error, info, instrument};

use crate::domain::errors::{DexError, DexResult};
use crate::domain::models::{CatalogConfig, CatalogEntry};
use crate::domain::ports::RecordSource;

/// Entries requested when nothing else is configured.
pub const DEFAULT_LIST_LIMIT: u32 = 151;

/// Fetches the ordered catalog index. Only the first batch is ever
/// requested; there is no incremental paging of the index.
pub struct CatalogIndexLoader {
    source: Arc<dyn RecordSource>,
    limit: u32,
    offset: u32,
}

impl CatalogIndexLoader {
    /// Loader for the first [`DEFAULT_LIST_LIMIT`] entries at offset 0.
    pub fn new(source: Arc<dyn RecordSource>) -> Self {
        Self {
            source,
            limit: DEFAULT_LIST_LIMIT,
            offset: 0,
        }
    }

    pub fn from_config(source: Arc<dyn RecordSource>, config: &CatalogConfig) -> Self {
        Self {
            source,
            limit: config.list_limit,
            offset: config.list_offset,
        }
    }

    /// Entries requested per fetch.
    pub const fn limit(&self) -> u32 {
        self.limit
    }

    /// Fetch the index.
    ///
    /// Any remote failure becomes [`DexError::TransportFailure`]; an
    /// empty answer becomes [`DexError::EmptyCatalog`]. Callers must not
    /// hydrate after either.
    #[instrument(skip(self), fields(limit = self.limit, offset = self.offset))]
    pub async fn fetch(&self) -> DexResult<Vec<CatalogEntry>> {
        let entries = self
            .source
            .fetch_index(self.limit, self.offset)
            .await
            .map_err(|e| {
                error!(error = %e, "failed to fetch catalog index");
                match e {
                    DexError::TransportFailure(_) => e,
                    other => DexError::TransportFailure(other.to_string()),
                }
            })?;

        if entries.is_empty() {
            error!("catalog index is empty");
            return Err(DexError::EmptyCatalog);
        }

        info!(count = entries.len(), "fetched catalog index");
        Ok(entries)
    }
}
