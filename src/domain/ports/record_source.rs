//! Remote record service port.
//!
//! The service is opaque to the core: it can list a page of catalog
//! entries and resolve a full record by numeric id or by name. Every
//! failure arrives already reduced to a [`DexError`].

use async_trait::async_trait;

use crate::domain::errors::DexResult;
use crate::domain::models::{CatalogEntry, Record};

/// Remote catalog and detail lookups.
#[async_trait]
pub trait RecordSource: Send + Sync {
    /// Fetch one page of the catalog index.
    async fn fetch_index(&self, limit: u32, offset: u32) -> DexResult<Vec<CatalogEntry>>;

    /// Fetch a full record by numeric id.
    async fn fetch_by_id(&self, id: u32) -> DexResult<Record>;

    /// Fetch a full record by name. Matching is case-insensitive on the
    /// remote side; callers lower-case before asking.
    async fn fetch_by_name(&self, name: &str) -> DexResult<Record>;
}
