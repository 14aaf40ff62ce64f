//! Filter and search over the hydrated catalog.
//!
//! Precedence:
//! 1. A non-empty query (trimmed, lower-cased) matches records whose
//!    lower-cased name contains it, or whose three-digit padded id
//!    contains it. The category is ignored while a query is present.
//! 2. Otherwise `Category::All` matches everything.
//! 3. Otherwise a record matches when one of its categories equals the
//!    selected one exactly.
//!
//! The output keeps the catalog's relative order and depends only on
//! the inputs.

use std::collections::BTreeSet;
use std::sync::Arc;

use crate::domain::models::{Category, FilterCriteria, Record};

/// Records of `catalog` matching `criteria`, in catalog order.
pub fn apply(catalog: &[Arc<Record>], criteria: &FilterCriteria) -> Vec<Arc<Record>> {
    let query = criteria.normalized_query();
    catalog
        .iter()
        .filter(|record| matches(record, &criteria.category, &query))
        .cloned()
        .collect()
}

/// Single-record predicate behind [`apply`]. `query` must already be
/// normalized.
pub fn matches(record: &Record, category: &Category, query: &str) -> bool {
    if !query.is_empty() {
        return record.name.to_lowercase().contains(query) || record.padded_id().contains(query);
    }
    match category {
        Category::All => true,
        Category::Named(name) => record.has_category(name),
    }
}

/// Sorted, de-duplicated category names present in `catalog`.
pub fn unique_categories(catalog: &[Arc<Record>]) -> Vec<String> {
    catalog
        .iter()
        .flat_map(|record| record.categories.iter().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
