//! Pokedex - catalog browser for the PokeAPI
//!
//! Acquires the first-generation catalog index, hydrates every entry
//! through a read-through record cache, and exposes a filterable,
//! windowed view of the result.
//!
//! # Architecture
//!
//! This crate follows Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain`): Records, filter criteria, errors and ports
//! - **Adapters** (`adapters`): The reqwest-backed record source and a scripted mock
//! - **Service Layer** (`services`): Cache, hydration, filtering, paging and the session
//! - **Infrastructure Layer** (`infrastructure`): Configuration and logging
//! - **CLI Layer** (`cli`): Command-line interface
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use pokedex::{CatalogSession, FilterCriteria, PokeApiClient, RecordCache};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = PokeApiClient::with_base_url("https://pokeapi.co/api/v2")?;
//!     let mut session = CatalogSession::new(Arc::new(client), Arc::new(RecordCache::new()));
//!     session.initialize_catalog().await?;
//!     let fire = session.set_filter(FilterCriteria::category("fire"));
//!     println!("{} fire records in the first window", fire.len());
//!     Ok(())
//! }
//! ```

pub mod adapters;
pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use adapters::pokeapi::PokeApiClient;
pub use domain::errors::{DexError, DexResult};
pub use domain::models::{
    CatalogEntry, Category, Config, FilterCriteria, HydrationSummary, Record, Stat,
};
pub use domain::ports::{HydrationObserver, RecordSource, TracingObserver};
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use services::{CatalogSession, Hydrator, PageCursor, RecordCache};
