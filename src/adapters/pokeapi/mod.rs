//! PokeAPI v2 adapter.
//!
//! Provides the reqwest-backed [`RecordSource`](crate::domain::ports::RecordSource)
//! used in production.

pub mod client;
pub mod models;

pub use client::PokeApiClient;
