//! Domain layer for the catalog browser
//!
//! Core models, port traits and the error taxonomy. Nothing in here
//! performs I/O.

pub mod errors;
pub mod models;
pub mod ports;

pub use errors::{DexError, DexResult};
