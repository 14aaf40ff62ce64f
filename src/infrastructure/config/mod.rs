//! Layered configuration loading with figment.

pub mod loader;

pub use loader::{ConfigError, ConfigLoader};
