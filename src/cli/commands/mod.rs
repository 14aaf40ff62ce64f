//! Command implementations. Each command owns one catalog session.

pub mod browse;
pub mod show;
pub mod types;

use std::sync::Arc;

use anyhow::{Context, Result};

use crate::adapters::pokeapi::PokeApiClient;
use crate::cli::display::{create_spinner, ProgressBarExt};
use crate::domain::models::Config;
use crate::services::{CatalogSession, RecordCache};

/// Session over the live record service described by `config`.
pub fn build_session(config: &Config) -> Result<CatalogSession> {
    let client = PokeApiClient::new(&config.api).context("Failed to build HTTP client")?;
    Ok(CatalogSession::from_config(
        Arc::new(client),
        Arc::new(RecordCache::new()),
        config,
    ))
}

/// Run `initialize_catalog` behind a spinner.
pub async fn load_catalog(session: &mut CatalogSession, json: bool) -> Result<()> {
    let spinner = create_spinner("Loading catalog...", json);

    let loaded = session.initialize_catalog().await.map(<[_]>::len);
    let count = match loaded {
        Ok(count) => count,
        Err(err) => {
            spinner.finish_error("Failed to load catalog");
            return Err(err).context("Failed to load catalog");
        }
    };

    match session.last_summary() {
        Some(summary) if summary.dropped > 0 => spinner.finish_warning(format!(
            "Loaded {count} records ({} unavailable)",
            summary.dropped
        )),
        _ => spinner.finish_success(format!("Loaded {count} records")),
    }
    Ok(())
}
