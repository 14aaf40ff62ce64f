//! PokeAPI HTTP client.
//!
//! Implements [`RecordSource`] over the PokeAPI v2 REST endpoints. Every
//! network, status and decoding problem is mapped into a [`DexError`];
//! nothing reqwest-specific escapes this module. No request is retried.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use crate::domain::errors::{DexError, DexResult};
use crate::domain::models::{ApiConfig, CatalogEntry, Record};
use crate::domain::ports::RecordSource;

use super::models::{ListResponse, PokemonResponse};

/// Resource path under the API base URL.
const POKEMON_RESOURCE: &str = "pokemon";

/// HTTP client for the PokeAPI.
#[derive(Debug, Clone)]
pub struct PokeApiClient {
    http: Client,
    base_url: Url,
}

impl PokeApiClient {
    /// Build a client from configuration.
    ///
    /// Fails only when the base URL cannot be parsed or the TLS backend
    /// cannot be initialized.
    pub fn new(config: &ApiConfig) -> DexResult<Self> {
        let base_url = Url::parse(&config.base_url).map_err(|e| {
            DexError::TransportFailure(format!("invalid base url '{}': {e}", config.base_url))
        })?;

        let mut builder = Client::builder()
            .user_agent(config.user_agent.clone())
            .pool_max_idle_per_host(10)
            .tcp_nodelay(true);
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http = builder
            .build()
            .map_err(|e| DexError::TransportFailure(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { http, base_url })
    }

    /// Client pointed at `base_url` with otherwise default settings.
    pub fn with_base_url(base_url: impl Into<String>) -> DexResult<Self> {
        Self::new(&ApiConfig {
            base_url: base_url.into(),
            ..ApiConfig::default()
        })
    }

    /// Root URL every request is resolved against.
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `{base}/pokemon[/{segment}]`, with the segment percent-encoded.
    fn resource_url(&self, segment: Option<&str>) -> DexResult<Url> {
        let mut url = self.base_url.clone();
        {
            let mut segments = url.path_segments_mut().map_err(|()| {
                DexError::TransportFailure(format!("base url '{}' cannot be a base", self.base_url))
            })?;
            segments.pop_if_empty().push(POKEMON_RESOURCE);
            if let Some(segment) = segment {
                segments.push(segment);
            }
        }
        Ok(url)
    }

    /// GET `url` and decode a JSON body. `key` names the record for
    /// 404 reporting; the index request passes `None`.
    async fn get_json<T: DeserializeOwned>(&self, url: Url, key: Option<&str>) -> DexResult<T> {
        debug!(%url, "GET");

        let response = self.http.get(url.clone()).send().await.map_err(|e| {
            if e.is_timeout() {
                DexError::Timeout(format!("GET {url}"))
            } else {
                DexError::TransportFailure(format!("GET {url} failed: {e}"))
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(match (status, key) {
                (StatusCode::NOT_FOUND, Some(key)) => DexError::unavailable(key, "HTTP 404"),
                _ => DexError::TransportFailure(format!("GET {url} returned {status}")),
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| DexError::TransportFailure(format!("GET {url} decode failed: {e}")))
    }

    async fn fetch_record(&self, key: &str) -> DexResult<Record> {
        let url = self.resource_url(Some(key))?;
        let wire: PokemonResponse = self.get_json(url, Some(key)).await?;
        Record::try_from(wire)
    }
}

#[async_trait]
impl RecordSource for PokeApiClient {
    #[instrument(skip(self))]
    async fn fetch_index(&self, limit: u32, offset: u32) -> DexResult<Vec<CatalogEntry>> {
        let mut url = self.resource_url(None)?;
        url.query_pairs_mut()
            .append_pair("limit", &limit.to_string())
            .append_pair("offset", &offset.to_string());

        let list: ListResponse = self.get_json(url, None).await?;
        Ok(list.results.into_iter().map(Into::into).collect())
    }

    #[instrument(skip(self))]
    async fn fetch_by_id(&self, id: u32) -> DexResult<Record> {
        let record = self.fetch_record(&id.to_string()).await?;
        if record.id != id {
            return Err(DexError::InvalidRecord(format!(
                "requested #{id}, received #{}",
                record.id
            )));
        }
        Ok(record)
    }

    #[instrument(skip(self))]
    async fn fetch_by_name(&self, name: &str) -> DexResult<Record> {
        let name = name.to_lowercase();
        if name.is_empty() {
            return Err(DexError::unavailable("''", "empty name"));
        }
        self.fetch_record(&name).await
    }
}
