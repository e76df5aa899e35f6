// src/metadata/client.rs
// Movie-database gateway (OMDb-compatible API)

use anyhow::{Result, anyhow};
use reqwest::Client;
use tracing::debug;

use super::error::{MetadataError, MetadataResult};
use super::types::{MovieRecord, OmdbPayload};
use crate::config::CONFIG;

/// Client for title lookups against the metadata endpoint. One request per
/// call; no retries, no caching.
#[derive(Clone)]
pub struct OmdbClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl OmdbClient {
    pub fn new(api_key: String, base_url: String) -> Result<Self> {
        if api_key.is_empty() {
            return Err(anyhow!("OMDb API key is required"));
        }

        Ok(OmdbClient {
            client: Client::builder()
                .timeout(CONFIG.http_timeout_secs())
                .build()?,
            api_key,
            base_url,
        })
    }

    /// Construct from the global config.
    pub fn from_config() -> Result<Self> {
        Self::new(CONFIG.omdb_api_key.clone(), CONFIG.omdb_base_url.clone())
    }

    /// Fetch the full record for a title.
    ///
    /// The title travels as a query parameter, so reqwest percent-encodes it
    /// properly. A 2xx body without an `imdbID` means the upstream found
    /// nothing and maps to `NotFound`.
    pub async fn movie_by_title(&self, title: &str) -> MetadataResult<MovieRecord> {
        debug!("Looking up metadata for '{}'", title);

        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("apikey", self.api_key.as_str()),
                ("t", title),
                ("plot", "full"),
            ])
            .send()
            .await
            .map_err(MetadataError::RequestFailed)?;

        let status = response.status();
        if !status.is_success() {
            return Err(MetadataError::UpstreamError {
                status: status.as_u16(),
            });
        }

        let payload: OmdbPayload = response
            .json()
            .await
            .map_err(|_| MetadataError::MalformedResponse)?;

        payload
            .into_record()
            .ok_or_else(|| MetadataError::not_found(title))
    }
}
