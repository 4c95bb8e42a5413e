//! HTTP client for the PokeAPI `pokemon` resource.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use url::Url;

use crate::config::UpstreamConfig;
use crate::creature::{CreatureId, CreatureRecord};
use crate::upstream::{CreatureSource, UpstreamError};

/// Fetches creature records from `<base_url>/<id>`.
#[derive(Clone)]
pub struct PokeApiClient {
    client: Client,
    base_url: Url,
}

impl PokeApiClient {
    pub fn new(base_url: &str) -> Result<Self, UpstreamError> {
        Self::with_client(Client::new(), base_url)
    }

    /// Build from config, honouring the optional timeout.
    pub fn from_config(config: &UpstreamConfig) -> Result<Self, UpstreamError> {
        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|e| UpstreamError::Transport(e.to_string()))?;
        Self::with_client(client, &config.base_url)
    }

    pub fn with_client(client: Client, base_url: &str) -> Result<Self, UpstreamError> {
        let base_url = Url::parse(base_url).map_err(|e| UpstreamError::InvalidUrl(e.to_string()))?;
        if base_url.cannot_be_a_base() {
            return Err(UpstreamError::InvalidUrl(format!("{base_url} cannot be a base")));
        }
        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// URL of one creature. The id is percent-encoded as a single segment.
    pub fn creature_url(&self, id: &CreatureId) -> Result<Url, UpstreamError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| UpstreamError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .push(id.as_segment());
        Ok(url)
    }
}

#[async_trait]
impl CreatureSource for PokeApiClient {
    async fn fetch_by_id(&self, id: &CreatureId) -> Result<CreatureRecord, UpstreamError> {
        let url = self.creature_url(id)?;
        tracing::debug!(url = %url, "Fetching creature");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| UpstreamError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::Status(status));
        }

        response
            .json::<CreatureRecord>()
            .await
            .map_err(|e| UpstreamError::Decode(e.to_string()))
    }
}
