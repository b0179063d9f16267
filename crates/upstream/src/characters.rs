//! Character API adapter.
//!
//! Fetches the character list from the public Rick and Morty API. This
//! upstream nests its records under a `results` key, unlike the people
//! API which returns a bare array.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, instrument};

use vitrine_core::error::{SourceError, SourceResult};
use vitrine_core::models::Character;
use vitrine_core::ports::CharacterSource;

/// Configuration for the character API adapter.
#[derive(Debug, Clone)]
pub struct CharacterApiConfig {
    /// Full endpoint URL for the character listing.
    pub endpoint: String,
}

impl Default for CharacterApiConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://rickandmortyapi.com/api/character".to_string(),
        }
    }
}

/// Response envelope: the records live under `results`.
#[derive(Debug, Deserialize)]
struct CharacterEnvelope {
    results: Vec<Character>,
}

/// Character API adapter implementing the [`CharacterSource`] port.
pub struct CharacterApi {
    client: reqwest::Client,
    endpoint: String,
}

impl CharacterApi {
    pub fn new(client: reqwest::Client, config: CharacterApiConfig) -> Self {
        Self {
            client,
            endpoint: config.endpoint,
        }
    }
}

#[async_trait]
impl CharacterSource for CharacterApi {
    #[instrument(skip(self), fields(endpoint = %self.endpoint))]
    async fn characters(&self) -> SourceResult<Vec<Character>> {
        let body = crate::fetch_body(&self.client, &self.endpoint).await?;

        let envelope: CharacterEnvelope =
            serde_json::from_str(&body).map_err(|e| SourceError::Format(e.to_string()))?;

        debug!(count = envelope.results.len(), "Fetched characters");
        Ok(envelope.results)
    }
}
