//! HTTP adapters for the gateway's remote data sources.
//!
//! Each adapter implements one port from `vitrine-core` on top of a shared
//! `reqwest::Client`. The two upstreams return different response envelopes
//! (records nested under a `results` key vs. a bare top-level array); that
//! asymmetry is deliberate and must not be unified.

mod characters;
mod people;

pub use characters::{CharacterApi, CharacterApiConfig};
pub use people::{PeopleApi, PeopleApiConfig};

use vitrine_core::error::{SourceError, SourceResult};

/// GET `endpoint` and return the raw body.
///
/// Transport failures (unreachable host, timeout, non-success status,
/// unreadable body) all map to [`SourceError::Network`]; the body's shape
/// is the caller's concern.
pub(crate) async fn fetch_body(
    client: &reqwest::Client,
    endpoint: &str,
) -> SourceResult<String> {
    let response = client
        .get(endpoint)
        .send()
        .await
        .map_err(|e| SourceError::Network(e.to_string()))?
        .error_for_status()
        .map_err(|e| SourceError::Network(e.to_string()))?;

    response
        .text()
        .await
        .map_err(|e| SourceError::Network(e.to_string()))
}
