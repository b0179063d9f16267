//! People API adapter.
//!
//! Fetches the people list from a local-network service. The upstream
//! returns the records as a bare top-level JSON array - no envelope -
//! and carries no production guarantee of availability.

use async_trait::async_trait;
use tracing::{debug, instrument};

use vitrine_core::error::{SourceError, SourceResult};
use vitrine_core::models::Person;
use vitrine_core::ports::PersonSource;

/// Configuration for the people API adapter.
#[derive(Debug, Clone)]
pub struct PeopleApiConfig {
    /// Full endpoint URL for the people listing.
    pub endpoint: String,
}

impl Default for PeopleApiConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:9090/api/".to_string(),
        }
    }
}

/// People API adapter implementing the [`PersonSource`] port.
pub struct PeopleApi {
    client: reqwest::Client,
    endpoint: String,
}

impl PeopleApi {
    pub fn new(client: reqwest::Client, config: PeopleApiConfig) -> Self {
        Self {
            client,
            endpoint: config.endpoint,
        }
    }
}

#[async_trait]
impl PersonSource for PeopleApi {
    #[instrument(skip(self), fields(endpoint = %self.endpoint))]
    async fn people(&self) -> SourceResult<Vec<Person>> {
        let body = crate::fetch_body(&self.client, &self.endpoint).await?;

        let people: Vec<Person> =
            serde_json::from_str(&body).map_err(|e| SourceError::Format(e.to_string()))?;

        debug!(count = people.len(), "Fetched people");
        Ok(people)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn api_for(server: &MockServer) -> PeopleApi {
        PeopleApi::new(
            reqwest::Client::new(),
            PeopleApiConfig {
                endpoint: format!("{}/api/", server.uri()),
            },
        )
    }

    async fn mount_body(server: &MockServer, template: ResponseTemplate) {
        Mock::given(method("GET"))
            .and(path("/api/"))
            .respond_with(template)
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn passes_through_the_top_level_array() {
        let server = MockServer::start().await;
        mount_body(
            &server,
            ResponseTemplate::new(200).set_body_json(json!([
                { "id": "1", "name": "Juan", "surname": "García", "age": 40 },
                { "id": "2", "name": "Pedro", "surname": "López" },
                { "id": "3", "name": "Ana" }
            ])),
        )
        .await;

        let people = api_for(&server).people().await.unwrap();

        assert_eq!(people.len(), 3);
        assert_eq!(
            people[0],
            Person {
                id: Some("1".to_string()),
                name: Some("Juan".to_string()),
                surname: Some("García".to_string()),
            }
        );
        assert_eq!(people[2].surname, None);
    }

    #[tokio::test]
    async fn enveloped_body_is_a_format_error() {
        // The people upstream must be a bare array; an object-wrapped
        // payload is the character API's shape, not this one's.
        let server = MockServer::start().await;
        mount_body(
            &server,
            ResponseTemplate::new(200).set_body_json(json!({ "results": [] })),
        )
        .await;

        let err = api_for(&server).people().await.unwrap_err();
        assert!(matches!(err, SourceError::Format(_)), "got {err:?}");
    }

    #[tokio::test]
    async fn unreachable_upstream_is_a_network_error() {
        let server = MockServer::start().await;
        let endpoint = format!("{}/api/", server.uri());
        drop(server);

        let api = PeopleApi::new(reqwest::Client::new(), PeopleApiConfig { endpoint });

        let err = api.people().await.unwrap_err();
        assert!(matches!(err, SourceError::Network(_)), "got {err:?}");
    }
}
