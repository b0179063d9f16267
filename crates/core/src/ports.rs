//! Port traits for the gateway's remote data sources.
//!
//! Implementations live in the infrastructure layer (`vitrine-upstream`).
//! The GraphQL resolvers hold the ports as trait objects, so the schema
//! never knows which transport sits behind a field.

use async_trait::async_trait;

use crate::error::SourceResult;
use crate::models::{Character, Person};

/// Port trait for the character upstream.
#[async_trait]
pub trait CharacterSource: Send + Sync {
    /// Fetch the full character list from the upstream service.
    async fn characters(&self) -> SourceResult<Vec<Character>>;
}

/// Port trait for the people upstream.
#[async_trait]
pub trait PersonSource: Send + Sync {
    /// Fetch the full people list from the upstream service.
    async fn people(&self) -> SourceResult<Vec<Person>>;
}
