//! GraphQL schema definition.
//!
//! The gateway exposes three root fields: `books` answered from the
//! immutable catalog, `characters` and `people` answered by awaiting the
//! corresponding upstream port. The engine invokes resolvers lazily, so a
//! field that is not selected triggers no upstream call.

use std::sync::Arc;

use async_graphql::{
    Context, EmptyMutation, EmptySubscription, ErrorExtensions, Object, Result, Schema, ID,
};

use vitrine_core::error::SourceError;
use vitrine_core::models::BookCatalog;
use vitrine_core::ports::{CharacterSource, PersonSource};

use crate::types::GatewaySchema;

// -----------------------------------------------------------------------------
// Schema Configuration
// -----------------------------------------------------------------------------

/// Maximum query depth to prevent deeply nested queries (DoS protection).
/// Note: GraphQL introspection requires depth ~13, so we use 15 to allow it.
pub const MAX_QUERY_DEPTH: usize = 15;

/// Maximum query complexity score (DoS protection).
/// Sized to leave room for introspection queries from the playground.
pub const MAX_QUERY_COMPLEXITY: usize = 500;

// -----------------------------------------------------------------------------
// Schema Builder
// -----------------------------------------------------------------------------

/// Build the gateway schema.
///
/// The catalog and the two upstream ports are the only data the resolvers
/// ever read; everything is wired in here at startup.
pub fn build_schema(
    catalog: BookCatalog,
    characters: Arc<dyn CharacterSource>,
    people: Arc<dyn PersonSource>,
) -> GatewaySchema {
    Schema::build(GatewayQuery, EmptyMutation, EmptySubscription)
        .data(catalog)
        .data(characters)
        .data(people)
        .limit_depth(MAX_QUERY_DEPTH)
        .limit_complexity(MAX_QUERY_COMPLEXITY)
        .finish()
}

// -----------------------------------------------------------------------------
// Gateway Query
// -----------------------------------------------------------------------------

/// Root query type for the gateway.
#[derive(Default)]
pub struct GatewayQuery;

#[Object]
impl GatewayQuery {
    /// The fixed book catalog. Never fails, never touches the network.
    async fn books<'ctx>(&self, ctx: &Context<'ctx>) -> Result<Option<Vec<Option<Book>>>> {
        let catalog = ctx.data::<BookCatalog>()?;

        Ok(Some(
            catalog
                .books()
                .iter()
                .cloned()
                .map(Book::from)
                .map(Some)
                .collect(),
        ))
    }

    /// All characters from the character upstream.
    async fn characters<'ctx>(&self, ctx: &Context<'ctx>) -> Result<Vec<Character>> {
        let source = ctx.data::<Arc<dyn CharacterSource>>()?;

        let characters = source.characters().await.map_err(extend_source_error)?;
        Ok(characters.into_iter().map(Character::from).collect())
    }

    /// All people from the people upstream.
    async fn people<'ctx>(&self, ctx: &Context<'ctx>) -> Result<Vec<Person>> {
        let source = ctx.data::<Arc<dyn PersonSource>>()?;

        let people = source.people().await.map_err(extend_source_error)?;
        Ok(people.into_iter().map(Person::from).collect())
    }
}

// -----------------------------------------------------------------------------
// GraphQL Types
// -----------------------------------------------------------------------------

/// Book type.
#[derive(async_graphql::SimpleObject)]
pub struct Book {
    pub title: Option<String>,
    pub author: Option<String>,
}

impl From<vitrine_core::models::Book> for Book {
    fn from(b: vitrine_core::models::Book) -> Self {
        Self {
            title: b.title,
            author: b.author,
        }
    }
}

/// Character type.
#[derive(async_graphql::SimpleObject)]
pub struct Character {
    pub id: Option<ID>,
    pub name: Option<String>,
}

impl From<vitrine_core::models::Character> for Character {
    fn from(c: vitrine_core::models::Character) -> Self {
        Self {
            id: c.id.map(ID::from),
            name: c.name,
        }
    }
}

/// Person type.
#[derive(async_graphql::SimpleObject)]
pub struct Person {
    pub id: Option<ID>,
    pub name: Option<String>,
    pub surname: Option<String>,
}

impl From<vitrine_core::models::Person> for Person {
    fn from(p: vitrine_core::models::Person) -> Self {
        Self {
            id: p.id.map(ID::from),
            name: p.name,
            surname: p.surname,
        }
    }
}

// -----------------------------------------------------------------------------
// Helpers
// -----------------------------------------------------------------------------

/// Attach a machine-readable `code` extension to a source failure before it
/// lands in the response's `errors` array.
fn extend_source_error(err: SourceError) -> async_graphql::Error {
    let code = match &err {
        SourceError::Network(_) => "NETWORK_ERROR",
        SourceError::Format(_) => "FORMAT_ERROR",
    };

    async_graphql::Error::new(err.to_string()).extend_with(|_, e| e.set("code", code))
}
