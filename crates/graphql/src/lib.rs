//! GraphQL API for the Vitrine gateway.
//!
//! Declares the gateway schema - a book catalog plus two proxied remote
//! listings - and the axum HTTP server that executes queries against it.
//!
//! # Building a Schema
//!
//! ```ignore
//! use std::sync::Arc;
//! use vitrine_core::models::BookCatalog;
//! use vitrine_graphql::build_schema;
//!
//! let schema = build_schema(BookCatalog::builtin(), characters, people);
//! ```

mod schema;
mod server;
mod types;

pub use schema::{build_schema, GatewayQuery, MAX_QUERY_COMPLEXITY, MAX_QUERY_DEPTH};
pub use server::{serve, serve_with_shutdown, ServerConfig};
pub use types::GatewaySchema;
