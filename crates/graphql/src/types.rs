//! GraphQL type definitions.

use async_graphql::{EmptyMutation, EmptySubscription, Schema};

use crate::schema::GatewayQuery;

/// The gateway GraphQL schema type (query-only).
pub type GatewaySchema = Schema<GatewayQuery, EmptyMutation, EmptySubscription>;
