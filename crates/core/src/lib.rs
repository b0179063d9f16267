//! Core domain layer for the Vitrine gateway.
//!
//! This crate contains the record models, port traits (interfaces), and
//! error types for the GraphQL gateway. It follows hexagonal architecture
//! principles - this is the innermost layer with no dependencies on
//! infrastructure.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │                  vitrine (binary)                   │
//! ├─────────────────────────────────────────────────────┤
//! │   vitrine-graphql      │      vitrine-upstream      │
//! │      (API)             │      (HTTP adapters)       │
//! ├────────────────────────┴────────────────────────────┤
//! │              vitrine-core  ← YOU ARE HERE           │
//! │              (models, ports, errors)                │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`models`] - Record models (Book, Character, Person) and the book catalog
//! - [`ports`] - Interface traits the upstream adapters implement
//! - [`error`] - Domain error types
//!
//! # Key Concepts
//!
//! ## Ports
//!
//! Each remote data source is reached through a port trait:
//!
//! - [`ports::CharacterSource`] - Fetch the character list
//! - [`ports::PersonSource`] - Fetch the people list
//!
//! The book catalog needs no port: it is an immutable value constructed at
//! startup and handed to the schema, so a query that never selects the
//! remote fields touches no network at all.

pub mod error;
pub mod models;
pub mod ports;
