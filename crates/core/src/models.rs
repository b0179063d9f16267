//! Record models served by the gateway.
//!
//! All three shapes are read-only: books are constant for the lifetime of
//! the process, characters and people are fetched fresh on every query and
//! discarded once the response is sent. Upstream fields the gateway does
//! not declare are dropped during deserialization.

use std::sync::Arc;

use serde::{Deserialize, Deserializer};

/// A book from the built-in catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub title: Option<String>,
    pub author: Option<String>,
}

/// A character fetched from the character upstream.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Character {
    #[serde(default, deserialize_with = "deserialize_id")]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

/// A person fetched from the people upstream.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Person {
    #[serde(default, deserialize_with = "deserialize_id")]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub surname: Option<String>,
}

/// Immutable book catalog.
///
/// Constructed once at startup by the binary and handed to the GraphQL
/// schema, rather than captured from ambient module state. Cloning is
/// cheap: the books live behind an `Arc`.
#[derive(Debug, Clone)]
pub struct BookCatalog {
    books: Arc<[Book]>,
}

impl BookCatalog {
    /// Build a catalog from an ordered book list.
    pub fn new(books: Vec<Book>) -> Self {
        Self {
            books: books.into(),
        }
    }

    /// The canonical two-entry catalog the gateway ships with.
    pub fn builtin() -> Self {
        Self::new(vec![
            Book {
                title: Some("The Awakening".to_string()),
                author: Some("Kate Chopin".to_string()),
            },
            Book {
                title: Some("City of Glass".to_string()),
                author: Some("Paul Auster".to_string()),
            },
        ])
    }

    /// The books, in catalog order.
    pub fn books(&self) -> &[Book] {
        &self.books
    }
}

/// The upstreams disagree on whether identifiers are JSON numbers or
/// strings; GraphQL serializes `ID` as a string either way.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Number(u64),
    Text(String),
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawId>::deserialize(deserializer)?;
    Ok(raw.map(|id| match id {
        RawId::Number(n) => n.to_string(),
        RawId::Text(s) => s,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_is_fixed_and_ordered() {
        let catalog = BookCatalog::builtin();
        let books = catalog.books();

        assert_eq!(books.len(), 2);
        assert_eq!(books[0].title.as_deref(), Some("The Awakening"));
        assert_eq!(books[0].author.as_deref(), Some("Kate Chopin"));
        assert_eq!(books[1].title.as_deref(), Some("City of Glass"));
        assert_eq!(books[1].author.as_deref(), Some("Paul Auster"));
    }

    #[test]
    fn character_accepts_numeric_and_string_ids() {
        let from_number: Character = serde_json::from_str(r#"{"id": 1, "name": "Rick"}"#).unwrap();
        assert_eq!(from_number.id.as_deref(), Some("1"));

        let from_string: Character =
            serde_json::from_str(r#"{"id": "abc", "name": "Rick"}"#).unwrap();
        assert_eq!(from_string.id.as_deref(), Some("abc"));
    }

    #[test]
    fn unknown_upstream_fields_are_dropped() {
        let character: Character =
            serde_json::from_str(r#"{"id": 2, "name": "Morty", "species": "Human"}"#).unwrap();
        assert_eq!(
            character,
            Character {
                id: Some("2".to_string()),
                name: Some("Morty".to_string()),
            }
        );
    }

    #[test]
    fn person_fields_are_all_optional() {
        let person: Person = serde_json::from_str(r#"{"name": "Juan"}"#).unwrap();
        assert_eq!(person.id, None);
        assert_eq!(person.name.as_deref(), Some("Juan"));
        assert_eq!(person.surname, None);
    }
}
