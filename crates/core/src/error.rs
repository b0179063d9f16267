//! Error types for the gateway domain layer.
//!
//! The gateway has a deliberately small taxonomy:
//!
//! - [`SourceError`] - Data source failures, surfaced per-field in the
//!   GraphQL `errors` array
//!
//! Startup failures (port already bound, bad configuration) are fatal and
//! handled with `anyhow` context in the binary; they never reach a resolver.

use thiserror::Error;

/// Failures produced by a data source adapter.
///
/// These are per-field errors: the GraphQL execution model isolates them,
/// so one field's failure never aborts sibling fields in the same query.
#[derive(Debug, Clone, Error)]
pub enum SourceError {
    /// The upstream service could not be reached, timed out, or answered
    /// with a non-success status.
    #[error("Upstream request failed: {0}")]
    Network(String),

    /// The upstream body was not valid JSON, or the JSON did not match the
    /// expected record shape.
    #[error("Unexpected upstream payload: {0}")]
    Format(String),
}

/// Result type for data source operations.
pub type SourceResult<T> = Result<T, SourceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages_preserve_the_cause() {
        let err = SourceError::Network("connection refused".into());
        assert!(err.to_string().contains("connection refused"));

        let err = SourceError::Format("missing field `results`".into());
        assert!(err.to_string().contains("missing field `results`"));
    }
}
