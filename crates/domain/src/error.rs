//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`GestionSallesError`] via `From`.

/// Top-level error returned by application services and repositories.
#[derive(Debug, thiserror::Error)]
pub enum GestionSallesError {
    /// A precondition on the input was not met.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// The targeted record does not exist in the store.
    #[error("not found")]
    NotFound(#[from] NotFoundError),

    /// The backing store rejected the operation.
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Precondition violations on domain values.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The record has no identifier yet, it was never saved.
    #[error("record has not been persisted yet")]
    NotPersisted,

    /// An identifier could not be parsed.
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

/// A record addressed by identifier is missing from the store.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("{entity} {id} not found")]
pub struct NotFoundError {
    /// Kind of record that was looked up.
    pub entity: &'static str,
    /// Identifier that was looked up.
    pub id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_format_not_found_with_entity_and_id() {
        let err = NotFoundError {
            entity: "Salle",
            id: "42".to_string(),
        };
        assert_eq!(err.to_string(), "Salle 42 not found");
    }

    #[test]
    fn should_convert_validation_error_into_top_level_error() {
        let err: GestionSallesError = ValidationError::NotPersisted.into();
        assert!(matches!(
            err,
            GestionSallesError::Validation(ValidationError::NotPersisted)
        ));
    }

    #[test]
    fn should_expose_storage_source() {
        let io = std::io::Error::other("disk full");
        let err = GestionSallesError::Storage(Box::new(io));
        let source = std::error::Error::source(&err).unwrap();
        assert_eq!(source.to_string(), "disk full");
    }
}
