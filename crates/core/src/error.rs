use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    /// A name uniqueness violation. Surfaced to clients in the same
    /// bad-input category as [`CoreError::Validation`], but kept as its
    /// own variant so callers can tell the two apart.
    #[error("Duplicate name: {0}")]
    DuplicateName(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
