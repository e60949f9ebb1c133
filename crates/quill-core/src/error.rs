//! Domain error types.

use thiserror::Error;
use uuid::Uuid;

/// Top-level domain error type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// An edit or delete referred to an entity that does not currently exist.
    #[error("target not found: {0}")]
    TargetNotFound(Uuid),

    /// A creation event reused an identifier that is already present.
    #[error("identifier conflict: {0} already exists")]
    IdentifierConflict(Uuid),

    /// A lookup found no post with the requested identifier.
    #[error("post not found: {0}")]
    PostNotFound(Uuid),

    /// A validation error in domain logic.
    #[error("validation error: {0}")]
    Validation(String),
}
