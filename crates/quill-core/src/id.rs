//! Identifier generation abstraction.
//!
//! In production, this wraps random (version 4) UUID generation. In tests,
//! a sequence-backed implementation is injected so ids are predictable.

use uuid::Uuid;

/// Produces fresh, globally unique identifiers.
///
/// Generated values carry no ordering relationship to one another.
pub trait IdGenerator: Send + Sync {
    /// Returns a new identifier.
    fn next_id(&self) -> Uuid;
}

/// Production generator backed by random UUIDs.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIdGenerator;

impl IdGenerator for RandomIdGenerator {
    fn next_id(&self) -> Uuid {
        Uuid::new_v4()
    }
}
