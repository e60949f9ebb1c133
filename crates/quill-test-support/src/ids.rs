//! Test id generators — deterministic `IdGenerator` implementations for tests.

use std::sync::Mutex;

use quill_core::id::IdGenerator;
use uuid::Uuid;

/// A generator that always returns the same id. Useful for exercising
/// identifier-conflict paths.
#[derive(Debug, Clone, Copy)]
pub struct FixedIdGenerator(pub Uuid);

impl IdGenerator for FixedIdGenerator {
    fn next_id(&self) -> Uuid {
        self.0
    }
}

/// A generator that returns ids from a predetermined sequence. Panics if the
/// sequence is exhausted.
#[derive(Debug)]
pub struct SequenceIdGenerator {
    values: Vec<Uuid>,
    index: Mutex<usize>,
}

impl SequenceIdGenerator {
    /// Create a new `SequenceIdGenerator` with the given ids.
    #[must_use]
    pub fn new(values: Vec<Uuid>) -> Self {
        Self {
            values,
            index: Mutex::new(0),
        }
    }

    /// Create a generator yielding `count` readable ids:
    /// `00000000-0000-0000-0000-000000000001`, `...0002`, and so on.
    #[must_use]
    pub fn numbered(count: u128) -> Self {
        Self::new((1..=count).map(Uuid::from_u128).collect())
    }
}

impl IdGenerator for SequenceIdGenerator {
    fn next_id(&self) -> Uuid {
        let mut index = self.index.lock().unwrap();
        let id = self.values[*index];
        *index += 1;
        id
    }
}
