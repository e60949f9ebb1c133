//! Shared test doubles and utilities for the Quill blog engine.

mod ids;

pub use ids::{FixedIdGenerator, SequenceIdGenerator};
