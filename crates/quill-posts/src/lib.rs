//! Quill — Posts bounded context.
//!
//! Responsible for the event-sourced post collection: folding `Added`,
//! `Edited` and `Deleted` events into current state, point lookup, and
//! "most recent N" queries.

pub mod application;
pub mod domain;
