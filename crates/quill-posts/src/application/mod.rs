//! Application layer for the Posts context.

pub mod command_handlers;
pub mod query_handlers;
