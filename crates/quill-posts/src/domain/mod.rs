//! Domain model for the Posts context.

pub mod commands;
pub mod events;
pub mod history;
pub mod post;
pub mod post_id;
pub mod store;
