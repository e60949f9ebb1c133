//! Quill — HTTP front end for the post store.

pub mod config;
pub mod error;
pub mod history;
pub mod routes;
pub mod state;
pub mod views;
