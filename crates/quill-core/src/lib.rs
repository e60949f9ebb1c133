//! Quill Core — shared domain abstractions.
//!
//! This crate defines the fundamental traits and types that the posts
//! context and the HTTP layer depend on. It contains no infrastructure code.

pub mod command;
pub mod error;
pub mod event;
pub mod id;
