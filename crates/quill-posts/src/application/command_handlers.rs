//! Command handlers for the Posts context.
//!
//! Each handler turns a command into a single `PostEvent` and folds it into
//! the store. Errors from the store are propagated unchanged; the caller
//! decides what the user sees.

use quill_core::command::Command;
use quill_core::error::DomainError;
use quill_core::event::DomainEvent;
use quill_core::id::IdGenerator;
use tracing::debug;

use crate::domain::commands::{AddPost, DeletePost, EditPost};
use crate::domain::events::PostEvent;
use crate::domain::post_id::PostId;
use crate::domain::store::PostStore;

fn apply_for(
    command: &dyn Command,
    event: PostEvent,
    store: &PostStore,
) -> Result<PostId, DomainError> {
    let post_id = event.post_id();
    debug!(
        command_type = command.command_type(),
        correlation_id = %command.correlation_id(),
        event_type = event.event_type(),
        aggregate_id = %event.aggregate_id(),
        "applying event"
    );
    store.apply(event)?;
    Ok(post_id)
}

/// Handles the `AddPost` command: generates a fresh id and applies an
/// `Added` event.
///
/// This is a CREATION command — the handler generates the `post_id`.
///
/// # Errors
///
/// Returns `DomainError::IdentifierConflict` if the generator repeats an id.
pub fn handle_add_post(
    command: &AddPost,
    ids: &dyn IdGenerator,
    store: &PostStore,
) -> Result<PostId, DomainError> {
    let event = PostEvent::added(PostId::generate(ids), command.content.clone());
    apply_for(command, event, store)
}

/// Handles the `EditPost` command by applying an `Edited` event.
///
/// # Errors
///
/// Returns `DomainError::TargetNotFound` if the post does not exist.
pub fn handle_edit_post(command: &EditPost, store: &PostStore) -> Result<PostId, DomainError> {
    let event = PostEvent::edited(command.post_id, command.content.clone());
    apply_for(command, event, store)
}

/// Handles the `DeletePost` command by applying a `Deleted` event.
///
/// # Errors
///
/// Returns `DomainError::TargetNotFound` if the post does not exist.
pub fn handle_delete_post(command: &DeletePost, store: &PostStore) -> Result<PostId, DomainError> {
    let event = PostEvent::deleted(command.post_id);
    apply_for(command, event, store)
}
