//! Selecting and loading the history the server starts from.

use std::path::Path;

use quill_core::id::IdGenerator;
use quill_posts::domain::events::PostEvent;
use quill_posts::domain::history::{load_history, seed_history};
use quill_posts::domain::store::PostStore;

use crate::config::Config;
use crate::error::AppError;

/// Reads a JSON array of `PostEvent`s from `path`.
///
/// # Errors
///
/// Returns `AppError::History` if the file cannot be read or is not a valid
/// event list.
pub fn read_history_file(path: &Path) -> Result<Vec<PostEvent>, AppError> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| AppError::History(format!("cannot read {}: {e}", path.display())))?;
    serde_json::from_str(&raw)
        .map_err(|e| AppError::History(format!("invalid history in {}: {e}", path.display())))
}

/// Builds the initial store: the configured history file if there is one,
/// otherwise the built-in seed history.
///
/// # Errors
///
/// Returns `AppError::History` if the history file is unusable and
/// `AppError::Replay` if an event cannot be applied.
pub fn initial_store(config: &Config, ids: &dyn IdGenerator) -> Result<PostStore, AppError> {
    let events = match &config.history_file {
        Some(path) => read_history_file(path)?,
        None => seed_history(ids),
    };
    tracing::info!(events = events.len(), "replaying post history");
    Ok(load_history(&events)?)
}
