//! Shared application state.

use std::sync::Arc;

use quill_core::id::IdGenerator;
use quill_posts::domain::store::PostStore;

/// Application state shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// The post collection.
    pub store: Arc<PostStore>,
    /// Source of fresh post identifiers.
    pub id_generator: Arc<dyn IdGenerator>,
    /// Number of posts listed when no explicit limit is given.
    pub index_limit: usize,
}

impl AppState {
    /// Create new application state.
    #[must_use]
    pub fn new(store: PostStore, id_generator: Arc<dyn IdGenerator>, index_limit: usize) -> Self {
        Self {
            store: Arc::new(store),
            id_generator,
            index_limit,
        }
    }
}
