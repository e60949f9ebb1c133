//! The post store.
//!
//! Current state of the post collection, derived by folding `PostEvent`s one
//! at a time. Two views are kept under a single lock: a mapping from id to
//! post for point lookup, and the ids in the order they were added for
//! recency queries. The recency view holds ids rather than copies, so an edit
//! updates one record and is visible through both views.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::{Mutex, MutexGuard, PoisonError};

use quill_core::error::DomainError;

use super::events::{PostAdded, PostDeleted, PostEdited, PostEvent};
use super::post::Post;
use super::post_id::PostId;

#[derive(Debug, Default)]
struct PostState {
    by_id: HashMap<PostId, Post>,
    by_time_added: Vec<PostId>,
}

/// Mutex-guarded, event-sourced collection of posts.
#[derive(Debug, Default)]
pub struct PostStore {
    state: Mutex<PostState>,
}

impl PostStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // Every operation either completes or returns before touching state, so
    // a poisoned lock still guards a consistent pair of views.
    fn state(&self) -> MutexGuard<'_, PostState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns the post with the given id, or `None` if it does not exist.
    #[must_use]
    pub fn get(&self, id: PostId) -> Option<Post> {
        self.state().by_id.get(&id).cloned()
    }

    /// Returns up to `n` posts, most recently added first.
    ///
    /// Edits do not change a post's position. The returned vector is an
    /// independent copy of the current state.
    #[must_use]
    pub fn most_recent(&self, n: usize) -> Vec<Post> {
        let state = self.state();
        state
            .by_time_added
            .iter()
            .rev()
            .filter_map(|id| state.by_id.get(id))
            .take(n)
            .cloned()
            .collect()
    }

    /// Number of posts currently present.
    #[must_use]
    pub fn len(&self) -> usize {
        self.state().by_id.len()
    }

    /// Whether the store holds no posts.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.state().by_id.is_empty()
    }

    /// Folds one event into the store, returning the store for chaining.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::IdentifierConflict` if an `Added` event reuses an
    /// id that is present, and `DomainError::TargetNotFound` if an `Edited` or
    /// `Deleted` event names an id that is not. The store is left unchanged
    /// on error.
    pub fn apply(&self, event: PostEvent) -> Result<&Self, DomainError> {
        let mut guard = self.state();
        let state = &mut *guard;

        match event {
            PostEvent::Added(PostAdded { post_id, content }) => {
                match state.by_id.entry(post_id) {
                    Entry::Occupied(_) => {
                        return Err(DomainError::IdentifierConflict(post_id.into()));
                    }
                    Entry::Vacant(slot) => {
                        slot.insert(Post::new(post_id, content));
                    }
                }
                state.by_time_added.push(post_id);
            }
            PostEvent::Edited(PostEdited { post_id, content }) => {
                let post = state
                    .by_id
                    .get_mut(&post_id)
                    .ok_or_else(|| DomainError::TargetNotFound(post_id.into()))?;
                post.replace_content(content);
            }
            PostEvent::Deleted(PostDeleted { post_id }) => {
                if state.by_id.remove(&post_id).is_none() {
                    return Err(DomainError::TargetNotFound(post_id.into()));
                }
                state.by_time_added.retain(|id| *id != post_id);
            }
        }

        Ok(self)
    }
}
