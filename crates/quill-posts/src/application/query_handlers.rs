//! Query handlers for the Posts context.
//!
//! This module projects store results into read-only view DTOs.

use quill_core::error::DomainError;
use serde::Serialize;

use crate::domain::post::Post;
use crate::domain::post_id::PostId;
use crate::domain::store::PostStore;

/// Read-only view of a post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostView {
    /// The post identifier.
    pub post_id: PostId,
    /// Who wrote the post.
    pub author: String,
    /// Post title.
    pub title: String,
    /// Post body.
    pub content: String,
}

impl From<Post> for PostView {
    fn from(post: Post) -> Self {
        let (post_id, content) = post.into_parts();
        Self {
            post_id,
            author: content.author,
            title: content.title,
            content: content.body,
        }
    }
}

/// Retrieves a post by its identifier.
///
/// # Errors
///
/// Returns `DomainError::PostNotFound` if no such post currently exists.
pub fn get_post_by_id(post_id: PostId, store: &PostStore) -> Result<PostView, DomainError> {
    store
        .get(post_id)
        .map(PostView::from)
        .ok_or_else(|| DomainError::PostNotFound(post_id.as_uuid()))
}

/// Lists up to `limit` posts, most recently added first.
#[must_use]
pub fn list_recent_posts(limit: usize, store: &PostStore) -> Vec<PostView> {
    store
        .most_recent(limit)
        .into_iter()
        .map(PostView::from)
        .collect()
}
