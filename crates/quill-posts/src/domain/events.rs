//! Domain events for the Posts context.

use quill_core::event::DomainEvent;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::post_id::PostId;

/// The author-supplied content of a post. Replaced wholesale on edit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostContent {
    /// Who wrote the post.
    pub author: String,
    /// Post title.
    pub title: String,
    /// Post body (Markdown).
    pub body: String,
}

impl PostContent {
    /// Creates post content from its three parts.
    pub fn new(author: impl Into<String>, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            author: author.into(),
            title: title.into(),
            body: body.into(),
        }
    }
}

/// Emitted when a new post is introduced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostAdded {
    /// The new post's identifier.
    pub post_id: PostId,
    /// The new post's content.
    pub content: PostContent,
}

/// Emitted when the content of an existing post is replaced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostEdited {
    /// The post being edited.
    pub post_id: PostId,
    /// The replacement content.
    pub content: PostContent,
}

/// Emitted when a post is removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostDeleted {
    /// The post being removed.
    pub post_id: PostId,
}

/// Closed set of mutations to the post collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PostEvent {
    /// A post has been added.
    Added(PostAdded),
    /// A post's content has been replaced.
    Edited(PostEdited),
    /// A post has been deleted.
    Deleted(PostDeleted),
}

impl PostEvent {
    /// Builds an `Added` event.
    #[must_use]
    pub fn added(post_id: PostId, content: PostContent) -> Self {
        Self::Added(PostAdded { post_id, content })
    }

    /// Builds an `Edited` event.
    #[must_use]
    pub fn edited(post_id: PostId, content: PostContent) -> Self {
        Self::Edited(PostEdited { post_id, content })
    }

    /// Builds a `Deleted` event.
    #[must_use]
    pub fn deleted(post_id: PostId) -> Self {
        Self::Deleted(PostDeleted { post_id })
    }

    /// The post this event targets.
    #[must_use]
    pub fn post_id(&self) -> PostId {
        match self {
            Self::Added(payload) => payload.post_id,
            Self::Edited(payload) => payload.post_id,
            Self::Deleted(payload) => payload.post_id,
        }
    }
}

impl DomainEvent for PostEvent {
    fn event_type(&self) -> &'static str {
        match self {
            Self::Added(_) => "posts.added",
            Self::Edited(_) => "posts.edited",
            Self::Deleted(_) => "posts.deleted",
        }
    }

    fn aggregate_id(&self) -> Uuid {
        self.post_id().as_uuid()
    }

    fn to_payload(&self) -> serde_json::Value {
        // Serialization of derived Serialize types to Value is infallible.
        serde_json::to_value(self).expect("PostEvent serialization is infallible")
    }
}
