//! The `Post` record, as derived from the event fold.

use super::events::PostContent;
use super::post_id::PostId;

/// A blog post. Only the store constructs these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    id: PostId,
    content: PostContent,
}

impl Post {
    pub(crate) fn new(id: PostId, content: PostContent) -> Self {
        Self { id, content }
    }

    /// The post's identifier.
    #[must_use]
    pub fn id(&self) -> PostId {
        self.id
    }

    /// The post's current content.
    #[must_use]
    pub fn content(&self) -> &PostContent {
        &self.content
    }

    /// Splits the post into its identifier and content.
    #[must_use]
    pub fn into_parts(self) -> (PostId, PostContent) {
        (self.id, self.content)
    }

    pub(crate) fn replace_content(&mut self, content: PostContent) {
        self.content = content;
    }
}
