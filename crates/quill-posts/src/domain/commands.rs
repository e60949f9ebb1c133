//! Commands for the Posts context.

use quill_core::command::Command;
use uuid::Uuid;

use super::events::PostContent;
use super::post_id::PostId;

/// Command to publish a new post.
#[derive(Debug, Clone)]
pub struct AddPost {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// Content of the new post.
    pub content: PostContent,
}

/// Command to replace the content of an existing post.
#[derive(Debug, Clone)]
pub struct EditPost {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The post to edit.
    pub post_id: PostId,
    /// The replacement content.
    pub content: PostContent,
}

/// Command to remove a post.
#[derive(Debug, Clone)]
pub struct DeletePost {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The post to remove.
    pub post_id: PostId,
}

impl Command for AddPost {
    fn command_type(&self) -> &'static str {
        "posts.add_post"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

impl Command for EditPost {
    fn command_type(&self) -> &'static str {
        "posts.edit_post"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

impl Command for DeletePost {
    fn command_type(&self) -> &'static str {
        "posts.delete_post"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}
