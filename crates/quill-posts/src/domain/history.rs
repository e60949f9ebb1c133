//! Building a `PostStore` from an existing sequence of events.

use quill_core::error::DomainError;
use quill_core::id::IdGenerator;

use super::events::{PostContent, PostEvent};
use super::post_id::PostId;
use super::store::PostStore;

/// Folds `events`, in order, into a brand-new store.
///
/// The caller's events are left untouched.
///
/// # Errors
///
/// Returns the first error raised by `PostStore::apply`; later events are
/// not applied.
pub fn load_history(events: &[PostEvent]) -> Result<PostStore, DomainError> {
    let store = PostStore::new();
    for event in events {
        store.apply(event.clone())?;
    }
    Ok(store)
}

/// The history a fresh blog starts from: a single welcome post.
#[must_use]
pub fn seed_history(ids: &dyn IdGenerator) -> Vec<PostEvent> {
    vec![PostEvent::added(
        PostId::generate(ids),
        PostContent::new(
            "test@test.com",
            "First Post",
            "Your blog is all setup. Start adding posts!",
        ),
    )]
}
