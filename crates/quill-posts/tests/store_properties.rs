//! Behavioural tests for the post store and history loader.

use std::collections::HashSet;
use std::thread;

use quill_core::id::{IdGenerator, RandomIdGenerator};
use quill_posts::domain::events::{PostContent, PostEvent};
use quill_posts::domain::history::load_history;
use quill_posts::domain::post::Post;
use quill_posts::domain::post_id::PostId;
use quill_posts::domain::store::PostStore;
use quill_test_support::SequenceIdGenerator;

fn ids_of(posts: &[Post]) -> Vec<PostId> {
    posts.iter().map(Post::id).collect()
}

#[test]
fn test_worked_example_history() {
    // Arrange
    let ids = SequenceIdGenerator::numbered(3);
    let (p1, p2, p3) = (
        PostId::generate(&ids),
        PostId::generate(&ids),
        PostId::generate(&ids),
    );
    let events = vec![
        PostEvent::added(
            p1,
            PostContent::new("me", "First Post!", "This is the first blog post"),
        ),
        PostEvent::added(
            p2,
            PostContent::new(
                "me",
                "The world's best pulled pork",
                "Here is the recipe for the world's best pulled pork sandwiches",
            ),
        ),
        PostEvent::edited(
            p2,
            PostContent::new(
                "me",
                "Sometimes the world's best pulled pork",
                "Well, after last night, maybe this isn't the world's best.",
            ),
        ),
        PostEvent::added(
            p3,
            PostContent::new("me", "Grandma's chocolate chip cookies", "An old family favourite"),
        ),
        PostEvent::deleted(p1),
    ];

    // Act
    let store = load_history(&events).unwrap();

    // Assert
    assert_eq!(
        store.get(p2).unwrap().content().title,
        "Sometimes the world's best pulled pork"
    );
    assert!(store.get(p1).is_none());
    assert_eq!(ids_of(&store.most_recent(10)), vec![p3, p2]);
}

#[test]
fn test_folding_the_same_history_twice_gives_identical_stores() {
    // Arrange
    let ids = SequenceIdGenerator::numbered(4);
    let added: Vec<PostId> = (0..4).map(|_| PostId::generate(&ids)).collect();
    let mut events: Vec<PostEvent> = added
        .iter()
        .enumerate()
        .map(|(i, id)| PostEvent::added(*id, PostContent::new("me", format!("post {i}"), "")))
        .collect();
    events.push(PostEvent::edited(added[0], PostContent::new("me", "edited", "")));
    events.push(PostEvent::deleted(added[2]));

    // Act
    let first = load_history(&events).unwrap();
    let second = load_history(&events).unwrap();

    // Assert
    for n in 0..6 {
        assert_eq!(first.most_recent(n), second.most_recent(n));
    }
    for id in &added {
        assert_eq!(first.get(*id), second.get(*id));
    }
}

#[test]
fn test_most_recent_saturates_at_store_size() {
    // Arrange
    let ids = SequenceIdGenerator::numbered(3);
    let store = PostStore::new();
    let mut added = Vec::new();
    for i in 0..3 {
        let id = PostId::generate(&ids);
        store
            .apply(PostEvent::added(id, PostContent::new("me", format!("{i}"), "")))
            .unwrap();
        added.push(id);
    }
    added.reverse();

    // Act / Assert
    assert!(store.most_recent(0).is_empty());
    assert_eq!(ids_of(&store.most_recent(3)), added);
    for n in 3..10 {
        assert_eq!(store.most_recent(n), store.most_recent(3));
    }
}

#[test]
fn test_concurrent_adds_each_land_exactly_once() {
    // Arrange
    const WRITERS: usize = 32;
    let generator = RandomIdGenerator;
    let store = PostStore::new();
    let ids: Vec<PostId> = (0..WRITERS)
        .map(|_| PostId::from_uuid(generator.next_id()))
        .collect();

    // Act
    thread::scope(|scope| {
        for (i, id) in ids.iter().enumerate() {
            let store = &store;
            scope.spawn(move || {
                store
                    .apply(PostEvent::added(
                        *id,
                        PostContent::new("writer", format!("post {i}"), ""),
                    ))
                    .unwrap();
            });
        }
    });

    // Assert
    assert_eq!(store.len(), WRITERS);
    let recent: HashSet<PostId> = ids_of(&store.most_recent(WRITERS)).into_iter().collect();
    let expected: HashSet<PostId> = ids.into_iter().collect();
    assert_eq!(recent, expected);
}

#[test]
fn test_concurrent_readers_and_writers_keep_views_consistent() {
    // Arrange
    let ids = SequenceIdGenerator::numbered(64);
    let store = PostStore::new();
    let added: Vec<PostId> = (0..64).map(|_| PostId::generate(&ids)).collect();

    // Act
    thread::scope(|scope| {
        let store = &store;
        let added = &added;
        scope.spawn(move || {
            for id in added {
                store
                    .apply(PostEvent::added(*id, PostContent::new("me", "t", "")))
                    .unwrap();
                store.apply(PostEvent::deleted(*id)).unwrap();
            }
        });
        scope.spawn(move || {
            for _ in 0..256 {
                // Every post is deleted right after it is added, so a
                // consistent snapshot never shows more than one.
                assert!(store.most_recent(64).len() <= 1);
            }
        });
    });

    // Assert
    assert!(store.is_empty());
}
