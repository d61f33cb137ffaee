//! In-process post storage.
//!
//! Posts are kept in insertion order alongside a counter for the next identifier. Nothing is
//! persisted: every new store starts from the seed set (or empty, for tests). All lookups are
//! linear scans.

use crate::seed::seed_posts;
use crate::wire::Post;
use std::sync::{Mutex, MutexGuard, PoisonError};

#[derive(Debug)]
struct StoreInner {
    posts: Vec<Post>,
    next_id: u64,
}

/// Ordered post collection plus its identifier counter.
///
/// Each method takes the lock once, so a single call is atomic. Sequences of calls are not.
#[derive(Debug)]
pub struct PostStore {
    inner: Mutex<StoreInner>,
}

impl PostStore {
    /// Creates a store holding `posts`, with the counter set past the largest existing id.
    pub fn with_posts(posts: Vec<Post>) -> Self {
        let next_id = posts.iter().map(|p| p.id).max().unwrap_or(0) + 1;
        Self {
            inner: Mutex::new(StoreInner { posts, next_id }),
        }
    }

    /// Creates a store loaded with the seed posts (ids 1 to 4, next id 5).
    pub fn seeded() -> Self {
        Self::with_posts(seed_posts())
    }

    pub fn empty() -> Self {
        Self::with_posts(Vec::new())
    }

    fn lock(&self) -> MutexGuard<'_, StoreInner> {
        // The inner state is always left consistent, so a poisoned lock is still usable.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Appends the post produced by `build`, handing it the next identifier.
    ///
    /// The counter only moves forward, so identifiers are never reused even after deletion.
    pub fn append_with<F>(&self, build: F) -> Post
    where
        F: FnOnce(u64) -> Post,
    {
        let mut inner = self.lock();
        let post = build(inner.next_id);
        inner.next_id = inner.next_id.max(post.id) + 1;
        inner.posts.push(post.clone());
        post
    }

    pub fn find(&self, id: u64) -> Option<Post> {
        self.lock().posts.iter().find(|p| p.id == id).cloned()
    }

    /// Replaces the post with the given id in place. Returns `false` if no such post exists.
    pub fn replace(&self, id: u64, post: Post) -> bool {
        let mut inner = self.lock();
        match inner.posts.iter_mut().find(|p| p.id == id) {
            Some(slot) => {
                *slot = post;
                true
            }
            None => false,
        }
    }

    pub fn remove(&self, id: u64) -> Option<Post> {
        let mut inner = self.lock();
        let index = inner.posts.iter().position(|p| p.id == id)?;
        Some(inner.posts.remove(index))
    }

    /// Returns up to `limit` posts starting at offset `skip`, in insertion order.
    pub fn page(&self, skip: usize, limit: usize) -> Vec<Post> {
        self.lock()
            .posts
            .iter()
            .skip(skip)
            .take(limit)
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.lock().posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn next_id(&self) -> u64 {
        self.lock().next_id
    }
}

impl Default for PostStore {
    fn default() -> Self {
        Self::seeded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn post(id: u64, owner: &str) -> Post {
        Post {
            id,
            owner: owner.into(),
            created_at: Utc::now(),
            title: format!("post {id}"),
            image_ref: "img.jpg".into(),
            description: None,
            external_url: None,
            tags: vec![],
            alt_text: None,
        }
    }

    #[test]
    fn seeded_store_holds_four_posts_and_next_id_five() {
        let store = PostStore::seeded();
        assert_eq!(store.len(), 4);
        assert_eq!(store.next_id(), 5);

        let ids: Vec<u64> = store.page(0, 10).iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);

        let owners: Vec<String> = store.page(0, 10).into_iter().map(|p| p.owner).collect();
        assert_eq!(owners, vec!["admin", "admin", "tania", "tania"]);
    }

    #[test]
    fn append_hands_out_increasing_ids() {
        let store = PostStore::empty();
        let a = store.append_with(|id| post(id, "alice"));
        let b = store.append_with(|id| post(id, "bob"));
        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
        assert_eq!(store.next_id(), 3);
    }

    #[test]
    fn ids_are_not_reused_after_removal() {
        let store = PostStore::empty();
        let a = store.append_with(|id| post(id, "alice"));
        assert!(store.remove(a.id).is_some());
        assert!(store.is_empty());

        let b = store.append_with(|id| post(id, "alice"));
        assert!(b.id > a.id);
    }

    #[test]
    fn replace_and_remove_report_missing_ids() {
        let store = PostStore::empty();
        assert!(!store.replace(42, post(42, "x")));
        assert!(store.remove(42).is_none());
        assert!(store.find(42).is_none());
    }

    #[test]
    fn replace_keeps_position() {
        let store = PostStore::seeded();
        let mut second = store.find(2).unwrap();
        second.title = "changed".into();
        assert!(store.replace(2, second));

        let page = store.page(0, 10);
        assert_eq!(page[1].id, 2);
        assert_eq!(page[1].title, "changed");
    }

    #[test]
    fn page_past_the_end_is_empty() {
        let store = PostStore::seeded();
        assert!(store.page(10, 10).is_empty());
        assert_eq!(store.page(3, 10).len(), 1);
    }
}
