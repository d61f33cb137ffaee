//! Post service: list, get, create, update and delete over a [`PostStore`].
//!
//! Ownership is a plain equality check between the stored owner and the identity the caller
//! asserts for the request. The identity itself is not verified here.

use crate::constants::DEFAULT_PAGE_LIMIT;
use crate::store::PostStore;
use crate::wire::{NewPost, Post, PostPatch};
use crate::{FeedError, FeedResult};
use chrono::Utc;
use std::sync::Arc;

/// Clamps raw pagination values: negative `skip` becomes 0, non-positive `limit` becomes the
/// default page size.
pub fn clamp_page(skip: i64, limit: i64) -> (usize, usize) {
    let skip = usize::try_from(skip.max(0)).unwrap_or(usize::MAX);
    let limit = if limit <= 0 {
        DEFAULT_PAGE_LIMIT
    } else {
        usize::try_from(limit).unwrap_or(usize::MAX)
    };
    (skip, limit)
}

fn require(field: &str, value: Option<String>) -> FeedResult<String> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(FeedError::Validation(format!("{field} is required"))),
    }
}

fn reject_empty(field: &str, value: &Option<String>) -> FeedResult<()> {
    if matches!(value, Some(v) if v.is_empty()) {
        return Err(FeedError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Post operations backed by a shared store.
///
/// Cloning is cheap: clones share the same store.
#[derive(Clone, Debug)]
pub struct PostService {
    store: Arc<PostStore>,
}

impl PostService {
    /// Creates a service over the given store.
    pub fn new(store: Arc<PostStore>) -> Self {
        Self { store }
    }

    /// Number of posts currently stored.
    pub fn count(&self) -> usize {
        self.store.len()
    }

    /// Returns a page of posts in creation order.
    ///
    /// Out-of-range values are clamped with [`clamp_page`] rather than rejected.
    pub fn list(&self, skip: i64, limit: i64) -> Vec<Post> {
        let (skip, limit) = clamp_page(skip, limit);
        self.store.page(skip, limit)
    }

    /// Returns the post with the given id.
    ///
    /// # Errors
    ///
    /// Returns [`FeedError::NotFound`] if no post has that id.
    pub fn get(&self, id: u64) -> FeedResult<Post> {
        self.store.find(id).ok_or(FeedError::NotFound(id))
    }

    /// Creates a post owned by `caller`.
    ///
    /// The store assigns the id, the owner is the caller and the creation time is the current
    /// server time. When no alt text is given (or it is empty) the title is used.
    ///
    /// # Errors
    ///
    /// Returns [`FeedError::Validation`] if `title` or `image_ref` is missing or empty.
    pub fn create(&self, input: NewPost, caller: &str) -> FeedResult<Post> {
        let title = require("title", input.title)?;
        let image_ref = require("imageRef", input.image_ref)?;
        let alt_text = input
            .alt_text
            .filter(|a| !a.is_empty())
            .unwrap_or_else(|| title.clone());

        let post = self.store.append_with(|id| Post {
            id,
            owner: caller.to_string(),
            created_at: Utc::now(),
            title,
            image_ref,
            description: input.description,
            external_url: input.external_url,
            tags: input.tags.unwrap_or_default(),
            alt_text: Some(alt_text),
        });

        tracing::info!(post_id = post.id, owner = %post.owner, "post created");
        Ok(post)
    }

    /// Applies the present fields of `patch` to the post with the given id.
    ///
    /// `id`, `owner` and `created_at` are never changed.
    ///
    /// # Errors
    ///
    /// - [`FeedError::NotFound`] if no post has that id
    /// - [`FeedError::Forbidden`] if `caller` is not the post's owner
    /// - [`FeedError::Validation`] if the patch sets `title` or `image_ref` to an empty string
    pub fn update(&self, id: u64, patch: PostPatch, caller: &str) -> FeedResult<Post> {
        let mut post = self.get(id)?;
        if post.owner != caller {
            tracing::warn!(post_id = id, caller, "update rejected: not the owner");
            return Err(FeedError::Forbidden);
        }

        reject_empty("title", &patch.title)?;
        reject_empty("imageRef", &patch.image_ref)?;

        if let Some(title) = patch.title {
            post.title = title;
        }
        if let Some(image_ref) = patch.image_ref {
            post.image_ref = image_ref;
        }
        if let Some(description) = patch.description {
            post.description = Some(description);
        }
        if let Some(external_url) = patch.external_url {
            post.external_url = Some(external_url);
        }
        if let Some(tags) = patch.tags {
            post.tags = tags;
        }
        if let Some(alt_text) = patch.alt_text {
            post.alt_text = Some(alt_text);
        }

        if !self.store.replace(id, post.clone()) {
            // Removed between the lookup and the write.
            return Err(FeedError::NotFound(id));
        }

        tracing::info!(post_id = id, owner = %post.owner, "post updated");
        Ok(post)
    }

    /// Deletes the post with the given id.
    ///
    /// # Errors
    ///
    /// - [`FeedError::NotFound`] if no post has that id
    /// - [`FeedError::Forbidden`] if `caller` is not the post's owner
    pub fn delete(&self, id: u64, caller: &str) -> FeedResult<()> {
        let post = self.get(id)?;
        if post.owner != caller {
            tracing::warn!(post_id = id, caller, "delete rejected: not the owner");
            return Err(FeedError::Forbidden);
        }

        self.store.remove(id).ok_or(FeedError::NotFound(id))?;
        tracing::info!(post_id = id, owner = %post.owner, "post deleted");
        Ok(())
    }
}

impl Default for PostService {
    fn default() -> Self {
        Self::new(Arc::new(PostStore::seeded()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> PostService {
        PostService::default()
    }

    fn new_post(title: &str, image_ref: &str) -> NewPost {
        NewPost {
            title: Some(title.into()),
            image_ref: Some(image_ref.into()),
            ..NewPost::default()
        }
    }

    #[test]
    fn default_listing_returns_seed_posts_in_order() {
        let posts = service().list(0, 10);
        let ids: Vec<u64> = posts.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn pagination_is_clamped() {
        let svc = service();
        assert_eq!(svc.list(-5, 0), svc.list(0, 10));
        assert_eq!(clamp_page(-5, 0), (0, DEFAULT_PAGE_LIMIT));
        assert_eq!(clamp_page(2, -1), (2, DEFAULT_PAGE_LIMIT));
    }

    #[test]
    fn pagination_windows_the_store() {
        let svc = service();
        let ids: Vec<u64> = svc.list(1, 2).iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 3]);
        assert!(svc.list(100, 10).is_empty());
    }

    #[test]
    fn get_unknown_id_is_not_found() {
        let err = service().get(999).expect_err("should be missing");
        assert!(matches!(err, FeedError::NotFound(999)));
    }

    #[test]
    fn create_assigns_owner_id_and_defaults() {
        let svc = service();
        let before = Utc::now();
        let post = svc.create(new_post("T", "i.jpg"), "alice").unwrap();

        assert_eq!(post.id, 5);
        assert_eq!(post.owner, "alice");
        assert_eq!(post.alt_text.as_deref(), Some("T"));
        assert!(post.tags.is_empty());
        assert!(post.created_at >= before);
        assert_eq!(svc.get(5).unwrap(), post);
        assert_eq!(svc.count(), 5);
    }

    #[test]
    fn create_keeps_explicit_alt_text_and_optional_fields() {
        let input = NewPost {
            description: Some("d".into()),
            external_url: Some("https://example.com".into()),
            tags: Some(vec!["a".into(), "b".into()]),
            alt_text: Some("alt".into()),
            ..new_post("T", "i.jpg")
        };
        let post = service().create(input, "alice").unwrap();

        assert_eq!(post.alt_text.as_deref(), Some("alt"));
        assert_eq!(post.description.as_deref(), Some("d"));
        assert_eq!(post.external_url.as_deref(), Some("https://example.com"));
        assert_eq!(post.tags, vec!["a", "b"]);
    }

    #[test]
    fn create_requires_title_and_image() {
        let svc = service();
        for input in [
            new_post("", "x"),
            new_post("t", ""),
            NewPost {
                image_ref: Some("x".into()),
                ..NewPost::default()
            },
            NewPost {
                title: Some("t".into()),
                ..NewPost::default()
            },
        ] {
            let err = svc.create(input, "bob").expect_err("should fail validation");
            assert!(matches!(err, FeedError::Validation(_)), "{err:?}");
        }
        assert_eq!(svc.count(), 4);
    }

    #[test]
    fn ids_increase_and_are_never_reused() {
        let svc = service();
        let mut seen = vec![4];
        for i in 0..5 {
            let post = svc.create(new_post(&format!("p{i}"), "x.jpg"), "alice").unwrap();
            assert!(seen.iter().all(|&prev| post.id > prev));
            seen.push(post.id);
            if i % 2 == 0 {
                svc.delete(post.id, "alice").unwrap();
            }
        }
    }

    #[test]
    fn partial_update_changes_only_given_fields() {
        let svc = service();
        let before = svc.get(1).unwrap();
        let patch = PostPatch {
            title: Some("X".into()),
            ..PostPatch::default()
        };

        let after = svc.update(1, patch, "admin").unwrap();
        assert_eq!(after.title, "X");
        assert_eq!(
            Post {
                title: before.title.clone(),
                ..after.clone()
            },
            before
        );
        assert_eq!(svc.get(1).unwrap(), after);
    }

    #[test]
    fn update_applies_every_present_field() {
        let svc = service();
        let patch = PostPatch {
            title: Some("t".into()),
            image_ref: Some("new.jpg".into()),
            description: Some("d".into()),
            external_url: Some("https://e".into()),
            tags: Some(vec![]),
            alt_text: Some("a".into()),
        };

        let post = svc.update(3, patch, "tania").unwrap();
        assert_eq!(post.id, 3);
        assert_eq!(post.owner, "tania");
        assert_eq!(post.image_ref, "new.jpg");
        assert_eq!(post.external_url.as_deref(), Some("https://e"));
        assert!(post.tags.is_empty());
        assert_eq!(post.alt_text.as_deref(), Some("a"));
    }

    #[test]
    fn non_owner_cannot_update_or_delete() {
        let svc = service();
        let before = svc.get(3).unwrap();
        let patch = PostPatch {
            title: Some("hijacked".into()),
            ..PostPatch::default()
        };

        assert!(matches!(
            svc.update(3, patch, "admin"),
            Err(FeedError::Forbidden)
        ));
        assert!(matches!(svc.delete(3, "bob"), Err(FeedError::Forbidden)));
        assert_eq!(svc.get(3).unwrap(), before);
    }

    #[test]
    fn update_and_delete_unknown_id_are_not_found() {
        let svc = service();
        assert!(matches!(
            svc.update(77, PostPatch::default(), "admin"),
            Err(FeedError::NotFound(77))
        ));
        assert!(matches!(svc.delete(77, "admin"), Err(FeedError::NotFound(77))));
    }

    #[test]
    fn update_rejects_emptying_required_fields() {
        let svc = service();
        let patch = PostPatch {
            image_ref: Some(String::new()),
            ..PostPatch::default()
        };
        assert!(matches!(
            svc.update(1, patch, "admin"),
            Err(FeedError::Validation(_))
        ));
    }

    #[test]
    fn owner_can_delete() {
        let svc = service();
        svc.delete(2, "admin").unwrap();
        assert!(matches!(svc.get(2), Err(FeedError::NotFound(2))));
        let ids: Vec<u64> = svc.list(0, 10).iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 3, 4]);
    }

    #[test]
    fn services_sharing_a_store_see_each_other() {
        let store = Arc::new(PostStore::empty());
        let a = PostService::new(store.clone());
        let b = a.clone();
        a.create(new_post("T", "i.jpg"), "alice").unwrap();
        assert_eq!(b.count(), 1);
        assert_eq!(store.len(), 1);
    }
}
