use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use uuid::Uuid;

use crate::{
    errors::ApiError,
    models::Post,
    store::{NewPost, PostStore},
};

/// A stored post tagged with its insertion sequence number. Timestamps have
/// second resolution, so the sequence is what keeps listings stable when
/// several posts land within the same second.
#[derive(Debug, Clone)]
struct StoredPost {
    seq: u64,
    post: Post,
}

/// In-memory post store on a concurrent map. State lives for the process
/// lifetime; all consistency comes from DashMap's internal sharding.
#[derive(Default)]
pub struct InMemoryPostStore {
    posts: DashMap<Uuid, StoredPost>,
    seq: AtomicU64,
}

impl InMemoryPostStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn sorted(&self, mut rows: Vec<StoredPost>, limit: usize) -> Vec<Post> {
        // Newest first; insertion order breaks timestamp ties
        rows.sort_by(|a, b| (b.post.created_at, b.seq).cmp(&(a.post.created_at, a.seq)));
        rows.into_iter().take(limit).map(|row| row.post).collect()
    }
}

#[async_trait]
impl PostStore for InMemoryPostStore {
    async fn create(&self, new_post: NewPost) -> Result<Post, ApiError> {
        let post = Post {
            id: Uuid::new_v4(),
            author_id: new_post.author_id,
            content: new_post.content,
            created_at: Utc::now().timestamp(),
        };

        let seq = self.seq.fetch_add(1, Ordering::Relaxed);
        self.posts.insert(post.id, StoredPost {
            seq,
            post: post.clone(),
        });

        Ok(post)
    }

    async fn list_recent(&self, limit: usize) -> Result<Vec<Post>, ApiError> {
        let rows: Vec<StoredPost> = self.posts.iter().map(|entry| entry.value().clone()).collect();

        Ok(self.sorted(rows, limit))
    }

    async fn list_by_author(&self, author_id: Uuid, limit: usize) -> Result<Vec<Post>, ApiError> {
        let rows: Vec<StoredPost> = self
            .posts
            .iter()
            .filter(|entry| entry.value().post.author_id == author_id)
            .map(|entry| entry.value().clone())
            .collect();

        Ok(self.sorted(rows, limit))
    }
}
