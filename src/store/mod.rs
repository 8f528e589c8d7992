mod memory;

pub use memory::InMemoryPostStore;

use async_trait::async_trait;
use uuid::Uuid;

use crate::{errors::ApiError, models::Post};

/// Input for a post insert. `id` and `created_at` are assigned by the store.
#[derive(Debug, Clone)]
pub struct NewPost {
    pub author_id: Uuid,
    pub content: String,
}

/// The interface for storing post data. Handlers depend on this seam, not on
/// a concrete backend, so tests can swap in whatever state they need.
#[async_trait]
pub trait PostStore: Send + Sync {
    /// Insert a new post and return the stored record.
    async fn create(&self, new_post: NewPost) -> Result<Post, ApiError>;

    /// Up to `limit` posts across all authors, newest first.
    async fn list_recent(&self, limit: usize) -> Result<Vec<Post>, ApiError>;

    /// Up to `limit` posts by one author, newest first. Unknown authors
    /// yield an empty list.
    async fn list_by_author(&self, author_id: Uuid, limit: usize) -> Result<Vec<Post>, ApiError>;
}
