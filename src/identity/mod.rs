mod directory;

pub use directory::{NewUser, UserDirectory};

use async_trait::async_trait;
use uuid::Uuid;

use crate::{errors::ApiError, models::AuthorView};

/// Read capability over the identity provider: everything post and profile
/// handlers are allowed to know about accounts. Only public fields come
/// back through this interface.
#[async_trait]
pub trait IdentityClient: Send + Sync {
    /// Resolve a batch of user ids in one call, capped at `limit` records.
    /// Unknown ids are simply absent from the result.
    async fn list_by_ids(&self, ids: &[Uuid], limit: usize) -> Result<Vec<AuthorView>, ApiError>;

    /// Look up one account by exact username.
    async fn get_by_username(&self, username: &str) -> Result<Option<AuthorView>, ApiError>;
}
