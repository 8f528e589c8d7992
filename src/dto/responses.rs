use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{AuthorView, Post, User};

#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: UserResponse,
}

/// Private view of an account, only ever returned to its owner.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub email: String,
    pub username: String,
    pub profile_image_url: String,
    pub created_at: i64,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            username: user.username,
            profile_image_url: user.profile_image_url,
            created_at: user.created_at,
        }
    }
}

/// Feed unit: a post joined to the public view of its author. Pure join
/// product, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostWithAuthor {
    pub post: Post,
    pub author: AuthorView,
}
