use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::User;

/// Public view of an account: the only identity fields ever sent alongside
/// posts or profiles. No email, no credentials.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthorView {
    pub id: Uuid,
    pub username: String,
    pub profile_image_url: String,
}

impl From<&User> for AuthorView {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            profile_image_url: user.profile_image_url.clone(),
        }
    }
}
