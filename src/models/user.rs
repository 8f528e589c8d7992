use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A registered account in the identity directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub username: String,
    pub profile_image_url: String,
    #[serde(skip_serializing)]
    pub hashed_password: String,
    pub created_at: i64,
}
