use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A user-authored emoji post. `id` and `created_at` are assigned by the
/// store; `author_id` references the identity directory but is not
/// foreign-key-enforced there.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub author_id: Uuid,
    pub content: String,
    pub created_at: i64,
}
