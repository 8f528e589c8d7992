use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use tracing::info;
use uuid::Uuid;

use crate::{
    errors::ApiError,
    identity::IdentityClient,
    models::{AuthorView, User},
};

/// Account fields supplied at signup; the id and timestamp are assigned here.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub username: String,
    pub hashed_password: String,
    pub profile_image_url: Option<String>,
}

/// In-process account registry backing both authentication and the
/// `IdentityClient` read capability. Secondary indexes give O(1) lookup by
/// email (login) and username (profiles).
#[derive(Default)]
pub struct UserDirectory {
    users: DashMap<Uuid, User>,
    email_index: DashMap<String, Uuid>,
    username_index: DashMap<String, Uuid>,
}

impl UserDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new account. Email and username must both be unused.
    pub fn register(&self, new_user: NewUser) -> Result<User, ApiError> {
        if self.email_index.contains_key(&new_user.email)
            || self.username_index.contains_key(&new_user.username)
        {
            return Err(ApiError::UserAlreadyExists);
        }

        let profile_image_url = new_user
            .profile_image_url
            .unwrap_or_else(|| placeholder_avatar(&new_user.username));

        let user = User {
            id: Uuid::new_v4(),
            email: new_user.email,
            username: new_user.username,
            profile_image_url,
            hashed_password: new_user.hashed_password,
            created_at: Utc::now().timestamp(),
        };

        self.email_index.insert(user.email.clone(), user.id);
        self.username_index.insert(user.username.clone(), user.id);
        self.users.insert(user.id, user.clone());

        info!("New user registered: {}", user.username);

        Ok(user)
    }

    pub fn get(&self, id: Uuid) -> Option<User> {
        self.users.get(&id).map(|user| user.clone())
    }

    pub fn find_by_email(&self, email: &str) -> Option<User> {
        let id = *self.email_index.get(email)?;
        self.get(id)
    }
}

/// Deterministic avatar for accounts that sign up without an image.
fn placeholder_avatar(username: &str) -> String {
    format!("https://api.dicebear.com/9.x/identicon/svg?seed={username}")
}

#[async_trait]
impl IdentityClient for UserDirectory {
    async fn list_by_ids(&self, ids: &[Uuid], limit: usize) -> Result<Vec<AuthorView>, ApiError> {
        Ok(ids
            .iter()
            .filter_map(|id| self.users.get(id))
            .map(|user| AuthorView::from(&*user))
            .take(limit)
            .collect())
    }

    async fn get_by_username(&self, username: &str) -> Result<Option<AuthorView>, ApiError> {
        let Some(id) = self.username_index.get(username).map(|id| *id) else {
            return Ok(None);
        };

        Ok(self.users.get(&id).map(|user| AuthorView::from(&*user)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_user(email: &str, username: &str) -> NewUser {
        NewUser {
            email: email.to_string(),
            username: username.to_string(),
            hashed_password: "$2b$12$not-a-real-hash".to_string(),
            profile_image_url: None,
        }
    }

    #[test]
    fn register_rejects_duplicate_email_and_username() {
        let directory = UserDirectory::new();
        directory.register(new_user("a@example.com", "alice")).unwrap();

        let same_email = directory.register(new_user("a@example.com", "alice2"));
        assert!(matches!(same_email, Err(ApiError::UserAlreadyExists)));

        let same_username = directory.register(new_user("a2@example.com", "alice"));
        assert!(matches!(same_username, Err(ApiError::UserAlreadyExists)));
    }

    #[test]
    fn missing_image_gets_placeholder() {
        let directory = UserDirectory::new();
        let user = directory.register(new_user("a@example.com", "alice")).unwrap();
        assert!(user.profile_image_url.contains("alice"));
    }

    #[tokio::test]
    async fn list_by_ids_skips_unknown_ids() {
        let directory = UserDirectory::new();
        let alice = directory.register(new_user("a@example.com", "alice")).unwrap();

        let views = directory
            .list_by_ids(&[alice.id, Uuid::new_v4()], 100)
            .await
            .unwrap();

        assert_eq!(views.len(), 1);
        assert_eq!(views[0].username, "alice");
    }

    #[tokio::test]
    async fn username_lookup_returns_public_fields() {
        let directory = UserDirectory::new();
        let alice = directory.register(new_user("a@example.com", "alice")).unwrap();

        let view = directory.get_by_username("alice").await.unwrap().unwrap();
        assert_eq!(view.id, alice.id);
        assert_eq!(view.profile_image_url, alice.profile_image_url);

        assert!(directory.get_by_username("bob").await.unwrap().is_none());
    }
}
