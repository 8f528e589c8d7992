use std::sync::Arc;

use governor::{Quota, RateLimiter, clock::DefaultClock, state::keyed::DefaultKeyedStateStore};
use uuid::Uuid;

use crate::{
    config::Config,
    identity::{IdentityClient, UserDirectory},
    store::{InMemoryPostStore, PostStore},
};

/// Per-author quota on post creation.
pub type CreateLimiter = RateLimiter<Uuid, DefaultKeyedStateStore<Uuid>, DefaultClock>;

// ============================================================================
// APPLICATION STATE - Shared data across all requests
// ============================================================================
/// Handlers reach the outside world only through the `PostStore` and
/// `IdentityClient` capability seams held here, so tests can inject
/// whatever backends (or inconsistent data) they need.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostStore>,
    pub directory: Arc<UserDirectory>,
    pub identity: Arc<dyn IdentityClient>,
    pub create_limiter: Arc<CreateLimiter>,
    pub jwt_secret: String,
}

impl AppState {
    /// Production wiring: in-memory store and directory, with the directory
    /// doubling as the identity read capability.
    pub fn new(config: &Config) -> Self {
        let directory = Arc::new(UserDirectory::new());
        let identity: Arc<dyn IdentityClient> = directory.clone();

        Self {
            posts: Arc::new(InMemoryPostStore::new()),
            identity,
            directory,
            create_limiter: Arc::new(RateLimiter::keyed(Quota::per_minute(
                config.create_posts_per_minute,
            ))),
            jwt_secret: config.jwt_secret.clone(),
        }
    }
}
