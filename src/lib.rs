pub mod auth;
pub mod config;
pub mod dto;
pub mod errors;
pub mod identity;
pub mod models;
pub mod routes;
pub mod states;
pub mod store;
pub mod validation;

pub use errors::ApiError;
pub use states::AppState;

use std::time::Duration;

use axum::{
    Router,
    error_handling::HandleErrorLayer,
    routing::{get, post},
};
use tower::{BoxError, ServiceBuilder, limit::ConcurrencyLimitLayer};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::routes::{
    health::health_check,
    post::{create_post, get_posts, get_posts_by_user},
    profile::get_profile,
    user::{get_current_user, login, signup},
};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
const MAX_IN_FLIGHT_REQUESTS: usize = 1024;

async fn handle_middleware_error(err: BoxError) -> ApiError {
    if err.is::<tower::timeout::error::Elapsed>() {
        ApiError::Timeout
    } else {
        ApiError::InternalError(format!("Middleware failure: {err}"))
    }
}

/// Build the application router around the given state.
pub fn app(state: AppState) -> Router {
    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Public routes (no auth required)
        .route("/health", get(health_check))
        .route("/auth/signup", post(signup))
        .route("/auth/login", post(login))
        .route("/posts", post(create_post).get(get_posts))
        .route("/users/{user_id}/posts", get(get_posts_by_user))
        .route("/profiles/{slug}", get(get_profile))
        // Protected routes (auth required)
        .route("/users/me", get(get_current_user))
        // Add state and middleware
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(HandleErrorLayer::new(handle_middleware_error))
                .timeout(REQUEST_TIMEOUT)
                .layer(ConcurrencyLimitLayer::new(MAX_IN_FLIGHT_REQUESTS)),
        )
        .layer(cors)
}
