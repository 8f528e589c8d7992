use crate::errors::ApiError;
use axum::http::{HeaderMap, header};
use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // Subject (user ID)
    pub email: String,
    pub exp: usize,
}

pub fn create_token(user_id: &Uuid, email: &str, secret: &str) -> Result<String, ApiError> {
    let expiration = Utc::now()
        .checked_add_signed(Duration::hours(24))
        .ok_or_else(|| ApiError::InternalError("Failed to calculate expiration".into()))?
        .timestamp() as usize;

    let claims = Claims {
        sub: user_id.to_string(),
        email: email.to_string(),
        exp: expiration,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| ApiError::InternalError(format!("Token creation failed: {}", e)))
}

fn bearer_token(headers: &HeaderMap) -> Result<&str, ApiError> {
    let auth_header = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or(ApiError::Unauthenticated)?;

    auth_header
        .strip_prefix("Bearer ")
        .ok_or(ApiError::Unauthenticated)
}

/// Resolve the bearer token in `headers` to the caller's user id.
/// Missing header, malformed token and expired claims all read as an
/// unauthenticated caller.
pub fn authenticate(headers: &HeaderMap, secret: &str) -> Result<Uuid, ApiError> {
    let token = bearer_token(headers)?;

    let claims = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|_| ApiError::Unauthenticated)?;

    Uuid::parse_str(&claims.sub).map_err(|_| ApiError::Unauthenticated)
}
