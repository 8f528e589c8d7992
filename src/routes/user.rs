use crate::{
    AppState,
    auth::{authenticate, create_token},
    dto::{AuthResponse, LoginRequest, SignupRequest, UserResponse},
    errors::ApiError,
    identity::NewUser,
};
use axum::{Json, extract::State, http::HeaderMap};
use bcrypt::{DEFAULT_COST, hash, verify};
use tracing::info;
use validator::Validate;

/// POST /auth/signup
/// Body: { "email": "...", "username": "...", "password": "..." }
pub async fn signup(
    State(state): State<AppState>,
    Json(payload): Json<SignupRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    payload
        .validate()
        .map_err(|e| ApiError::ValidationError(e.to_string()))?;

    let hashed_password = hash(&payload.password, DEFAULT_COST)
        .map_err(|e| ApiError::InternalError(format!("Password hashing failed: {}", e)))?;

    let user = state.directory.register(NewUser {
        email: payload.email,
        username: payload.username,
        hashed_password,
        profile_image_url: payload.profile_image_url,
    })?;

    let token = create_token(&user.id, &user.email, &state.jwt_secret)?;

    Ok(Json(AuthResponse {
        token,
        user: user.into(),
    }))
}

/// POST /auth/login
/// Body: { "email": "...", "password": "..." }
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    payload
        .validate()
        .map_err(|e| ApiError::ValidationError(e.to_string()))?;

    // Find user by email
    let user = state
        .directory
        .find_by_email(&payload.email)
        .ok_or(ApiError::InvalidCredentials)?;

    // Verify password
    let valid = verify(&payload.password, &user.hashed_password)
        .map_err(|e| ApiError::InternalError(format!("Password verification failed: {}", e)))?;

    if !valid {
        return Err(ApiError::InvalidCredentials);
    }

    // Generate token
    let token = create_token(&user.id, &user.email, &state.jwt_secret)?;

    info!("User logged in: {}", user.username);

    Ok(Json(AuthResponse {
        token,
        user: user.into(),
    }))
}

/// GET /users/me
/// Headers: Authorization: Bearer <token>
pub async fn get_current_user(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<UserResponse>, ApiError> {
    let user_id = authenticate(&headers, &state.jwt_secret)?;

    let user = state.directory.get(user_id).ok_or(ApiError::NotFound)?;

    Ok(Json(user.into()))
}
