use crate::{AppState, errors::ApiError, models::AuthorView};
use axum::{
    Json,
    extract::{Path, State},
};

/// GET /profiles/{slug}
///
/// The slug is a username with an optional leading "@" marker, so
/// "/profiles/@alice" and "/profiles/alice" resolve the same account.
/// Returns the public profile only.
pub async fn get_profile(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<AuthorView>, ApiError> {
    let username = slug.strip_prefix('@').unwrap_or(&slug);

    if username.is_empty() {
        return Err(ApiError::ValidationError(
            "Profile slug must contain a username".into(),
        ));
    }

    let profile = state
        .identity
        .get_by_username(username)
        .await?
        .ok_or(ApiError::NotFound)?;

    Ok(Json(profile))
}
