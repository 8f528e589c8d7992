use crate::{
    AppState,
    auth::authenticate,
    dto::{CreatePostRequest, PostWithAuthor},
    errors::ApiError,
    models::{AuthorView, Post},
    store::NewPost,
};
use axum::{
    Json,
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
};
use std::collections::HashMap;
use tracing::info;
use uuid::Uuid;
use validator::Validate;

/// Listing operations never return more than this many posts, and author
/// resolution is batched under the same cap.
const FEED_LIMIT: usize = 100;

/// GET /posts
///
/// The aggregate feed: up to 100 newest posts, each joined to the public
/// view of its author. Authors are resolved in a single batched directory
/// call. The join is all-or-nothing: a post whose author cannot be resolved
/// fails the whole request, it is never silently dropped.
pub async fn get_posts(State(state): State<AppState>) -> Result<Json<Vec<PostWithAuthor>>, ApiError> {
    let posts = state.posts.list_recent(FEED_LIMIT).await?;

    let mut author_ids: Vec<Uuid> = posts.iter().map(|post| post.author_id).collect();
    author_ids.sort_unstable();
    author_ids.dedup();

    let authors: HashMap<Uuid, AuthorView> = state
        .identity
        .list_by_ids(&author_ids, FEED_LIMIT)
        .await?
        .into_iter()
        .map(|author| (author.id, author))
        .collect();

    let feed = posts
        .into_iter()
        .map(|post| {
            let author = authors
                .get(&post.author_id)
                .cloned()
                .ok_or_else(|| {
                    ApiError::InternalError(format!("Author for post {} not found", post.id))
                })?;

            Ok(PostWithAuthor { post, author })
        })
        .collect::<Result<Vec<_>, ApiError>>()?;

    Ok(Json(feed))
}

/// GET /users/{user_id}/posts
///
/// Profile feed: up to 100 newest posts by one author, bare (no author
/// join). An unknown author is an empty feed, not an error.
pub async fn get_posts_by_user(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<Vec<Post>>, ApiError> {
    let posts = state.posts.list_by_author(user_id, FEED_LIMIT).await?;

    Ok(Json(posts))
}

/// POST /posts
/// Headers: Authorization: Bearer <token>
/// Body: { "content": "🙂" }
///
/// Content must be 1-280 characters of emoji only. Requires an
/// authenticated caller; posts are never written with an empty author.
pub async fn create_post(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreatePostRequest>,
) -> Result<(StatusCode, Json<Post>), ApiError> {
    payload
        .validate()
        .map_err(|e| ApiError::ValidationError(e.to_string()))?;

    let author_id = authenticate(&headers, &state.jwt_secret)?;

    state
        .create_limiter
        .check_key(&author_id)
        .map_err(|_| ApiError::RateLimited)?;

    let post = state
        .posts
        .create(NewPost {
            author_id,
            content: payload.content,
        })
        .await?;

    info!("Post created: {} by user {}", post.id, author_id);

    Ok((StatusCode::CREATED, Json(post)))
}
