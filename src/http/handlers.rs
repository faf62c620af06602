use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::app::comments::{CommentError, CommentService};
use crate::app::posts::PostService;
use crate::domain::comment::Comment;
use crate::domain::post::{Post, PostWithComments};
use crate::http::{AppError, AppJson};
use crate::AppState;

const MAX_POST_LEN: usize = 10_000;
const MAX_COMMENT_LEN: usize = 5_000;

#[derive(Serialize)]
pub(crate) struct HealthResponse {
    status: &'static str,
    posts: usize,
    comments: usize,
}

/// Post ids are only accepted in the hyphenated form the API hands out; any
/// other segment cannot name a stored post.
fn parse_post_id(raw: &str) -> Result<Uuid, AppError> {
    const HYPHENATED_LEN: usize = 36;

    if raw.len() == HYPHENATED_LEN {
        if let Ok(id) = Uuid::try_parse(raw) {
            return Ok(id);
        }
    }
    Err(AppError::not_found(format!("post with id {} not found", raw)))
}

fn validate_content(content: &str, what: &str, max_len: usize) -> Result<(), AppError> {
    if content.trim().is_empty() {
        return Err(AppError::bad_request(format!("{} content cannot be empty", what)));
    }
    if content.chars().count() > max_len {
        return Err(AppError::bad_request(format!(
            "{} content must be at most {} characters",
            what, max_len
        )));
    }
    Ok(())
}

pub(crate) async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    match state.store.stats() {
        Ok(stats) => Json(HealthResponse {
            status: "ok",
            posts: stats.posts,
            comments: stats.comments,
        }),
        Err(err) => {
            tracing::warn!(error = ?err, "store stats unavailable");
            Json(HealthResponse {
                status: "degraded",
                posts: 0,
                comments: 0,
            })
        }
    }
}

pub async fn not_found() -> AppError {
    AppError::not_found("route not found")
}

pub async fn method_not_allowed() -> AppError {
    AppError::method_not_allowed()
}

#[derive(Deserialize)]
pub struct ContentRequest {
    pub content: String,
}

pub async fn create_post(
    State(state): State<AppState>,
    AppJson(payload): AppJson<ContentRequest>,
) -> Result<(StatusCode, Json<Post>), AppError> {
    validate_content(&payload.content, "post", MAX_POST_LEN)?;

    let service = PostService::new(state.store.clone());
    let post = service
        .create_post(payload.content)
        .map_err(|err| AppError::from_store(err, "create post"))?;

    Ok((StatusCode::CREATED, Json(post)))
}

pub async fn list_posts(State(state): State<AppState>) -> Result<Json<Vec<Post>>, AppError> {
    let service = PostService::new(state.store.clone());
    let posts = service
        .list_posts()
        .map_err(|err| AppError::from_store(err, "list posts"))?;

    Ok(Json(posts))
}

pub async fn get_post(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<PostWithComments>, AppError> {
    let post_id = parse_post_id(&id)?;
    let service = PostService::new(state.store.clone());
    let post = service
        .get_post_with_comments(post_id)
        .map_err(|err| AppError::from_store(err, "fetch post"))?;

    Ok(Json(post))
}

pub async fn create_comment(
    Path(id): Path<String>,
    State(state): State<AppState>,
    AppJson(payload): AppJson<ContentRequest>,
) -> Result<(StatusCode, Json<Comment>), AppError> {
    validate_content(&payload.content, "comment", MAX_COMMENT_LEN)?;
    let post_id = parse_post_id(&id)?;

    let service = CommentService::new(state.store.clone(), state.markdown);
    let comment = service
        .create_comment(post_id, payload.content)
        .map_err(|err| match err {
            CommentError::Store(err) => AppError::from_store(err, "create comment"),
            CommentError::Render(err) => {
                tracing::error!(error = ?err, post_id = %post_id, "failed to render markdown");
                AppError::internal("failed to render markdown")
            }
        })?;

    Ok((StatusCode::CREATED, Json(comment)))
}

/// Answers 404 when the post does not exist, never an empty list.
pub async fn list_comments(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Vec<Comment>>, AppError> {
    let post_id = parse_post_id(&id)?;
    let service = CommentService::new(state.store.clone(), state.markdown);
    let comments = service
        .list_comments(post_id)
        .map_err(|err| AppError::from_store(err, "list comments"))?;

    Ok(Json(comments))
}
