//! JSON routes for the Posts bounded context.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::{Json, Router, routing::get};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use uuid::Uuid;

use quill_posts::application::{command_handlers, query_handlers};
use quill_posts::application::query_handlers::PostView;
use quill_posts::domain::commands;
use quill_posts::domain::events::PostContent;
use quill_posts::domain::post_id::PostId;

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for creating or editing a post.
#[derive(Debug, Deserialize)]
pub struct PostRequest {
    /// Who wrote the post.
    pub author: String,
    /// Post title.
    pub title: String,
    /// Post body.
    pub content: String,
}

impl From<PostRequest> for PostContent {
    fn from(request: PostRequest) -> Self {
        Self::new(request.author, request.title, request.content)
    }
}

/// Query string for GET /api/v1/posts.
#[derive(Debug, Deserialize)]
pub struct ListParams {
    /// Maximum number of posts to return. Negative values yield no posts.
    pub limit: Option<i64>,
}

/// Response body returned after a post is created.
#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    /// The new post's identifier.
    pub post_id: PostId,
}

/// GET /api/v1/posts
#[instrument(skip(state))]
async fn list_posts(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Json<Vec<PostView>> {
    let limit = params
        .limit
        .map_or(state.index_limit, |n| usize::try_from(n).unwrap_or(0));
    Json(query_handlers::list_recent_posts(limit, &state.store))
}

/// POST /api/v1/posts
#[instrument(skip(state, request))]
async fn create_post(
    State(state): State<AppState>,
    Json(request): Json<PostRequest>,
) -> Result<(StatusCode, Json<CreatedResponse>), ApiError> {
    let command = commands::AddPost {
        correlation_id: Uuid::new_v4(),
        content: request.into(),
    };

    info!(correlation_id = %command.correlation_id, "handling add_post command");

    let post_id =
        command_handlers::handle_add_post(&command, state.id_generator.as_ref(), &state.store)?;

    Ok((StatusCode::CREATED, Json(CreatedResponse { post_id })))
}

/// GET /api/v1/posts/{post_id}
#[instrument(skip(state))]
async fn get_post(
    State(state): State<AppState>,
    Path(post_id): Path<String>,
) -> Result<Json<PostView>, ApiError> {
    let post_id: PostId = post_id.parse()?;
    Ok(Json(query_handlers::get_post_by_id(post_id, &state.store)?))
}

/// PUT /api/v1/posts/{post_id}
#[instrument(skip(state, request))]
async fn edit_post(
    State(state): State<AppState>,
    Path(post_id): Path<String>,
    Json(request): Json<PostRequest>,
) -> Result<Json<PostView>, ApiError> {
    let command = commands::EditPost {
        correlation_id: Uuid::new_v4(),
        post_id: post_id.parse()?,
        content: request.into(),
    };

    info!(correlation_id = %command.correlation_id, post_id = %command.post_id, "handling edit_post command");

    let post_id = command_handlers::handle_edit_post(&command, &state.store)?;

    Ok(Json(query_handlers::get_post_by_id(post_id, &state.store)?))
}

/// DELETE /api/v1/posts/{post_id}
#[instrument(skip(state))]
async fn delete_post(
    State(state): State<AppState>,
    Path(post_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let command = commands::DeletePost {
        correlation_id: Uuid::new_v4(),
        post_id: post_id.parse()?,
    };

    info!(correlation_id = %command.correlation_id, post_id = %command.post_id, "handling delete_post command");

    command_handlers::handle_delete_post(&command, &state.store)?;

    Ok(StatusCode::NO_CONTENT)
}

/// Returns the router for the JSON posts API.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/v1/posts", get(list_posts).post(create_post))
        .route(
            "/api/v1/posts/{post_id}",
            get(get_post).put(edit_post).delete(delete_post),
        )
}
