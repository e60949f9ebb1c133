//! HTML pages: the post index and the add-post form.

use axum::extract::State;
use axum::response::{Html, Redirect};
use axum::{Form, Router, routing::get};
use serde::Deserialize;
use tracing::{info, instrument};
use uuid::Uuid;

use quill_posts::application::{command_handlers, query_handlers};
use quill_posts::domain::commands;
use quill_posts::domain::events::PostContent;

use crate::error::ApiError;
use crate::state::AppState;
use crate::views;

/// Form fields submitted by the add-post page. Missing fields are empty.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct PostForm {
    /// Who wrote the post.
    pub author: String,
    /// Post title.
    pub title: String,
    /// Post body.
    pub content: String,
}

/// GET /posts
#[instrument(skip(state))]
async fn index(State(state): State<AppState>) -> Html<String> {
    let posts = query_handlers::list_recent_posts(state.index_limit, &state.store);
    Html(views::render_index(&posts))
}

/// GET /posts/add
async fn view_add() -> Html<String> {
    Html(views::render_add_form())
}

/// POST /posts
#[instrument(skip(state, form))]
async fn add(
    State(state): State<AppState>,
    Form(form): Form<PostForm>,
) -> Result<Redirect, ApiError> {
    let command = commands::AddPost {
        correlation_id: Uuid::new_v4(),
        content: PostContent::new(form.author, form.title, form.content),
    };

    info!(correlation_id = %command.correlation_id, "handling add_post form");

    command_handlers::handle_add_post(&command, state.id_generator.as_ref(), &state.store)?;

    Ok(Redirect::to("/posts"))
}

/// Returns the router for the HTML pages.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/posts", get(index).post(add))
        .route("/posts/add", get(view_add))
}
