use crate::error::AppError;
use crate::extractors::{JsonBody, QueryParams};
use crate::models::{CreatePostRequest, PostListQuery};
use crate::response::{created, ok};
use crate::service::PostService;
use crate::state::AppState;
use axum::{
    extract::State,
    response::IntoResponse,
};

/// GET /posts?tag=
pub async fn list(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<PostListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let posts = PostService::list(&state.pool, query.tag()).await?;
    Ok(ok(posts))
}

/// POST /posts
pub async fn create(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<CreatePostRequest>,
) -> Result<impl IntoResponse, AppError> {
    let post = body.validate()?;
    let row = PostService::create(&state.pool, &post).await?;
    tracing::info!(id = row.id, "post created");
    Ok(created(row))
}
