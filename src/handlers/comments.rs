use crate::error::AppError;
use crate::extractors::JsonBody;
use crate::models::CreateCommentRequest;
use crate::response::created;
use crate::service::CommentService;
use crate::state::AppState;
use axum::{extract::State, response::IntoResponse};

/// POST /comments
pub async fn create(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<CreateCommentRequest>,
) -> Result<impl IntoResponse, AppError> {
    let comment = body.validate()?;
    let row = CommentService::create(&state.pool, &comment).await?;
    tracing::info!(id = row.id, post_id = row.post_id, "comment created");
    Ok(created(row))
}
