//! Job application handlers: list, create, full replace, delete.

use crate::error::AppError;
use crate::extractors::{JsonBody, QueryParams, RowId};
use crate::models::{ApplicationListQuery, ApplicationRequest, APPLICATION_NOT_FOUND};
use crate::response::{created, ok};
use crate::service::ApplicationService;
use crate::state::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
};

pub async fn list(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<ApplicationListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let rows = ApplicationService::list(&state.pool, query.status()).await?;
    Ok(ok(rows))
}

pub async fn create(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<ApplicationRequest>,
) -> Result<impl IntoResponse, AppError> {
    let fields = body.validate()?;
    let row = ApplicationService::create(&state.pool, &fields).await?;
    tracing::info!(id = row.id, "application created");
    Ok(created(row))
}

/// PUT replaces every field; an omitted `follow_up` is cleared.
pub async fn update(
    State(state): State<AppState>,
    RowId(id): RowId,
    JsonBody(body): JsonBody<ApplicationRequest>,
) -> Result<impl IntoResponse, AppError> {
    let fields = body.validate()?;
    let row = ApplicationService::replace(&state.pool, id, &fields)
        .await?
        .ok_or(AppError::NotFound(APPLICATION_NOT_FOUND))?;
    Ok(ok(row))
}

pub async fn delete(State(state): State<AppState>, RowId(id): RowId) -> Result<impl IntoResponse, AppError> {
    if !ApplicationService::delete(&state.pool, id).await? {
        return Err(AppError::NotFound(APPLICATION_NOT_FOUND));
    }
    tracing::info!(id, "application deleted");
    Ok(StatusCode::NO_CONTENT)
}
