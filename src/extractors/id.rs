//! `:id` path segment parsed as an integer primary key.
//!
//! Parsed as i64 so that a numeric id beyond the `SERIAL` range still reaches storage
//! and is reported as not found rather than malformed.

use crate::error::AppError;
use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RowId(pub i64);

#[async_trait]
impl<S> FromRequestParts<S> for RowId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?;
        raw.trim()
            .parse::<i64>()
            .map(RowId)
            .map_err(|_| AppError::BadRequest("invalid id".into()))
    }
}
