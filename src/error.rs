//! Typed errors and HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Top-level message for every storage failure; the driver text goes in `details`.
pub const SERVER_ERROR_MESSAGE: &str = "Server error";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {key}: '{value}'")]
    Invalid { key: &'static str, value: String },
    #[error("database url: {0}")]
    DatabaseUrl(String),
}

#[derive(Error, Debug)]
pub enum AppError {
    /// A required field is missing. The message is returned verbatim.
    #[error("{0}")]
    Validation(&'static str),
    #[error("{0}")]
    BadRequest(String),
    /// Targeted row does not exist. Answered with a plain-text body.
    #[error("{0}")]
    NotFound(&'static str),
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
}

#[derive(Serialize, Debug)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Validation(message) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorBody {
                    error: message.to_string(),
                    details: None,
                }),
            )
                .into_response(),
            AppError::BadRequest(message) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorBody {
                    error: message,
                    details: None,
                }),
            )
                .into_response(),
            AppError::NotFound(message) => (StatusCode::NOT_FOUND, message).into_response(),
            AppError::Db(e) => {
                tracing::error!(error = %e, "storage call failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorBody {
                        error: SERVER_ERROR_MESSAGE.to_string(),
                        details: Some(storage_details(&e)),
                    }),
                )
                    .into_response()
            }
        }
    }
}

/// Driver text for `details`: the database's own message when there is one, without sqlx's prefix.
pub fn storage_details(e: &sqlx::Error) -> String {
    e.as_database_error()
        .map(|d| d.message().to_string())
        .unwrap_or_else(|| e.to_string())
}
