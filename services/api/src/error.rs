//! Custom error types for the API service

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use common::error::DatabaseError;
use serde_json::json;
use thiserror::Error;

/// Custom error type for the API service
#[derive(Error, Debug)]
pub enum ApiError {
    /// Bad request with message
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Request body could not be read as the expected JSON
    #[error(transparent)]
    Json(#[from] JsonRejection),

    /// Path segment could not be parsed
    #[error(transparent)]
    Path(#[from] PathRejection),

    /// Query string could not be parsed
    #[error(transparent)]
    Query(#[from] QueryRejection),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] DatabaseError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Json(rejection) => (rejection.status(), rejection.body_text()),
            ApiError::Path(rejection) => (rejection.status(), rejection.body_text()),
            ApiError::Query(rejection) => (rejection.status(), rejection.body_text()),
            ApiError::Database(DatabaseError::NotFound(msg)) => (StatusCode::NOT_FOUND, msg),
            ApiError::Database(DatabaseError::Duplicate(msg)) => (StatusCode::CONFLICT, msg),
            ApiError::Database(err) => (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()),
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

/// Type alias for API results
pub type ApiResult<T> = Result<T, ApiError>;
