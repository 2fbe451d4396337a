use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::constants::{
    ERR_ACTIVITY_FULL, ERR_ACTIVITY_NOT_FOUND, ERR_ALREADY_SIGNED_UP, ERR_NOT_SIGNED_UP,
};

/// Application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Activity not found")]
    ActivityNotFound,

    #[error("Activity is full")]
    ActivityFull,

    #[error("Student is already signed up")]
    AlreadySignedUp,

    #[error("Student is not signed up for this activity")]
    NotSignedUp,
}

/// Implement IntoResponse to convert AppError into HTTP responses
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            AppError::Database(ref e) => {
                tracing::error!("Database error: {:?}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
            AppError::ActivityNotFound => (StatusCode::NOT_FOUND, ERR_ACTIVITY_NOT_FOUND),
            AppError::ActivityFull => (StatusCode::BAD_REQUEST, ERR_ACTIVITY_FULL),
            AppError::AlreadySignedUp => (StatusCode::BAD_REQUEST, ERR_ALREADY_SIGNED_UP),
            AppError::NotSignedUp => (StatusCode::BAD_REQUEST, ERR_NOT_SIGNED_UP),
        };

        let body = Json(json!({
            "detail": detail
        }));

        (status, body).into_response()
    }
}

/// Result type alias for application results
pub type Result<T> = std::result::Result<T, AppError>;
