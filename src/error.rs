use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::constants::MSG_LOGIN_REQUIRED;

/// Application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),

    #[error("Store lock poisoned")]
    StorePoisoned,

    #[error("Session key rejected")]
    SessionKey,

    #[error("Project not found")]
    ProjectNotFound,

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Pledge failed: {0}")]
    PledgeRejected(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Convert AppError into a plain-text HTTP response
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Io(ref e) => {
                tracing::error!("I/O error: {:?}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error".to_string())
            }
            AppError::Serialization(ref e) => {
                tracing::error!("Serialization error: {:?}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error".to_string())
            }
            AppError::TaskJoin(ref e) => {
                tracing::error!("Task join error: {:?}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error".to_string())
            }
            AppError::StorePoisoned => {
                tracing::error!("Store lock poisoned by a panicked request");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error".to_string())
            }
            AppError::SessionKey => {
                tracing::error!("Session key could not be used for signing");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error".to_string())
            }
            AppError::ProjectNotFound => (StatusCode::NOT_FOUND, "Project not found".to_string()),
            AppError::Unauthorized => (StatusCode::UNAUTHORIZED, MSG_LOGIN_REQUIRED.to_string()),
            AppError::PledgeRejected(msg) => {
                (StatusCode::BAD_REQUEST, format!("Pledge failed: {}", msg))
            }
            AppError::InvalidInput(msg) => (StatusCode::BAD_REQUEST, msg),
        };

        (status, message).into_response()
    }
}

/// Result type alias for application results
pub type Result<T> = std::result::Result<T, AppError>;
