// src/error.rs

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::fmt;
use thiserror::Error;

/// Kinds of entities the quiz core can fail to find.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    Quiz,
    Question,
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Entity::Quiz => f.write_str("Quiz"),
            Entity::Question => f.write_str("Question"),
        }
    }
}

/// Failures signalled by the quiz core.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
    /// A required argument was absent or malformed.
    #[error("{0}")]
    InvalidInput(String),

    /// A referenced quiz or question does not exist.
    #[error("{0} not found")]
    NotFound(Entity),

    /// The question was already answered for this quiz and user.
    #[error("Answer already submitted")]
    DuplicateAnswer { question_id: i64 },
}

/// Global Application Error Enum.
/// Centralizes error handling and mapping to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    // 500 Internal Server Error
    InternalServerError(String),

    // 400 Bad Request
    BadRequest(String),

    // 403 Forbidden (e.g., answer already recorded)
    Forbidden(String),

    // 404 Not Found
    NotFound(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl std::error::Error for AppError {}

/// Implements `IntoResponse` for `AppError`.
/// Converts the error into a JSON response with appropriate HTTP status code.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::InternalServerError(msg) => {
                tracing::error!("Internal Server Error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error".to_string(),
                )
            }
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
        };
        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

/// Maps core failures onto HTTP statuses.
impl From<QuizError> for AppError {
    fn from(err: QuizError) -> Self {
        match err {
            QuizError::InvalidInput(msg) => AppError::BadRequest(msg),
            QuizError::NotFound(_) => AppError::NotFound(err.to_string()),
            QuizError::DuplicateAnswer { .. } => AppError::Forbidden(err.to_string()),
        }
    }
}

/// Malformed JSON bodies are reported as 400 with the usual error body.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(format!("Invalid input: {}", rejection.body_text()))
    }
}

/// Unparseable path segments (e.g. a non-numeric id).
impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::BadRequest(format!("Invalid input: {}", rejection.body_text()))
    }
}

/// Unparseable query strings (e.g. `?user_id=abc`).
impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest(format!("Invalid input: {}", rejection.body_text()))
    }
}
