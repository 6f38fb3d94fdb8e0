//! Error types for the Admin API.
//!
//! Every failure leaves the service as `{"error": "<message>"}`:
//!
//! ```text
//! ApiError::MethodNotAllowed    → 405  "Method Not Allowed"
//! ApiError::Validation(e)       → 500  e.to_string()
//! ApiError::InvalidCredentials  → 401  "Invalid email or password"
//! ApiError::Unexpected(msg)     → 500  msg, or "An unknown error occurred"
//! ```
//!
//! Validation failures answer 500, not 400. Dashboard clients already key
//! off that status, so it is kept.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use stockroom_core::ValidationError;
use stockroom_db::DbError;
use tracing::error;

pub const INVALID_CREDENTIALS: &str = "Invalid email or password";
pub const UNKNOWN_ERROR: &str = "An unknown error occurred";

/// Admin API errors.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Method Not Allowed")]
    MethodNotAllowed,

    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Unknown email and wrong password both end here.
    #[error("{}", INVALID_CREDENTIALS)]
    InvalidCredentials,

    #[error("{0}")]
    Unexpected(String),
}

/// Failures of the credential primitives (hashing, tokens).
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Failed to hash password: {0}")]
    Hashing(String),

    #[error("Failed to generate token: {0}")]
    TokenIssue(String),

    #[error("Invalid token: {0}")]
    InvalidToken(String),
}

/// JSON body of every error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Validation(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            ApiError::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message placed in the `error` field.
    pub fn message(&self) -> String {
        match self {
            ApiError::Unexpected(msg) if msg.trim().is_empty() => UNKNOWN_ERROR.to_string(),
            other => other.to_string(),
        }
    }
}

impl From<DbError> for ApiError {
    fn from(err: DbError) -> Self {
        ApiError::Unexpected(err.to_string())
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        ApiError::Unexpected(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Unexpected(ref msg) = self {
            error!(error = %msg, "Request failed unexpectedly");
        }

        let body = ErrorBody {
            error: self.message(),
        };
        (self.status(), Json(body)).into_response()
    }
}
