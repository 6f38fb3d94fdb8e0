//! `POST /api/auth/login`.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  body bytes                                                             │
//! │     │  serde_json::from_slice      fails → 500 {"error": "Malformed …"} │
//! │     ▼                                                                   │
//! │  validate_login(email, password)   fails → 500 {"error": "<message>"}   │
//! │     ▼                                                                   │
//! │  CredentialVerifier::verify                                             │
//! │     ├── NotFound / PasswordMismatch      → 401 (same body for both)    │
//! │     ├── Err(DbError)                     → 500 {"error": "<message>"}   │
//! │     ▼                                                                   │
//! │  JwtManager::issue_token(user.id)        → 200 {token, user}           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The body is read as raw bytes and parsed here, so a wrong content type
//! or broken JSON takes the same 500 path as a schema failure instead of
//! axum's own 400/415 rejection.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use stockroom_core::validation::validate_login;
use stockroom_core::{AuthenticatedUser, ValidationError};
use tracing::info;

use crate::credentials::AuthOutcome;
use crate::error::ApiError;
use crate::AppState;

/// `{ email, password }`. Missing fields read as empty strings and are
/// reported by validation.
#[derive(Default, Deserialize)]
#[serde(default)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: AuthenticatedUser,
}

pub async fn login(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<LoginResponse>, ApiError> {
    let request: LoginRequest =
        serde_json::from_slice(&body).map_err(|e| ValidationError::Malformed {
            reason: e.to_string(),
        })?;

    validate_login(&request.email, &request.password)?;

    match state
        .credentials
        .verify(&request.email, &request.password)
        .await?
    {
        AuthOutcome::Authenticated(user) => {
            let token = state.tokens.issue_token(user.id)?;
            info!(user_id = user.id, "Login succeeded");
            Ok(Json(LoginResponse { token, user }))
        }
        AuthOutcome::NotFound => {
            info!("Login rejected: unknown email");
            Err(ApiError::InvalidCredentials)
        }
        AuthOutcome::PasswordMismatch => {
            info!("Login rejected: password mismatch");
            Err(ApiError::InvalidCredentials)
        }
    }
}

/// Any method other than POST on the login path.
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}
