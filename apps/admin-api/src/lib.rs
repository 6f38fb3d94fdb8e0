//! # Stockroom Admin API
//!
//! HTTP backend of the inventory dashboard.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Admin API                                       │
//! │                                                                         │
//! │  ┌────────────────┐  ┌────────────────┐  ┌────────────────────────────┐│
//! │  │  routes::login │  │routes::products│  │  routes::health            ││
//! │  │                │  │                │  │                            ││
//! │  │ • POST login   │  │ • snapshot     │  │ • GET /health → OK / 503   ││
//! │  │ • 405 fallback │  │ • facets       │  │                            ││
//! │  └───────┬────────┘  └───────┬────────┘  └────────────────────────────┘│
//! │          │                   │                                          │
//! │  ┌───────▼───────────────────▼──────────────────────────────────────┐  │
//! │  │                      AppState (Arc)                               │  │
//! │  │  CredentialVerifier ─► dyn UserDirectory  ─┐                      │  │
//! │  │  dyn ProductCatalog ───────────────────────┼─► stockroom_db       │  │
//! │  │  JwtManager (HS256)                        ┘   ::Database         │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration
//! Environment variables:
//! - `HTTP_PORT` - listen port (default: 3000)
//! - `BIND_ADDR` - listen interface (default: 0.0.0.0)
//! - `DATABASE_PATH` - SQLite file (default: ./stockroom.db)
//! - `JWT_SECRET` - Secret for JWT signing
//! - `JWT_LIFETIME_SECS` - Token lifetime (default: 3600)

pub mod auth;
pub mod config;
pub mod credentials;
pub mod error;
pub mod routes;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use stockroom_db::Database;

pub use config::ApiConfig;
pub use error::ApiError;

use crate::auth::JwtManager;
use crate::credentials::{CredentialVerifier, UserDirectory};
use crate::routes::products::ProductCatalog;

/// Shared application state.
pub struct AppState {
    pub credentials: CredentialVerifier,
    pub catalog: Arc<dyn ProductCatalog>,
    pub tokens: JwtManager,
}

impl AppState {
    pub fn new(
        users: Arc<dyn UserDirectory>,
        catalog: Arc<dyn ProductCatalog>,
        tokens: JwtManager,
    ) -> Self {
        AppState {
            credentials: CredentialVerifier::new(users),
            catalog,
            tokens,
        }
    }

    /// State backed by one database for both users and products.
    pub fn from_database(db: Database, config: &ApiConfig) -> Self {
        let db = Arc::new(db);
        AppState::new(
            db.clone(),
            db,
            JwtManager::new(config.jwt_secret.clone(), config.jwt_lifetime_secs),
        )
    }
}

/// Builds the HTTP router.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route(
            "/api/auth/login",
            post(routes::login::login).fallback(routes::login::method_not_allowed),
        )
        .route("/api/products", get(routes::products::list_products))
        .route("/api/products/facets", get(routes::products::list_facets))
        .route("/health", get(routes::health))
        .with_state(state)
}
