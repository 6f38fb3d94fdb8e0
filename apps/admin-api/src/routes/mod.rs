//! HTTP routes.
//!
//! ```text
//! POST /api/auth/login        login::login      (other methods → 405 JSON)
//! GET  /api/products          products::list_products
//! GET  /api/products/facets   products::list_facets
//! GET  /health                health            (503 when the store is down)
//! ```

pub mod login;
pub mod products;

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use tracing::warn;

use crate::AppState;

/// Health check endpoint. Runs a trivial query against the product store.
pub async fn health(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    if state.catalog.is_reachable().await {
        (StatusCode::OK, "OK")
    } else {
        warn!("Health check failed: database unreachable");
        (StatusCode::SERVICE_UNAVAILABLE, "Database unavailable")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::JwtManager;
    use crate::credentials::fakes::FakeDirectory;
    use crate::routes::products::fakes::FakeCatalog;
    use http_body_util::BodyExt;
    use stockroom_db::{Database, DbConfig};

    fn state(catalog: Arc<dyn products::ProductCatalog>) -> Arc<AppState> {
        Arc::new(AppState::new(
            Arc::new(FakeDirectory::with_ada()),
            catalog,
            JwtManager::new("test-secret".to_string(), 3600),
        ))
    }

    async fn call(state: Arc<AppState>) -> (StatusCode, String) {
        let response = health(State(state)).await.into_response();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_health_ok_when_store_answers() {
        let (status, body) = call(state(Arc::new(FakeCatalog::default()))).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "OK");
    }

    #[tokio::test]
    async fn test_health_unavailable_when_store_is_down() {
        let catalog = FakeCatalog {
            broken: true,
            ..FakeCatalog::default()
        };
        let (status, body) = call(state(Arc::new(catalog))).await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body, "Database unavailable");
    }

    #[tokio::test]
    async fn test_health_follows_real_database() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let state = state(Arc::new(db.clone()));
        assert_eq!(call(state.clone()).await.0, StatusCode::OK);

        db.close().await;
        assert_eq!(call(state).await.0, StatusCode::SERVICE_UNAVAILABLE);
    }
}
