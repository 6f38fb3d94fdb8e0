//! Product snapshot routes.
//!
//! The dashboard does all filtering, sorting and paging on the client with
//! the table engine from `stockroom-core`. These routes only hand out the
//! full snapshot and the values for the facet dropdowns.

use std::sync::Arc;

use async_trait::async_trait;
use axum::extract::State;
use axum::Json;
use serde::Serialize;
use stockroom_core::{ProductRecord, ProductStatus};
use stockroom_db::{Database, DbError};
use tracing::debug;

use crate::error::ApiError;
use crate::AppState;

/// Read side of the product store.
#[async_trait]
pub trait ProductCatalog: Send + Sync {
    /// Every product, newest first.
    async fn snapshot(&self) -> Result<Vec<ProductRecord>, DbError>;

    async fn categories(&self) -> Result<Vec<String>, DbError>;

    async fn suppliers(&self) -> Result<Vec<String>, DbError>;

    /// Whether the backing store answers at all.
    async fn is_reachable(&self) -> bool;
}

#[async_trait]
impl ProductCatalog for Database {
    async fn snapshot(&self) -> Result<Vec<ProductRecord>, DbError> {
        self.products().list_all().await
    }

    async fn categories(&self) -> Result<Vec<String>, DbError> {
        self.products().categories().await
    }

    async fn suppliers(&self) -> Result<Vec<String>, DbError> {
        self.products().suppliers().await
    }

    async fn is_reachable(&self) -> bool {
        self.health_check().await
    }
}

/// Options for the three multi-select facets.
#[derive(Debug, Serialize)]
pub struct FacetOptions {
    pub statuses: Vec<&'static str>,
    pub categories: Vec<String>,
    pub suppliers: Vec<String>,
}

/// `GET /api/products`
pub async fn list_products(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<ProductRecord>>, ApiError> {
    let products = state.catalog.snapshot().await?;
    debug!(count = products.len(), "Serving product snapshot");
    Ok(Json(products))
}

/// `GET /api/products/facets`
pub async fn list_facets(
    State(state): State<Arc<AppState>>,
) -> Result<Json<FacetOptions>, ApiError> {
    Ok(Json(FacetOptions {
        statuses: ProductStatus::ALL.iter().map(|s| s.label()).collect(),
        categories: state.catalog.categories().await?,
        suppliers: state.catalog.suppliers().await?,
    }))
}

#[cfg(test)]
pub(crate) mod fakes {
    use super::*;

    #[derive(Default)]
    pub struct FakeCatalog {
        pub products: Vec<ProductRecord>,
        pub categories: Vec<String>,
        pub suppliers: Vec<String>,
        pub broken: bool,
    }

    impl FakeCatalog {
        fn check(&self) -> Result<(), DbError> {
            if self.broken {
                return Err(DbError::ConnectionFailed("Pool is closed".to_string()));
            }
            Ok(())
        }
    }

    #[async_trait]
    impl ProductCatalog for FakeCatalog {
        async fn snapshot(&self) -> Result<Vec<ProductRecord>, DbError> {
            self.check()?;
            Ok(self.products.clone())
        }

        async fn categories(&self) -> Result<Vec<String>, DbError> {
            self.check()?;
            Ok(self.categories.clone())
        }

        async fn suppliers(&self) -> Result<Vec<String>, DbError> {
            self.check()?;
            Ok(self.suppliers.clone())
        }

        async fn is_reachable(&self) -> bool {
            !self.broken
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fakes::FakeCatalog;
    use super::*;
    use crate::auth::JwtManager;
    use crate::credentials::fakes::FakeDirectory;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;
    use chrono::{TimeZone, Utc};
    use http_body_util::BodyExt;
    use serde_json::{json, Value};

    fn state(catalog: FakeCatalog) -> Arc<AppState> {
        Arc::new(AppState::new(
            Arc::new(FakeDirectory::with_ada()),
            Arc::new(catalog),
            JwtManager::new("test-secret".to_string(), 3600),
        ))
    }

    fn chair() -> ProductRecord {
        ProductRecord {
            id: 3,
            name: "Office Chair".to_string(),
            supplier: "Seatly".to_string(),
            sku: "CHR-003".to_string(),
            category: "Furniture".to_string(),
            status: ProductStatus::StockOut,
            quantity_in_stock: 0,
            price_cents: 12900,
            created_at: Utc.with_ymd_and_hms(2024, 3, 2, 10, 0, 0).unwrap(),
        }
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_list_products_returns_snapshot() {
        let catalog = FakeCatalog {
            products: vec![chair()],
            ..FakeCatalog::default()
        };
        let response = list_products(State(state(catalog))).await.into_response();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body[0]["sku"], "CHR-003");
        assert_eq!(body[0]["status"], "Stock Out");
        assert_eq!(body[0]["quantityInStock"], 0);
        assert_eq!(body[0]["price"], 129.0);
    }

    #[tokio::test]
    async fn test_list_facets() {
        let catalog = FakeCatalog {
            categories: vec!["Furniture".to_string(), "Lighting".to_string()],
            suppliers: vec!["Seatly".to_string()],
            ..FakeCatalog::default()
        };
        let response = list_facets(State(state(catalog))).await.into_response();

        assert_eq!(
            body_json(response).await,
            json!({
                "statuses": ["Available", "Stock Out", "Stock Low"],
                "categories": ["Furniture", "Lighting"],
                "suppliers": ["Seatly"],
            })
        );
    }

    #[tokio::test]
    async fn test_store_failure_is_500_with_message() {
        let catalog = FakeCatalog {
            broken: true,
            ..FakeCatalog::default()
        };
        let response = list_products(State(state(catalog))).await.into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            json!({"error": "Connection failed: Pool is closed"})
        );
    }
}
