//! # Product Repository
//!
//! The dashboard filters, sorts and paginates on the client, so reads here
//! are whole-table: [`ProductRepository::list_all`] returns the snapshot the
//! table engine works on. Category and supplier tables feed the facet
//! dropdowns.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  insert(product)                                                        │
//! │       │  BEGIN                                                          │
//! │       ├── INSERT OR IGNORE categories(name)                            │
//! │       ├── INSERT OR IGNORE suppliers(name)                             │
//! │       ├── INSERT products(...)   ← UNIQUE(sku)                         │
//! │       │  COMMIT                                                         │
//! │       ▼                                                                 │
//! │  ProductRecord (with generated id)                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use sqlx::{Sqlite, SqlitePool, Transaction};
use tracing::debug;

use crate::error::{DbError, DbResult};
use stockroom_core::{NewProduct, ProductRecord, ProductStatus};

const PRODUCT_COLUMNS: &str = r#"
    id, name, supplier, sku, category, status,
    quantity_in_stock, price_cents, created_at
"#;

/// Raw `products` row.
#[derive(Debug, sqlx::FromRow)]
struct ProductRow {
    id: i64,
    name: String,
    supplier: String,
    sku: String,
    category: String,
    status: ProductStatus,
    quantity_in_stock: i64,
    price_cents: i64,
    created_at: DateTime<Utc>,
}

impl TryFrom<ProductRow> for ProductRecord {
    type Error = DbError;

    fn try_from(row: ProductRow) -> DbResult<Self> {
        let quantity_in_stock = u32::try_from(row.quantity_in_stock).map_err(|_| {
            DbError::CorruptRow(format!(
                "product {}: quantity_in_stock {} out of range",
                row.id, row.quantity_in_stock
            ))
        })?;

        Ok(ProductRecord {
            id: row.id,
            name: row.name,
            supplier: row.supplier,
            sku: row.sku,
            category: row.category,
            status: row.status,
            quantity_in_stock,
            price_cents: row.price_cents,
            created_at: row.created_at,
        })
    }
}

/// Repository for product database operations.
#[derive(Debug, Clone)]
pub struct ProductRepository {
    pool: SqlitePool,
}

impl ProductRepository {
    pub fn new(pool: SqlitePool) -> Self {
        ProductRepository { pool }
    }

    /// Every product, newest first. Ties keep insertion order.
    pub async fn list_all(&self) -> DbResult<Vec<ProductRecord>> {
        let sql = format!(
            "SELECT {} FROM products ORDER BY created_at DESC, id ASC",
            PRODUCT_COLUMNS
        );
        let rows = sqlx::query_as::<_, ProductRow>(&sql)
            .fetch_all(&self.pool)
            .await?;

        debug!(count = rows.len(), "Loaded product snapshot");
        rows.into_iter().map(ProductRecord::try_from).collect()
    }

    /// ## Returns
    /// * `Ok(Some(ProductRecord))` - Product found
    /// * `Ok(None)` - No product with that id
    pub async fn get_by_id(&self, id: i64) -> DbResult<Option<ProductRecord>> {
        let sql = format!("SELECT {} FROM products WHERE id = ?1", PRODUCT_COLUMNS);
        let row = sqlx::query_as::<_, ProductRow>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.map(ProductRecord::try_from).transpose()
    }

    /// Inserts a product and registers its category and supplier.
    ///
    /// Field validation is the caller's job; the schema still rejects a
    /// duplicate SKU or a negative price.
    pub async fn insert(
        &self,
        product: &NewProduct,
        created_at: DateTime<Utc>,
    ) -> DbResult<ProductRecord> {
        debug!(sku = %product.sku, "Inserting product");

        let mut tx = self.pool.begin().await?;

        register_name(&mut tx, "categories", &product.category).await?;
        register_name(&mut tx, "suppliers", &product.supplier).await?;

        let id = sqlx::query(
            r#"
            INSERT INTO products (
                name, supplier, sku, category, status,
                quantity_in_stock, price_cents, created_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
            "#,
        )
        .bind(&product.name)
        .bind(&product.supplier)
        .bind(&product.sku)
        .bind(&product.category)
        .bind(product.status)
        .bind(i64::from(product.quantity_in_stock))
        .bind(product.price_cents)
        .bind(created_at)
        .execute(&mut *tx)
        .await
        .map_err(|e| DbError::from(e).with_value(&product.sku))?
        .last_insert_rowid();

        tx.commit().await?;

        Ok(ProductRecord {
            id,
            name: product.name.clone(),
            supplier: product.supplier.clone(),
            sku: product.sku.clone(),
            category: product.category.clone(),
            status: product.status,
            quantity_in_stock: product.quantity_in_stock,
            price_cents: product.price_cents,
            created_at,
        })
    }

    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    // =========================================================================
    // Facet values
    // =========================================================================

    /// Category names, alphabetical.
    pub async fn categories(&self) -> DbResult<Vec<String>> {
        self.names("categories").await
    }

    /// Supplier names, alphabetical.
    pub async fn suppliers(&self) -> DbResult<Vec<String>> {
        self.names("suppliers").await
    }

    /// Fails with [`DbError::UniqueViolation`] if the category exists.
    pub async fn add_category(&self, name: &str) -> DbResult<()> {
        self.add_name("categories", name).await
    }

    /// Fails with [`DbError::UniqueViolation`] if the supplier exists.
    pub async fn add_supplier(&self, name: &str) -> DbResult<()> {
        self.add_name("suppliers", name).await
    }

    async fn names(&self, table: &str) -> DbResult<Vec<String>> {
        let sql = format!("SELECT name FROM {} ORDER BY name COLLATE NOCASE", table);
        let names = sqlx::query_scalar::<_, String>(&sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(names)
    }

    async fn add_name(&self, table: &str, name: &str) -> DbResult<()> {
        let sql = format!("INSERT INTO {} (name) VALUES (?1)", table);
        sqlx::query(&sql)
            .bind(name)
            .execute(&self.pool)
            .await
            .map_err(|e| DbError::from(e).with_value(name))?;
        Ok(())
    }
}

async fn register_name(
    tx: &mut Transaction<'_, Sqlite>,
    table: &str,
    name: &str,
) -> DbResult<()> {
    let sql = format!("INSERT OR IGNORE INTO {} (name) VALUES (?1)", table);
    sqlx::query(&sql).bind(name).execute(&mut **tx).await?;
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
