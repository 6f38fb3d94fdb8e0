//! # Domain Types
//!
//! Core domain types used throughout Stockroom.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │ ProductRecord   │   │ ProductStatus   │   │   UserRecord    │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (i64)       │   │  Available      │   │  id (i64)       │       │
//! │  │  sku, name      │   │  StockOut       │   │  email (unique) │       │
//! │  │  supplier       │   │  StockLow       │   │  password_hash  │       │
//! │  │  category       │   └─────────────────┘   └─────────────────┘       │
//! │  │  price_cents    │                                                    │
//! │  │  created_at     │   ┌─────────────────┐   ┌─────────────────┐       │
//! │  └─────────────────┘   │   NewProduct    │   │ AuthenticatedUser│      │
//! │                        │ (insert input)  │   │ (login response)│       │
//! │                        └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Records are immutable once they are part of a snapshot. The table engine
//! only reorders, selects and slices references to them.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Product Status
// =============================================================================

/// Stock status of a product.
///
/// Wire and database form is the display label (`"Stock Out"`), which is
/// also what the status facet filter compares against (case-insensitively).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[ts(export)]
pub enum ProductStatus {
    #[serde(rename = "Available")]
    #[cfg_attr(feature = "sqlx", sqlx(rename = "Available"))]
    Available,

    #[serde(rename = "Stock Out")]
    #[cfg_attr(feature = "sqlx", sqlx(rename = "Stock Out"))]
    StockOut,

    #[serde(rename = "Stock Low")]
    #[cfg_attr(feature = "sqlx", sqlx(rename = "Stock Low"))]
    StockLow,
}

impl ProductStatus {
    /// Every status, in dropdown order.
    pub const ALL: [ProductStatus; 3] = [
        ProductStatus::Available,
        ProductStatus::StockOut,
        ProductStatus::StockLow,
    ];

    /// Display label, identical to the serialized form.
    pub const fn label(&self) -> &'static str {
        match self {
            ProductStatus::Available => "Available",
            ProductStatus::StockOut => "Stock Out",
            ProductStatus::StockLow => "Stock Low",
        }
    }
}

impl fmt::Display for ProductStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Product Record
// =============================================================================

/// One row of the product table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ProductRecord {
    /// Unique numeric identifier.
    pub id: i64,

    /// Display name.
    pub name: String,

    /// Supplier name (free text, matches a row in `suppliers`).
    pub supplier: String,

    /// Stock Keeping Unit.
    pub sku: String,

    /// Category name (free text, matches a row in `categories`).
    pub category: String,

    pub status: ProductStatus,

    /// Units on hand.
    pub quantity_in_stock: u32,

    /// Price in cents. On the wire this is `price`, a decimal number.
    #[serde(rename = "price", with = "crate::money::decimal_cents")]
    #[ts(rename = "price", type = "number")]
    pub price_cents: i64,

    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

impl ProductRecord {
    /// Returns the price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }
}

/// Input for creating a product (the "Add Product" dialog).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct NewProduct {
    pub name: String,
    pub supplier: String,
    pub sku: String,
    pub category: String,
    pub status: ProductStatus,
    pub quantity_in_stock: u32,
    #[serde(rename = "price", with = "crate::money::decimal_cents")]
    #[ts(rename = "price", type = "number")]
    pub price_cents: i64,
}

// =============================================================================
// Users
// =============================================================================

/// A stored user account, as read by the login lookup.
#[derive(Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub id: i64,
    pub name: String,
    pub email: String,
    /// Argon2 PHC string.
    pub password_hash: String,
}

impl fmt::Debug for UserRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserRecord")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password_hash", &"<redacted>")
            .finish()
    }
}

/// The public part of a user returned after a successful login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AuthenticatedUser {
    pub id: i64,
    pub name: String,
    pub email: String,
}

impl From<&UserRecord> for AuthenticatedUser {
    fn from(user: &UserRecord) -> Self {
        AuthenticatedUser {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
