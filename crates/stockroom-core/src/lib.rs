//! # stockroom-core: Pure Logic for the Stockroom Dashboard
//!
//! This crate is the **heart** of Stockroom. It contains the product table
//! engine and the domain rules as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Stockroom Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Dashboard (rendering layer)                  │   │
//! │  │    Search box ──► Facet dropdowns ──► Table ──► Pager          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ snapshot + state                       │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ stockroom-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   table   │  │ validation│  │   │
//! │  │   │  Product  │  │   Money   │  │  Engine   │  │  login    │  │   │
//! │  │   │  Status   │  │  display  │  │  Columns  │  │  product  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 stockroom-db (Database Layer)                   │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (ProductRecord, ProductStatus, UserRecord)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`table`] - Filter → sort → paginate view engine over a snapshot
//! - [`presentation`] - Status badges, facet chips, date display
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation (login schema, new products)
//!
//! ## Example Usage
//!
//! ```rust,ignore
//! use stockroom_core::table::{TableViewEngine, columns};
//!
//! let mut engine = TableViewEngine::new(products);
//! engine.set_text_filter(columns::NAME, "cola");
//! engine.set_multi_select_filter(columns::STATUS, ["Available"]);
//!
//! for row in engine.visible_rows() {
//!     println!("{} {}", row.sku, row.price());
//! }
//! println!("{}", engine.page_summary()); // "Page 1 of 3"
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod presentation;
pub mod table;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::ValidationError;
pub use money::Money;
pub use table::TableViewEngine;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Rows shown per page when the dashboard first loads.
pub const DEFAULT_PAGE_SIZE: usize = 8;

/// Minimum password length accepted by the login schema.
///
/// Only the login path enforces this; account creation is handled elsewhere.
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Number of selected facet values at which the chip list collapses into a
/// single summary badge.
pub const FACET_SUMMARY_THRESHOLD: usize = 3;
