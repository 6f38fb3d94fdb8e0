//! # Product Table View
//!
//! Filter → sort → paginate over an in-memory snapshot of products.
//!
//! ## Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Derived View Pipeline                            │
//! │                                                                         │
//! │  snapshot: Vec<ProductRecord>   (replaced wholesale on refresh)        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  1. FILTER    every active filter must pass                            │
//! │       │       text   → case-insensitive substring                      │
//! │       │       facet  → lowercased membership, empty set = no-op        │
//! │       ▼                                                                 │
//! │  2. SORT      single (column, descending) entry, stable                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  3. PAGINATE  [index * size, (index + 1) * size)                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  visible rows + page count + can_go_next / can_go_previous             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The order is fixed. Sorting before filtering would give the same rows,
//! but paginating before filtering would not.
//!
//! ## Modules
//! - [`columns`] - static column table (accessor, filter kind, sortable)
//! - [`filter`] - [`FilterState`] and row matching
//! - [`sort`] - [`SortState`] and stable ordering
//! - [`pagination`] - [`PaginationState`] and slicing
//! - [`engine`] - [`TableViewEngine`], the stateful owner of all three

pub mod columns;
pub mod engine;
pub mod filter;
pub mod pagination;
pub mod sort;

pub use columns::{CellValue, ColumnDef, FilterKind};
pub use engine::{PageSummary, TableViewEngine};
pub use filter::{FilterState, FilterValue};
pub use pagination::PaginationState;
pub use sort::{SortEntry, SortState};
