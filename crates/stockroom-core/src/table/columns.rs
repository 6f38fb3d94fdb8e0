//! Static column table for the product grid.
//!
//! Each column maps a logical id (the key used by filters and sort state) to
//! an accessor, the kind of filter the header offers, and whether it can be
//! sorted. Filters and sorts that name an id missing from [`COLUMNS`] are
//! ignored by the engine.

use std::cmp::Ordering;
use std::fmt;
use std::iter::Peekable;

use chrono::{DateTime, Utc};

use crate::money::Money;
use crate::types::ProductRecord;

pub const CREATED_AT: &str = "createdAt";
pub const NAME: &str = "name";
pub const SKU: &str = "sku";
pub const STATUS: &str = "status";
pub const QUANTITY_IN_STOCK: &str = "quantityInStock";
pub const PRICE: &str = "price";
pub const SUPPLIER: &str = "supplier";
pub const CATEGORY: &str = "category";

/// Columns whose multi-select filter is a facet. Changing any of them
/// re-anchors the sort to newest first.
pub const FACET_COLUMNS: [&str; 3] = [STATUS, CATEGORY, SUPPLIER];

/// Filter control a column header offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKind {
    /// Free text, case-insensitive substring.
    Text,
    /// Set of accepted values.
    MultiSelect,
    None,
}

/// A borrowed cell value produced by a column accessor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellValue<'a> {
    Text(&'a str),
    Integer(i64),
    Money(Money),
    Timestamp(DateTime<Utc>),
}

impl CellValue<'_> {
    /// Lowercased text used by both filter kinds.
    pub fn to_filter_text(&self) -> String {
        match self {
            CellValue::Text(s) => s.to_lowercase(),
            CellValue::Integer(n) => n.to_string(),
            CellValue::Money(m) => m.to_decimal_string(),
            CellValue::Timestamp(t) => t.to_rfc3339(),
        }
    }

    /// Ascending order between two cells of the same column.
    ///
    /// Text compares case-insensitively and in natural order ("Item 2"
    /// before "Item 10"). Cells of different variants never occur within
    /// one column and compare equal.
    pub fn compare(&self, other: &CellValue<'_>) -> Ordering {
        match (self, other) {
            (CellValue::Text(a), CellValue::Text(b)) => natural_cmp(a, b),
            (CellValue::Integer(a), CellValue::Integer(b)) => a.cmp(b),
            (CellValue::Money(a), CellValue::Money(b)) => a.cmp(b),
            (CellValue::Timestamp(a), CellValue::Timestamp(b)) => a.cmp(b),
            _ => Ordering::Equal,
        }
    }
}

/// Case-insensitive natural ordering: digit runs compare by numeric value,
/// everything else character by character.
fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut left = a.chars().flat_map(char::to_lowercase).peekable();
    let mut right = b.chars().flat_map(char::to_lowercase).peekable();

    loop {
        let ord = match (left.peek().copied(), right.peek().copied()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) if x.is_ascii_digit() && y.is_ascii_digit() => {
                compare_digit_runs(&take_digits(&mut left), &take_digits(&mut right))
            }
            (Some(x), Some(y)) => {
                left.next();
                right.next();
                x.cmp(&y)
            }
        };
        if ord != Ordering::Equal {
            return ord;
        }
    }
}

fn take_digits<I: Iterator<Item = char>>(chars: &mut Peekable<I>) -> String {
    let mut run = String::new();
    while let Some(c) = chars.next_if(char::is_ascii_digit) {
        run.push(c);
    }
    run
}

/// Numeric comparison of two ASCII digit runs of any length. Equal values
/// put the run with fewer leading zeros first.
fn compare_digit_runs(a: &str, b: &str) -> Ordering {
    let a_trimmed = a.trim_start_matches('0');
    let b_trimmed = b.trim_start_matches('0');
    a_trimmed
        .len()
        .cmp(&b_trimmed.len())
        .then_with(|| a_trimmed.cmp(b_trimmed))
        .then_with(|| a.len().cmp(&b.len()))
}

/// Declarative description of one column.
#[derive(Clone, Copy)]
pub struct ColumnDef {
    pub id: &'static str,
    /// Header label.
    pub label: &'static str,
    pub accessor: for<'a> fn(&'a ProductRecord) -> CellValue<'a>,
    pub filter: FilterKind,
    pub sortable: bool,
}

impl ColumnDef {
    #[inline]
    pub fn value<'a>(&self, record: &'a ProductRecord) -> CellValue<'a> {
        (self.accessor)(record)
    }
}

impl fmt::Debug for ColumnDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnDef")
            .field("id", &self.id)
            .field("filter", &self.filter)
            .field("sortable", &self.sortable)
            .finish()
    }
}

/// The product grid, in display order.
pub static COLUMNS: [ColumnDef; 8] = [
    ColumnDef {
        id: CREATED_AT,
        label: "Created At",
        accessor: |p| CellValue::Timestamp(p.created_at),
        filter: FilterKind::None,
        sortable: true,
    },
    ColumnDef {
        id: NAME,
        label: "Name",
        accessor: |p| CellValue::Text(&p.name),
        filter: FilterKind::Text,
        sortable: true,
    },
    ColumnDef {
        id: SKU,
        label: "SKU",
        accessor: |p| CellValue::Text(&p.sku),
        filter: FilterKind::None,
        sortable: true,
    },
    ColumnDef {
        id: STATUS,
        label: "Status",
        accessor: |p| CellValue::Text(p.status.label()),
        filter: FilterKind::MultiSelect,
        sortable: true,
    },
    ColumnDef {
        id: QUANTITY_IN_STOCK,
        label: "Quantity In Stock",
        accessor: |p| CellValue::Integer(i64::from(p.quantity_in_stock)),
        filter: FilterKind::None,
        sortable: true,
    },
    ColumnDef {
        id: PRICE,
        label: "Price",
        accessor: |p| CellValue::Money(p.price()),
        filter: FilterKind::None,
        sortable: true,
    },
    ColumnDef {
        id: SUPPLIER,
        label: "Supplier",
        accessor: |p| CellValue::Text(&p.supplier),
        filter: FilterKind::MultiSelect,
        sortable: true,
    },
    ColumnDef {
        id: CATEGORY,
        label: "Category",
        accessor: |p| CellValue::Text(&p.category),
        filter: FilterKind::MultiSelect,
        sortable: true,
    },
];

/// Looks up a column by id.
pub fn column(id: &str) -> Option<&'static ColumnDef> {
    COLUMNS.iter().find(|c| c.id == id)
}

/// Whether a filter of `kind` may be placed on column `id`.
///
/// Text and multi-select columns only take their own kind. Columns without
/// a header filter, and ids missing from [`COLUMNS`], take either.
pub fn accepts_filter(id: &str, kind: FilterKind) -> bool {
    match column(id).map(|c| c.filter) {
        Some(FilterKind::Text) => kind == FilterKind::Text,
        Some(FilterKind::MultiSelect) => kind == FilterKind::MultiSelect,
        Some(FilterKind::None) | None => true,
    }
}

/// Whether `id` names one of the three facet filters.
pub fn is_facet(id: &str) -> bool {
    FACET_COLUMNS.contains(&id)
}
