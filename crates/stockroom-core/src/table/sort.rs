//! Sort state and stable ordering.

use crate::table::columns::{self, CREATED_AT};
use crate::types::ProductRecord;

/// One `(column, direction)` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortEntry {
    pub column_id: String,
    pub descending: bool,
}

/// Ordered sort entries.
///
/// The dashboard only ever holds a single entry; the sequence form is kept
/// so the state serializes the same way a multi-sort grid would.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortState {
    entries: Vec<SortEntry>,
}

impl SortState {
    /// A state holding exactly one entry.
    pub fn single(column_id: &str, descending: bool) -> Self {
        SortState {
            entries: vec![SortEntry {
                column_id: column_id.to_string(),
                descending,
            }],
        }
    }

    /// Newest first.
    pub fn newest_first() -> Self {
        SortState::single(CREATED_AT, true)
    }

    pub fn entries(&self) -> &[SortEntry] {
        &self.entries
    }

    /// The entry that decides the order.
    pub fn primary(&self) -> Option<&SortEntry> {
        self.entries.first()
    }
}

impl Default for SortState {
    fn default() -> Self {
        SortState::newest_first()
    }
}

/// Stable-sorts row indices by the primary entry of `sort`.
///
/// Ties keep their incoming relative order, also when descending: the
/// comparison is reversed, the sort is not. Unknown or unsortable columns
/// leave the order untouched.
pub fn sort_rows(rows: &mut [usize], source: &[ProductRecord], sort: &SortState) {
    let Some(entry) = sort.primary() else {
        return;
    };
    let Some(column) = columns::column(&entry.column_id).filter(|c| c.sortable) else {
        return;
    };

    rows.sort_by(|&a, &b| {
        let ord = column
            .value(&source[a])
            .compare(&column.value(&source[b]));
        if entry.descending {
            ord.reverse()
        } else {
            ord
        }
    });
}
