//! Column filters.
//!
//! ## Matching Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  FilterValue::Text("COLA")                                              │
//! │      row passes ⇔ lowercase(cell) contains "cola"                       │
//! │                                                                         │
//! │  FilterValue::MultiSelect({"Available", "Stock Low"})                   │
//! │      row passes ⇔ lowercase(cell) ∈ {"available", "stock low"}          │
//! │                                                                         │
//! │  FilterValue::MultiSelect({})                                           │
//! │      row passes, always (cleared facet, NOT "reject all")              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::{BTreeMap, BTreeSet};

use crate::table::columns;
use crate::types::ProductRecord;

/// Value held for one column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterValue {
    Text(String),
    MultiSelect(BTreeSet<String>),
}

impl FilterValue {
    /// Whether this value restricts anything at all.
    pub fn is_active(&self) -> bool {
        match self {
            FilterValue::Text(text) => !text.is_empty(),
            FilterValue::MultiSelect(values) => !values.is_empty(),
        }
    }

    /// Tests an already-lowercased cell text.
    fn accepts(&self, cell: &str) -> bool {
        match self {
            FilterValue::Text(needle) => cell.contains(&needle.to_lowercase()),
            FilterValue::MultiSelect(values) => {
                values.is_empty() || values.iter().any(|v| v.to_lowercase() == cell)
            }
        }
    }
}

/// Active filters keyed by column id.
///
/// Inactive values (empty text, empty set) are never stored, so every
/// entry in the map restricts rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    filters: BTreeMap<String, FilterValue>,
}

impl FilterState {
    pub fn new() -> Self {
        FilterState::default()
    }

    /// Replaces the filter for `column_id`; an inactive value removes it.
    pub fn set(&mut self, column_id: &str, value: FilterValue) {
        if value.is_active() {
            self.filters.insert(column_id.to_string(), value);
        } else {
            self.filters.remove(column_id);
        }
    }

    pub fn get(&self, column_id: &str) -> Option<&FilterValue> {
        self.filters.get(column_id)
    }

    pub fn remove(&mut self, column_id: &str) {
        self.filters.remove(column_id);
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FilterValue)> {
        self.filters.iter().map(|(id, value)| (id.as_str(), value))
    }

    /// Selected values of a multi-select filter, empty when unset.
    pub fn selected(&self, column_id: &str) -> Vec<&str> {
        match self.filters.get(column_id) {
            Some(FilterValue::MultiSelect(values)) => values.iter().map(String::as_str).collect(),
            _ => Vec::new(),
        }
    }

    /// Whether `record` passes every filter. Unknown column ids are skipped.
    pub fn matches(&self, record: &ProductRecord) -> bool {
        self.filters.iter().all(|(id, value)| match columns::column(id) {
            Some(column) => value.accepts(&column.value(record).to_filter_text()),
            None => true,
        })
    }
}

/// Keeps the indices of `source` rows passing `filters`, in source order.
pub fn filter_rows(source: &[ProductRecord], filters: &FilterState) -> Vec<usize> {
    source
        .iter()
        .enumerate()
        .filter(|(_, record)| filters.matches(record))
        .map(|(idx, _)| idx)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::columns::{NAME, STATUS};
    use crate::table::fixtures::product;
    use crate::types::ProductStatus;

    fn set_of(values: &[&str]) -> FilterValue {
        FilterValue::MultiSelect(values.iter().map(|v| v.to_string()).collect())
    }

    #[test]
    fn test_text_filter_is_case_insensitive_substring() {
        let rows = vec![
            product(1, "Cola Zero", ProductStatus::Available, 0),
            product(2, "Orange Juice", ProductStatus::Available, 0),
        ];
        let mut filters = FilterState::new();
        filters.set(NAME, FilterValue::Text("COLA".to_string()));

        assert_eq!(filter_rows(&rows, &filters), vec![0]);
    }

    #[test]
    fn test_multi_select_lowercases_both_sides() {
        let rows = vec![
            product(1, "A", ProductStatus::Available, 0),
            product(2, "B", ProductStatus::StockOut, 0),
            product(3, "C", ProductStatus::StockLow, 0),
        ];
        let mut filters = FilterState::new();
        filters.set(STATUS, set_of(&["available", "STOCK LOW"]));

        assert_eq!(filter_rows(&rows, &filters), vec![0, 2]);
    }

    #[test]
    fn test_empty_values_are_not_stored() {
        let mut filters = FilterState::new();
        filters.set(NAME, FilterValue::Text("x".to_string()));
        filters.set(NAME, FilterValue::Text(String::new()));
        filters.set(STATUS, set_of(&[]));

        assert!(filters.is_empty());
    }

    #[test]
    fn test_empty_set_value_vacuously_passes() {
        let row = product(1, "A", ProductStatus::StockOut, 0);
        assert!(set_of(&[]).accepts(&row.status.label().to_lowercase()));
    }

    #[test]
    fn test_unknown_column_is_ignored() {
        let rows = vec![product(1, "A", ProductStatus::Available, 0)];
        let mut filters = FilterState::new();
        filters.set("actions", FilterValue::Text("zzz".to_string()));

        assert_eq!(filter_rows(&rows, &filters), vec![0]);
    }

    #[test]
    fn test_selected_returns_values_in_order() {
        let mut filters = FilterState::new();
        filters.set(STATUS, set_of(&["Stock Out", "Available"]));

        assert_eq!(filters.selected(STATUS), vec!["Available", "Stock Out"]);
        assert!(filters.selected(NAME).is_empty());
    }
}
