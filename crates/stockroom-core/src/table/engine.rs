//! Stateful table view engine.
//!
//! ## State Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  mutator (set_* / clear_facets / *_page)                                │
//! │       │                                                                 │
//! │       ├── facet column changed? ──► sort := createdAt desc             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  recompute()                                                            │
//! │       ├── filtered := filter_rows(source, filters)                     │
//! │       ├── sort_rows(filtered, sort)                                    │
//! │       └── pagination.clamp_to(filtered.len())                          │
//! │                                                                         │
//! │  readers (visible_rows / page_count / can_go_*) never recompute        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;

use crate::table::columns::{self, FilterKind};
use crate::table::filter::{self, FilterState, FilterValue};
use crate::table::pagination::PaginationState;
use crate::table::sort::{self, SortState};
use crate::types::ProductRecord;

/// "Page N of M" as shown under the grid. `page` is 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSummary {
    pub page: usize,
    pub page_count: usize,
}

impl fmt::Display for PageSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Page {} of {}", self.page, self.page_count)
    }
}

/// Owns the snapshot, the view state, and the derived row order.
///
/// Every mutator recomputes before returning, so readers are cheap and
/// always consistent with the current state.
#[derive(Debug, Clone, Default)]
pub struct TableViewEngine {
    source: Vec<ProductRecord>,
    filters: FilterState,
    sort: SortState,
    pagination: PaginationState,
    /// Indices into `source`, filtered then sorted.
    derived: Vec<usize>,
}

impl TableViewEngine {
    /// Engine over `source` with the default state: no filters, newest
    /// first, page 0 of size 8.
    pub fn new(source: Vec<ProductRecord>) -> Self {
        let mut engine = TableViewEngine {
            source,
            ..TableViewEngine::default()
        };
        engine.recompute();
        engine
    }

    // =========================================================================
    // Mutators
    // =========================================================================

    /// Replaces the snapshot. View state is kept.
    pub fn set_source(&mut self, source: Vec<ProductRecord>) {
        self.source = source;
        self.recompute();
    }

    /// Sets or clears (empty string) a text filter.
    ///
    /// Ignored on multi-select columns, so a facet can only change through
    /// [`set_multi_select_filter`](Self::set_multi_select_filter).
    pub fn set_text_filter(&mut self, column_id: &str, value: &str) {
        if !columns::accepts_filter(column_id, FilterKind::Text) {
            return;
        }
        self.filters.set(column_id, FilterValue::Text(value.to_string()));
        self.recompute();
    }

    /// Replaces the accepted set of a multi-select filter; empty clears it.
    ///
    /// Touching a facet column (status, category, supplier) resets the sort
    /// to newest first, even when the set is unchanged. Ignored on text
    /// columns.
    pub fn set_multi_select_filter<I, S>(&mut self, column_id: &str, values: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if !columns::accepts_filter(column_id, FilterKind::MultiSelect) {
            return;
        }
        let values = values.into_iter().map(Into::into).collect();
        self.filters.set(column_id, FilterValue::MultiSelect(values));
        if columns::is_facet(column_id) {
            self.sort = SortState::newest_first();
        }
        self.recompute();
    }

    /// Clears all three facet filters at once and re-anchors the sort.
    pub fn clear_facets(&mut self) {
        for id in columns::FACET_COLUMNS {
            self.filters.remove(id);
        }
        self.sort = SortState::newest_first();
        self.recompute();
    }

    /// Replaces the sole sort entry.
    pub fn set_sort(&mut self, column_id: &str, descending: bool) {
        self.sort = SortState::single(column_id, descending);
        self.recompute();
    }

    /// Replaces the pagination; size 0 becomes 1 and the index is clamped.
    pub fn set_pagination(&mut self, page_index: usize, page_size: usize) {
        self.pagination = PaginationState::new(page_index, page_size);
        self.recompute();
    }

    pub fn first_page(&mut self) {
        self.go_to(0);
    }

    pub fn previous_page(&mut self) {
        if self.can_go_previous() {
            self.go_to(self.pagination.page_index() - 1);
        }
    }

    pub fn next_page(&mut self) {
        if self.can_go_next() {
            self.go_to(self.pagination.page_index() + 1);
        }
    }

    pub fn last_page(&mut self) {
        self.go_to(self.page_count() - 1);
    }

    fn go_to(&mut self, page_index: usize) {
        self.pagination.set_page_index(page_index);
        self.recompute();
    }

    fn recompute(&mut self) {
        let mut rows = filter::filter_rows(&self.source, &self.filters);
        sort::sort_rows(&mut rows, &self.source, &self.sort);
        self.derived = rows;
        self.pagination.clamp_to(self.derived.len());
    }

    // =========================================================================
    // Readers
    // =========================================================================

    /// Rows on the current page, in display order.
    pub fn visible_rows(&self) -> Vec<&ProductRecord> {
        self.derived[self.pagination.window(self.derived.len())]
            .iter()
            .map(|&idx| &self.source[idx])
            .collect()
    }

    /// `ceil(filtered / page_size)`, at least 1.
    pub fn page_count(&self) -> usize {
        self.pagination.page_count(self.derived.len())
    }

    /// Rows passing the filters, across all pages.
    pub fn filtered_row_count(&self) -> usize {
        self.derived.len()
    }

    pub fn can_go_next(&self) -> bool {
        self.pagination.page_index() + 1 < self.page_count()
    }

    pub fn can_go_previous(&self) -> bool {
        self.pagination.page_index() > 0
    }

    pub fn page_summary(&self) -> PageSummary {
        PageSummary {
            page: self.pagination.page_index() + 1,
            page_count: self.page_count(),
        }
    }

    pub fn source(&self) -> &[ProductRecord] {
        &self.source
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn sort(&self) -> &SortState {
        &self.sort
    }

    pub fn pagination(&self) -> PaginationState {
        self.pagination
    }

    /// Selected values of a multi-select column, as stored.
    pub fn selected_values(&self, column_id: &str) -> Vec<&str> {
        self.filters.selected(column_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::columns::{CATEGORY, CREATED_AT, NAME, PRICE, STATUS, SUPPLIER};
    use crate::table::fixtures::{catalog, product};
    use crate::table::SortEntry;
    use crate::types::ProductStatus;

    fn visible_ids(engine: &TableViewEngine) -> Vec<i64> {
        engine.visible_rows().iter().map(|p| p.id).collect()
    }

    fn mixed_statuses() -> Vec<ProductRecord> {
        vec![
            product(1, "Desk Lamp", ProductStatus::Available, 1),
            product(2, "Stapler", ProductStatus::StockOut, 2),
            product(3, "Paper Ream", ProductStatus::StockLow, 3),
            product(4, "Lamp Shade", ProductStatus::Available, 4),
        ]
    }

    #[test]
    fn test_default_state() {
        let engine = TableViewEngine::new(catalog(3));

        assert!(engine.filters().is_empty());
        assert_eq!(engine.sort(), &SortState::newest_first());
        assert_eq!(engine.pagination(), PaginationState::new(0, 8));
        // Newest first
        assert_eq!(visible_ids(&engine), vec![3, 2, 1]);
    }

    #[test]
    fn test_derivation_is_idempotent() {
        let mut engine = TableViewEngine::new(mixed_statuses());
        engine.set_text_filter(NAME, "lamp");

        let first = visible_ids(&engine);
        let second = visible_ids(&engine);
        assert_eq!(first, second);
        assert_eq!(first, vec![4, 1]);
    }

    #[test]
    fn test_filtered_rows_are_subset_of_source() {
        let mut engine = TableViewEngine::new(mixed_statuses());
        engine.set_multi_select_filter(STATUS, ["Available", "Stock Low"]);
        engine.set_text_filter(NAME, "a");

        let source_ids: Vec<i64> = engine.source().iter().map(|p| p.id).collect();
        for id in visible_ids(&engine) {
            assert!(source_ids.contains(&id));
        }
        assert!(engine.filtered_row_count() <= engine.source().len());

        // Every kept row passes every active filter
        for row in engine.visible_rows() {
            assert!(matches!(
                row.status,
                ProductStatus::Available | ProductStatus::StockLow
            ));
            assert!(row.name.to_lowercase().contains('a'));
            assert!(engine.filters().matches(row));
        }
        assert_eq!(visible_ids(&engine), vec![4, 3, 1]);
    }

    #[test]
    fn test_status_membership_is_case_insensitive() {
        let mut engine = TableViewEngine::new(mixed_statuses());
        engine.set_multi_select_filter(STATUS, ["available"]);

        assert_eq!(visible_ids(&engine), vec![4, 1]);
        for row in engine.visible_rows() {
            assert_eq!(row.status, ProductStatus::Available);
        }
    }

    #[test]
    fn test_cleared_facet_restores_all_rows() {
        let mut engine = TableViewEngine::new(mixed_statuses());
        engine.set_multi_select_filter(STATUS, ["Stock Out"]);
        assert_eq!(engine.filtered_row_count(), 1);

        engine.set_multi_select_filter(STATUS, Vec::<String>::new());
        assert_eq!(engine.filtered_row_count(), 4);
        assert!(engine.selected_values(STATUS).is_empty());
    }

    #[test]
    fn test_sort_is_stable_on_ties() {
        // Same created_at, A before B in the source
        let source = vec![
            product(1, "A", ProductStatus::Available, 7),
            product(2, "B", ProductStatus::Available, 7),
        ];
        let engine = TableViewEngine::new(source);

        assert_eq!(visible_ids(&engine), vec![1, 2]);
    }

    #[test]
    fn test_facet_change_resets_sort() {
        let mut engine = TableViewEngine::new(mixed_statuses());
        engine.set_sort(PRICE, false);
        assert_eq!(visible_ids(&engine), vec![1, 2, 3, 4]);

        engine.set_multi_select_filter(STATUS, ["Available"]);

        assert_eq!(
            engine.sort().entries(),
            &[SortEntry {
                column_id: CREATED_AT.to_string(),
                descending: true
            }]
        );
        assert_eq!(visible_ids(&engine), vec![4, 1]);
    }

    #[test]
    fn test_each_facet_column_resets_sort() {
        for column in [STATUS, CATEGORY, SUPPLIER] {
            let mut engine = TableViewEngine::new(mixed_statuses());
            engine.set_sort(NAME, false);
            engine.set_multi_select_filter(column, Vec::<String>::new());
            assert_eq!(engine.sort(), &SortState::newest_first(), "{}", column);
        }
    }

    #[test]
    fn test_text_filter_keeps_sort() {
        let mut engine = TableViewEngine::new(mixed_statuses());
        engine.set_sort(PRICE, false);
        engine.set_text_filter(NAME, "lamp");

        assert_eq!(engine.sort(), &SortState::single(PRICE, false));
        assert_eq!(visible_ids(&engine), vec![1, 4]);
    }

    #[test]
    fn test_ten_rows_make_two_pages() {
        let mut engine = TableViewEngine::new(catalog(10));
        assert_eq!(engine.page_count(), 2);
        assert!(engine.can_go_next());
        assert!(!engine.can_go_previous());
        assert_eq!(engine.visible_rows().len(), 8);

        engine.set_pagination(1, 8);
        assert_eq!(engine.visible_rows().len(), 2);
        // The two oldest rows remain
        assert_eq!(visible_ids(&engine), vec![2, 1]);
        assert!(!engine.can_go_next());
        assert!(engine.can_go_previous());
    }

    #[test]
    fn test_empty_source_has_one_page() {
        let engine = TableViewEngine::new(Vec::new());

        assert_eq!(engine.page_count(), 1);
        assert!(engine.visible_rows().is_empty());
        assert!(!engine.can_go_next());
        assert!(!engine.can_go_previous());
    }

    #[test]
    fn test_page_index_clamped_when_filter_shrinks_rows() {
        let mut engine = TableViewEngine::new(catalog(20));
        engine.set_pagination(2, 8);
        assert_eq!(engine.pagination().page_index(), 2);

        // Only "Item 1" and "Item 10".."Item 19" match
        engine.set_text_filter(NAME, "item 1");
        assert_eq!(engine.page_count(), 2);
        assert_eq!(engine.pagination().page_index(), 1);
        assert_eq!(engine.visible_rows().len(), 3);
    }

    #[test]
    fn test_page_size_change_clamps_index() {
        let mut engine = TableViewEngine::new(catalog(10));
        engine.set_pagination(9, 1);
        assert_eq!(engine.pagination().page_index(), 9);

        engine.set_pagination(9, 5);
        assert_eq!(engine.page_count(), 2);
        assert_eq!(engine.pagination().page_index(), 1);
    }

    #[test]
    fn test_zero_page_size_is_clamped_to_one() {
        let mut engine = TableViewEngine::new(catalog(3));
        engine.set_pagination(0, 0);

        assert_eq!(engine.pagination().page_size(), 1);
        assert_eq!(engine.page_count(), 3);
    }

    #[test]
    fn test_unknown_column_filter_is_ignored() {
        let mut engine = TableViewEngine::new(catalog(4));
        engine.set_text_filter("actions", "nothing matches this");
        engine.set_multi_select_filter("actions", ["x"]);

        assert_eq!(engine.filtered_row_count(), 4);
    }

    #[test]
    fn test_navigation_helpers() {
        let mut engine = TableViewEngine::new(catalog(20));
        engine.last_page();
        assert_eq!(engine.page_summary().to_string(), "Page 3 of 3");

        engine.next_page();
        assert_eq!(engine.pagination().page_index(), 2);

        engine.previous_page();
        assert_eq!(engine.pagination().page_index(), 1);

        engine.first_page();
        engine.previous_page();
        assert_eq!(engine.page_summary(), PageSummary { page: 1, page_count: 3 });
    }

    #[test]
    fn test_clear_facets_keeps_text_filter() {
        let mut engine = TableViewEngine::new(mixed_statuses());
        engine.set_text_filter(NAME, "lamp");
        engine.set_multi_select_filter(STATUS, ["Stock Out"]);
        engine.set_multi_select_filter(SUPPLIER, ["Acme"]);
        engine.set_sort(NAME, false);
        assert_eq!(engine.filtered_row_count(), 0);

        engine.clear_facets();

        assert_eq!(engine.filtered_row_count(), 2);
        assert_eq!(engine.sort(), &SortState::newest_first());
        assert!(engine.selected_values(SUPPLIER).is_empty());
    }

    #[test]
    fn test_page_index_clamped_when_source_shrinks() {
        let mut engine = TableViewEngine::new(catalog(20));
        engine.set_pagination(2, 8);

        engine.set_source(catalog(10));

        assert_eq!(engine.page_count(), 2);
        assert_eq!(engine.pagination().page_index(), 1);
        assert_eq!(visible_ids(&engine), vec![2, 1]);
    }

    #[test]
    fn test_text_write_cannot_touch_a_facet() {
        let mut engine = TableViewEngine::new(mixed_statuses());
        engine.set_multi_select_filter(STATUS, ["Stock Out"]);
        engine.set_sort(PRICE, false);

        engine.set_text_filter(STATUS, "");
        assert_eq!(engine.selected_values(STATUS), vec!["Stock Out"]);
        assert_eq!(engine.filtered_row_count(), 1);

        engine.set_text_filter(STATUS, "avail");
        assert_eq!(
            engine.filters().get(STATUS),
            Some(&FilterValue::MultiSelect(
                ["Stock Out".to_string()].into_iter().collect()
            ))
        );
        assert_eq!(engine.sort(), &SortState::single(PRICE, false));

        // Clearing through the facet path still re-anchors the sort
        engine.set_multi_select_filter(STATUS, Vec::<String>::new());
        assert_eq!(engine.sort(), &SortState::newest_first());
        assert_eq!(engine.filtered_row_count(), 4);
    }

    #[test]
    fn test_multi_select_write_cannot_touch_name() {
        let mut engine = TableViewEngine::new(mixed_statuses());
        engine.set_text_filter(NAME, "lamp");

        engine.set_multi_select_filter(NAME, ["Stapler"]);

        assert_eq!(
            engine.filters().get(NAME),
            Some(&FilterValue::Text("lamp".to_string()))
        );
        assert_eq!(visible_ids(&engine), vec![4, 1]);
    }

    #[test]
    fn test_set_source_keeps_state() {
        let mut engine = TableViewEngine::new(catalog(3));
        engine.set_text_filter(NAME, "item 2");
        engine.set_source(catalog(25));

        // "Item 2" and "Item 20".."Item 25"
        assert_eq!(engine.filtered_row_count(), 7);
        assert_eq!(
            engine.filters().get(NAME),
            Some(&FilterValue::Text("item 2".to_string()))
        );
    }
}
