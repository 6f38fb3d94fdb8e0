//! Page position and size.

use crate::DEFAULT_PAGE_SIZE;

/// `(page_index, page_size)` with `page_size >= 1` guaranteed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationState {
    page_index: usize,
    page_size: usize,
}

impl PaginationState {
    /// Creates a pagination state; a zero page size becomes 1.
    pub fn new(page_index: usize, page_size: usize) -> Self {
        PaginationState {
            page_index,
            page_size: page_size.max(1),
        }
    }

    #[inline]
    pub fn page_index(&self) -> usize {
        self.page_index
    }

    #[inline]
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// `ceil(row_count / page_size)`, never less than 1.
    pub fn page_count(&self, row_count: usize) -> usize {
        row_count.div_ceil(self.page_size).max(1)
    }

    /// Pulls `page_index` back into `[0, page_count - 1]`.
    pub fn clamp_to(&mut self, row_count: usize) {
        let last = self.page_count(row_count) - 1;
        if self.page_index > last {
            self.page_index = last;
        }
    }

    pub(crate) fn set_page_index(&mut self, page_index: usize) {
        self.page_index = page_index;
    }

    /// Half-open range of row positions shown on the current page,
    /// clipped to `row_count`. Empty when the page is past the end.
    pub fn window(&self, row_count: usize) -> std::ops::Range<usize> {
        let start = self.page_index.saturating_mul(self.page_size).min(row_count);
        let end = start.saturating_add(self.page_size).min(row_count);
        start..end
    }
}

impl Default for PaginationState {
    fn default() -> Self {
        PaginationState::new(0, DEFAULT_PAGE_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_page_size_is_clamped() {
        let state = PaginationState::new(0, 0);
        assert_eq!(state.page_size(), 1);
        assert_eq!(state.page_count(3), 3);
    }

    #[test]
    fn test_page_count_minimum_one() {
        let state = PaginationState::default();
        assert_eq!(state.page_count(0), 1);
        assert_eq!(state.page_count(8), 1);
        assert_eq!(state.page_count(9), 2);
        assert_eq!(state.page_count(10), 2);
    }

    #[test]
    fn test_window_past_end_is_empty() {
        let state = PaginationState::new(5, 8);
        assert!(state.window(10).is_empty());

        let state = PaginationState::new(1, 8);
        assert_eq!(state.window(10), 8..10);
    }

    #[test]
    fn test_clamp_pulls_index_back() {
        let mut state = PaginationState::new(4, 8);
        state.clamp_to(10);
        assert_eq!(state.page_index(), 1);

        state.clamp_to(0);
        assert_eq!(state.page_index(), 0);
    }
}
