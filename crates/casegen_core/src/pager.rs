//! Page bookkeeping for the test case list.
//!
//! Pages are numbered from 1. The current page never drops below 1 and never
//! exceeds the last page, so navigation past either end is a no-op.

/// Page size used when nothing else is configured.
pub const DEFAULT_ITEMS_PER_PAGE: usize = 10;

/// Position within a paginated list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    current_page: usize,
    items_per_page: usize,
    total_items: usize,
}

impl Default for PageState {
    fn default() -> Self {
        Self::new(DEFAULT_ITEMS_PER_PAGE, 0)
    }
}

impl PageState {
    /// Creates a state positioned on page 1. A page size of 0 is raised to 1.
    pub fn new(items_per_page: usize, total_items: usize) -> Self {
        Self {
            current_page: 1,
            items_per_page: items_per_page.max(1),
            total_items,
        }
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn items_per_page(&self) -> usize {
        self.items_per_page
    }

    pub fn total_items(&self) -> usize {
        self.total_items
    }

    /// Number of pages, 0 for an empty list.
    pub fn total_pages(&self) -> usize {
        self.total_items.div_ceil(self.items_per_page)
    }

    pub fn has_prev(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages()
    }

    /// Start and end indices of the visible slice.
    pub fn bounds(&self) -> (usize, usize) {
        let start = (self.current_page - 1).saturating_mul(self.items_per_page);
        let start = start.min(self.total_items);
        let end = (start + self.items_per_page).min(self.total_items);
        (start, end)
    }

    /// Moves one page forward. Returns false when already on the last page.
    pub fn next_page(&mut self) -> bool {
        if !self.has_next() {
            return false;
        }
        self.current_page += 1;
        true
    }

    /// Moves one page back. Returns false when already on page 1.
    pub fn prev_page(&mut self) -> bool {
        if !self.has_prev() {
            return false;
        }
        self.current_page -= 1;
        true
    }

    /// Jumps to `page`, clamped into the valid range.
    pub fn set_page(&mut self, page: usize) {
        self.current_page = page.clamp(1, self.last_page());
    }

    /// Replaces the item count and returns to page 1.
    pub fn reset(&mut self, total_items: usize) {
        self.total_items = total_items;
        self.current_page = 1;
    }

    /// Changes the page size and pulls the current page back into range.
    pub fn set_items_per_page(&mut self, items_per_page: usize) {
        self.items_per_page = items_per_page.max(1);
        self.set_page(self.current_page);
    }

    fn last_page(&self) -> usize {
        self.total_pages().max(1)
    }
}

/// Everything the presentation layer needs to draw one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView {
    pub visible_test_cases: Vec<String>,
    pub current_page: usize,
    pub total_pages: usize,
    pub total_items: usize,
    pub has_prev: bool,
    pub has_next: bool,
}

impl PageView {
    /// Pagination controls are only worth showing with more than one page.
    pub fn controls_needed(&self) -> bool {
        self.total_pages > 1
    }

    /// Visible cases separated by a blank line, as shown in the result pane.
    pub fn text(&self) -> String {
        self.visible_test_cases.join("\n\n")
    }
}

/// Builds the view of the page `state` points at.
pub fn paginate(list: &[String], state: &PageState) -> PageView {
    let (start, end) = state.bounds();
    let end = end.min(list.len());
    let start = start.min(end);
    PageView {
        visible_test_cases: list[start..end].to_vec(),
        current_page: state.current_page(),
        total_pages: state.total_pages(),
        total_items: state.total_items(),
        has_prev: state.has_prev(),
        has_next: state.has_next(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn numbered(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("case {i}")).collect()
    }

    #[test]
    fn empty_list_has_no_pages_and_stays_on_page_one() {
        let mut state = PageState::new(10, 0);
        assert_eq!(state.total_pages(), 0);
        assert!(!state.next_page());
        assert!(!state.prev_page());
        assert_eq!(state.current_page(), 1);

        let view = paginate(&[], &state);
        assert!(view.visible_test_cases.is_empty());
        assert!(!view.controls_needed());
        assert!(!view.has_prev);
        assert!(!view.has_next);
    }

    #[test]
    fn twenty_five_items_span_three_pages() {
        let list = numbered(25);
        let mut state = PageState::new(10, list.len());

        let first = paginate(&list, &state);
        assert_eq!(first.visible_test_cases, list[0..10].to_vec());
        assert_eq!(first.total_pages, 3);
        assert!(!first.has_prev);
        assert!(first.has_next);

        assert!(state.next_page());
        let second = paginate(&list, &state);
        assert_eq!(second.visible_test_cases, list[10..20].to_vec());
        assert!(second.has_prev && second.has_next);

        assert!(state.next_page());
        let third = paginate(&list, &state);
        assert_eq!(third.visible_test_cases, list[20..25].to_vec());
        assert!(third.has_prev);
        assert!(!third.has_next);

        assert!(!state.next_page());
        assert_eq!(state.current_page(), 3);
    }

    #[test]
    fn previous_on_first_page_is_a_no_op() {
        let mut state = PageState::new(10, 5);
        assert!(!state.prev_page());
        assert_eq!(state.current_page(), 1);
    }

    #[test]
    fn single_page_needs_no_controls() {
        let list = numbered(10);
        let view = paginate(&list, &PageState::new(10, list.len()));
        assert_eq!(view.total_pages, 1);
        assert!(!view.controls_needed());
    }

    #[test]
    fn shrinking_page_size_keeps_page_in_range() {
        let mut state = PageState::new(5, 12);
        state.set_page(3);
        assert_eq!(state.current_page(), 3);
        state.set_items_per_page(10);
        assert_eq!(state.current_page(), 2);
        state.set_page(99);
        assert_eq!(state.current_page(), 2);
        state.set_page(0);
        assert_eq!(state.current_page(), 1);
    }

    #[test]
    fn zero_page_size_is_raised_to_one() {
        let state = PageState::new(0, 3);
        assert_eq!(state.items_per_page(), 1);
        assert_eq!(state.total_pages(), 3);
    }

    #[rstest]
    #[case(0, 10)]
    #[case(1, 10)]
    #[case(10, 10)]
    #[case(11, 10)]
    #[case(25, 10)]
    #[case(7, 3)]
    #[case(9, 1)]
    fn walking_all_pages_reconstructs_the_list(#[case] len: usize, #[case] per_page: usize) {
        let list = numbered(len);
        let mut state = PageState::new(per_page, len);
        assert_eq!(state.total_pages(), len.div_ceil(per_page));

        let mut seen = paginate(&list, &state).visible_test_cases;
        while state.next_page() {
            seen.extend(paginate(&list, &state).visible_test_cases);
        }
        assert_eq!(seen, list);
    }
}
