//! Pager Model
//!
//! The page window: which page is showing, where the button strip starts,
//! and what the renderer needs (buttons, visible range, summary).
//!
//! Invariant after every operation: `1 <= current_page <= max(total_pages, 1)`
//! and the rendered numeric window contains `current_page`.

use crate::logic::paginate::PageButton;

#[derive(Debug, Clone)]
pub struct PagerModel {
    pub current_page: usize,

    /// First page number shown in the button strip
    pub start_page: usize,

    pub total_pages: usize,

    /// Items per page. 0 means "not yet resolved"; the first configure call
    /// replaces it from the persisted preference or the configured default.
    pub page_size: usize,

    /// Size of the result set being paginated
    pub total_items: usize,

    /// Button strip as last generated
    pub buttons: Vec<PageButton>,

    /// 1-based inclusive index range of the visible slice, None when empty
    pub visible: Option<(usize, usize)>,

    /// Human-readable result summary for the pagination bar
    pub summary: String,
}

impl PagerModel {
    pub fn new() -> Self {
        PagerModel {
            current_page: 1,
            start_page: 1,
            total_pages: 1,
            page_size: 0,
            total_items: 0,
            buttons: Vec::new(),
            visible: None,
            summary: "No items found.".to_string(),
        }
    }

    /// Reset to the first page, keeping the resolved page size.
    pub fn reset_to_first_page(&mut self) {
        self.current_page = 1;
        self.start_page = 1;
        self.total_pages = 1;
    }

    /// Whether the rendered strip contains a numeric button for `page`.
    pub fn strip_contains(&self, page: usize) -> bool {
        use crate::logic::paginate::PageButtonKind;
        self.buttons
            .iter()
            .any(|b| b.kind == PageButtonKind::Numeric(page))
    }
}

impl Default for PagerModel {
    fn default() -> Self {
        Self::new()
    }
}
