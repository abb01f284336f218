//! UI Model
//!
//! State owned by the front-end: search input, category picker, toasts.

use std::time::Instant;

/// UI preferences and popups
#[derive(Debug, Clone)]
pub struct UiModel {
    /// Whether the search box is receiving keystrokes
    pub search_mode: bool,

    /// Current search query
    pub search_query: String,

    /// Active category filter (None = all categories)
    pub active_category: Option<String>,

    /// Selected row in the category picker popup, when open.
    /// Index 0 is "Show All"; entries above map into `DataModel::categories`.
    pub category_picker: Option<usize>,

    /// Toast notification (message, timestamp)
    pub toast_message: Option<(String, Instant)>,

    /// Set when the user asked for the source to be fetched again
    pub reload_requested: bool,

    /// Flag indicating the UI needs redrawing
    pub dirty: bool,

    /// Whether the app should quit
    pub should_quit: bool,
}

impl UiModel {
    pub fn new() -> Self {
        UiModel {
            search_mode: false,
            search_query: String::new(),
            active_category: None,
            category_picker: None,
            toast_message: None,
            reload_requested: false,
            dirty: true, // Start dirty to trigger initial render
            should_quit: false,
        }
    }

    /// Show toast notification
    pub fn show_toast(&mut self, message: String) {
        self.toast_message = Some((message, Instant::now()));
        self.dirty = true;
    }

    /// Check if toast should be dismissed (after 1.5 seconds)
    pub fn should_dismiss_toast(&self) -> bool {
        self.toast_message
            .as_ref()
            .map(|(_, timestamp)| timestamp.elapsed().as_millis() >= 1500)
            .unwrap_or(false)
    }

    pub fn dismiss_toast(&mut self) {
        self.toast_message = None;
        self.dirty = true;
    }
}

impl Default for UiModel {
    fn default() -> Self {
        Self::new()
    }
}
