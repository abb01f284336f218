//! Debounced search entry points
//!
//! Keystrokes only re-arm the timer; the pipeline runs once per pause in
//! typing, when the event loop notices the deadline has passed.

use super::Grid;

impl Grid {
    pub fn enter_search_mode(&mut self) {
        self.model.ui.search_mode = true;
        self.model.ui.dirty = true;
    }

    /// Commit the query and leave input mode. The pending debounce, if any,
    /// still fires so the final keystrokes are never lost.
    pub fn commit_search(&mut self) {
        self.model.ui.search_mode = false;
        self.model.ui.dirty = true;
    }

    pub fn search_input_push(&mut self, c: char) {
        self.model.ui.search_query.push(c);
        self.search_timer.poke();
        self.model.ui.dirty = true;
    }

    pub fn search_input_backspace(&mut self) {
        if self.model.ui.search_query.pop().is_some() {
            self.search_timer.poke();
        }
        self.model.ui.dirty = true;
    }

    /// Drop the query and refilter immediately.
    pub fn clear_search(&mut self) {
        self.model.ui.search_query.clear();
        self.model.ui.search_mode = false;
        self.search_timer.cancel();
        self.refilter_from_source();
    }

    /// Called from the event loop tick. Runs the pipeline when the quiet
    /// period has elapsed; returns whether it did.
    pub fn take_due_search(&mut self) -> bool {
        if self.search_timer.fire() {
            self.refilter_from_source();
            true
        } else {
            false
        }
    }
}
