//! Pager orchestration
//!
//! Maintains the page window over the current result set: resolving the page
//! size (argument, then persisted preference, then configured default, then
//! the hardcoded fallback), regenerating the button strip, and handling
//! button activation.

use crate::logic::paginate::{self, PageButtonKind};
use crate::prefs;

use super::Grid;

/// Last-resort page size when both the argument and the configured default
/// are unusable.
const FALLBACK_PAGE_SIZE: usize = 25;

impl Grid {
    /// Recompute the page window for `item_count` items. With no explicit
    /// `page_size` the resolved size is kept, or read from the preference
    /// store on the first call.
    pub fn configure(&mut self, page_size: Option<usize>, item_count: usize) {
        let size = match page_size {
            Some(requested) => self.sanitize_page_size(Some(requested)),
            None if self.model.pager.page_size == 0 => self.resolve_page_size_pref(),
            None => self.model.pager.page_size,
        };

        let pager = &mut self.model.pager;
        pager.page_size = size;
        pager.total_items = item_count;
        pager.total_pages = paginate::page_count(item_count, size);
        pager.current_page = pager.current_page.clamp(1, pager.total_pages.max(1));
        pager.start_page = pager.start_page.clamp(1, paginate::max_start(pager.total_pages));

        self.regenerate_buttons();
        self.recompute_slice();
    }

    /// Page-size link activated: back to the first page with the new size,
    /// persisted for the next run.
    pub fn select_page_size(&mut self, requested: usize) {
        self.model.pager.reset_to_first_page();
        let size = self.sanitize_page_size(Some(requested));
        self.persist_pref(prefs::PAGE_SIZE, &size.to_string());

        let count = self.model.data.current.len();
        self.configure(Some(size), count);
        self.model.ui.show_toast(format!("{} per page", size));
    }

    /// Handle activation of any button produced by the generator.
    pub fn select_page(&mut self, target: PageButtonKind) {
        let total = self.model.pager.total_pages;
        if total == 0 {
            return;
        }
        let max_start = paginate::max_start(total);

        let mut regenerate = true;
        {
            let pager = &mut self.model.pager;
            match target {
                PageButtonKind::JumpStart => {
                    pager.current_page = 1;
                    pager.start_page = 1;
                }
                PageButtonKind::EllipsisStart => {
                    pager.current_page = 2.min(total);
                    pager.start_page = 1;
                }
                PageButtonKind::EllipsisEnd => {
                    pager.current_page = total.saturating_sub(1).max(1);
                    pager.start_page = max_start;
                }
                PageButtonKind::JumpEnd => {
                    pager.current_page = total;
                    pager.start_page = max_start;
                }
                PageButtonKind::Prev => {
                    if pager.current_page > 1 {
                        pager.current_page -= 1;
                        pager.start_page = pager.start_page.saturating_sub(1).max(1);
                    }
                }
                PageButtonKind::Next => {
                    if pager.current_page < total {
                        pager.current_page += 1;
                        pager.start_page = (pager.start_page + 1).min(max_start);
                    }
                }
                PageButtonKind::Numeric(page) => {
                    pager.current_page = page.clamp(1, total);
                    // A target inside the rendered strip only moves the
                    // active marker; the window stays put. A stale target
                    // (e.g. after a page-size change) re-anchors the window
                    // on it instead.
                    if pager.strip_contains(pager.current_page) {
                        regenerate = false;
                    } else {
                        pager.start_page = pager.current_page.min(max_start);
                    }
                }
            }
        }

        if regenerate {
            self.regenerate_buttons();
        } else {
            let pager = &mut self.model.pager;
            let current = pager.current_page;
            for button in &mut pager.buttons {
                if let PageButtonKind::Numeric(n) = button.kind {
                    button.active = n == current;
                }
            }
        }

        self.update_nav_disabled();
        self.recompute_slice();
        self.model.ui.dirty = true;
    }

    fn regenerate_buttons(&mut self) {
        let pager = &mut self.model.pager;
        pager.buttons =
            paginate::generate_buttons(pager.start_page, pager.total_pages, pager.current_page);
    }

    /// Prev/Next reflect the page boundaries after navigation, overriding
    /// the window-position state the generator assigned.
    fn update_nav_disabled(&mut self) {
        let pager = &mut self.model.pager;
        let (current, total) = (pager.current_page, pager.total_pages);
        for button in &mut pager.buttons {
            match button.kind {
                PageButtonKind::Prev => button.disabled = current == 1,
                PageButtonKind::Next => button.disabled = current == total,
                _ => {}
            }
        }
    }

    fn recompute_slice(&mut self) {
        let pager = &mut self.model.pager;
        pager.visible =
            paginate::visible_range(pager.current_page, pager.page_size, pager.total_items);
        pager.summary = paginate::summary_line(pager.visible, pager.total_items);
    }

    /// Three-tier fallback: requested size, configured default, hardcoded
    /// constant. Never fails.
    fn sanitize_page_size(&self, requested: Option<usize>) -> usize {
        match requested {
            Some(size) if size > 0 => size,
            _ if self.config.default_page_size > 0 => self.config.default_page_size,
            _ => FALLBACK_PAGE_SIZE,
        }
    }

    /// First-use resolution from the preference store; the chosen size is
    /// persisted when the preference was missing or unusable.
    fn resolve_page_size_pref(&mut self) -> usize {
        let stored = self
            .pref(prefs::PAGE_SIZE)
            .and_then(|v| v.trim().parse::<usize>().ok())
            .filter(|&v| v > 0);

        match stored {
            Some(size) => size,
            None => {
                let size = self.sanitize_page_size(None);
                self.persist_pref(prefs::PAGE_SIZE, &size.to_string());
                size
            }
        }
    }

    /// Cycle through the configured page-size options. `step` is +1/-1.
    pub fn cycle_page_size(&mut self, step: isize) {
        let options = &self.config.page_size_options;
        if options.is_empty() {
            return;
        }
        let current = self.model.pager.page_size;
        let position = options.iter().position(|&o| o == current);
        let next = match position {
            Some(index) => {
                let len = options.len() as isize;
                let wrapped = (index as isize + step).rem_euclid(len) as usize;
                options[wrapped]
            }
            // Current size is not one of the options: start from the edge
            None if step > 0 => options[0],
            None => options[options.len() - 1],
        };
        self.select_page_size(next);
    }
}
