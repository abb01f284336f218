//! Pagination arithmetic and button generation
//!
//! Pure functions behind the pager: page counts, visible index ranges, and
//! the sliding 10-button window with prev/next/ellipsis edge handling.

/// Width of the numeric button strip.
pub const PAGE_WINDOW: usize = 10;

/// What a pagination button does when activated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageButtonKind {
    Prev,
    Next,
    Numeric(usize),
    /// "1" shortcut shown before the window near the end of a large set
    JumpStart,
    /// "..." shown next to the JumpStart shortcut (targets page 2)
    EllipsisStart,
    /// "..." shown before the JumpEnd shortcut (targets the second-last page)
    EllipsisEnd,
    /// Last-page shortcut shown after the window
    JumpEnd,
}

/// One entry in the rendered button strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageButton {
    pub kind: PageButtonKind,
    pub disabled: bool,
    pub active: bool,
}

impl PageButton {
    fn new(kind: PageButtonKind) -> Self {
        PageButton {
            kind,
            disabled: false,
            active: false,
        }
    }

    /// Display label. The last-page shortcut needs the page count.
    pub fn label(&self, total_pages: usize) -> String {
        match self.kind {
            PageButtonKind::Prev => "\u{ab} Prev".to_string(),
            PageButtonKind::Next => "Next \u{bb}".to_string(),
            PageButtonKind::Numeric(n) => n.to_string(),
            PageButtonKind::JumpStart => "1".to_string(),
            PageButtonKind::EllipsisStart | PageButtonKind::EllipsisEnd => "...".to_string(),
            PageButtonKind::JumpEnd => total_pages.to_string(),
        }
    }
}

/// Number of pages needed for `total_items` at `page_size` per page.
pub fn page_count(total_items: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total_items.div_ceil(page_size)
}

/// Highest start the button window can take without running past the last
/// page. Sets of ten pages or fewer always render from page 1.
pub fn max_start(total_pages: usize) -> usize {
    total_pages.saturating_sub(PAGE_WINDOW - 1).max(1)
}

/// 1-based inclusive index range of the items visible on `current_page`, or
/// None when there is nothing to show.
pub fn visible_range(
    current_page: usize,
    page_size: usize,
    total_items: usize,
) -> Option<(usize, usize)> {
    if total_items == 0 || page_size == 0 || current_page == 0 {
        return None;
    }
    let first = (current_page - 1) * page_size + 1;
    if first > total_items {
        return None;
    }
    let last = (first + page_size - 1).min(total_items);
    Some((first, last))
}

/// Human-readable result summary for the range produced by [`visible_range`].
pub fn summary_line(range: Option<(usize, usize)>, total_items: usize) -> String {
    match range {
        Some((first, last)) => {
            format!("Displaying {} to {} of {} results.", first, last, total_items)
        }
        None => "No items found.".to_string(),
    }
}

/// Generate the button strip for one render of the pager.
///
/// Emits nothing for a single page. Prev comes first and is disabled when the
/// strip already begins at page 1; an out-of-range `start_at` is pulled back
/// into `[1, max_start]` after that check. The start/end jump-and-ellipsis
/// pairs appear only once the set is wider than the window and the current
/// page sits near the far/near edge respectively.
pub fn generate_buttons(
    start_at: usize,
    total_pages: usize,
    current_page: usize,
) -> Vec<PageButton> {
    let mut buttons = Vec::new();
    if total_pages <= 1 {
        return buttons;
    }

    let window = PAGE_WINDOW.min(total_pages);

    let mut prev = PageButton::new(PageButtonKind::Prev);
    prev.disabled = start_at == 1;
    let start = start_at.clamp(1, max_start(total_pages));
    buttons.push(prev);

    if total_pages > PAGE_WINDOW && current_page + (PAGE_WINDOW - 1) > total_pages {
        buttons.push(PageButton::new(PageButtonKind::JumpStart));
        buttons.push(PageButton::new(PageButtonKind::EllipsisStart));
    }

    for page in start..start + window {
        let mut button = PageButton::new(PageButtonKind::Numeric(page));
        button.active = page == current_page;
        buttons.push(button);
    }

    if total_pages > PAGE_WINDOW && current_page + (PAGE_WINDOW - 1) < total_pages {
        buttons.push(PageButton::new(PageButtonKind::EllipsisEnd));
        buttons.push(PageButton::new(PageButtonKind::JumpEnd));
    }

    let mut next = PageButton::new(PageButtonKind::Next);
    next.disabled = total_pages >= PAGE_WINDOW && start == total_pages - (PAGE_WINDOW - 1);
    buttons.push(next);

    buttons
}
