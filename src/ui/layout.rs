//! Screen layout
//!
//! Vertical split: table on top, optional search box, pagination bar, one
//! status line at the bottom.

use ratatui::layout::{Constraint, Layout, Rect};

pub struct Areas {
    pub table: Rect,
    pub search: Option<Rect>,
    pub pagination: Rect,
    pub status: Rect,
}

pub fn compute(area: Rect, search_visible: bool) -> Areas {
    if search_visible {
        let chunks = Layout::vertical([
            Constraint::Min(5),
            Constraint::Length(3),
            Constraint::Length(4),
            Constraint::Length(1),
        ])
        .split(area);
        Areas {
            table: chunks[0],
            search: Some(chunks[1]),
            pagination: chunks[2],
            status: chunks[3],
        }
    } else {
        let chunks = Layout::vertical([
            Constraint::Min(5),
            Constraint::Length(4),
            Constraint::Length(1),
        ])
        .split(area);
        Areas {
            table: chunks[0],
            search: None,
            pagination: chunks[1],
            status: chunks[2],
        }
    }
}
