//! Bottom status bar: totals, sort state, archived visibility, active
//! category, load time, and key hints.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::Grid;
use crate::logic::format;
use crate::ArchivedVisibility;

pub fn render_status_bar(f: &mut Frame, area: Rect, grid: &Grid) {
    let direction_arrow = match grid.resolved_sort_direction() {
        crate::SortDirection::Asc => "\u{2191}",
        crate::SortDirection::Desc => "\u{2193}",
    };
    let archived = match grid.resolved_archived_visibility() {
        ArchivedVisibility::Show => "shown",
        ArchivedVisibility::Hide => "hidden",
    };
    let category = grid
        .model
        .ui
        .active_category
        .as_deref()
        .map(format::title_case)
        .unwrap_or_else(|| "All".to_string());

    let mut left = format!(
        "Total: {} results \u{2502} Sort: {} {} \u{2502} Archived: {} \u{2502} Category: {}",
        grid.model.pager.total_items,
        grid.resolved_sort_column(),
        direction_arrow,
        archived,
        category,
    );
    if let Some(ms) = grid.model.data.last_load_ms {
        left.push_str(&format!(" \u{2502} Loaded in {}ms", ms));
    }

    let hints = "/ search  c category  s sort  d direction  a archived  \u{2190}\u{2192} page  +/- size  r reload  q quit";

    let width = area.width as usize;
    let padding = width
        .saturating_sub(left.chars().count())
        .saturating_sub(hints.chars().count());

    let line = Line::from(vec![
        Span::styled(left, Style::default().fg(Color::White)),
        Span::raw(" ".repeat(padding)),
        Span::styled(hints, Style::default().fg(Color::DarkGray)),
    ]);

    f.render_widget(Paragraph::new(line), area);
}
