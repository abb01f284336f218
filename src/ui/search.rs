//! Search Input UI
//!
//! Renders the search input box with query, match count, and cursor.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::Grid;

pub fn render_search_input(f: &mut Frame, area: Rect, grid: &Grid) {
    let ui = &grid.model.ui;
    let matches = grid.model.data.current.len();

    let title = if ui.search_mode {
        format!(" Search ({} matches) - Enter to accept, Esc to clear ", matches)
    } else {
        format!(" Search ({} matches) - Esc to clear ", matches)
    };

    let border_color = if ui.search_mode {
        Color::Cyan
    } else {
        Color::Gray
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .style(Style::default().fg(border_color));

    let mut spans = vec![Span::styled(
        ui.search_query.clone(),
        Style::default().fg(Color::White),
    )];
    if ui.search_mode {
        spans.push(Span::styled(
            "\u{2588}",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::SLOW_BLINK),
        ));
    }

    f.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}
