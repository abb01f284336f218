//! Pagination bar
//!
//! Renders the button strip produced by the pager plus the result summary.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::Grid;
use crate::logic::paginate::PageButton;

pub fn render_pagination(f: &mut Frame, area: Rect, grid: &Grid) {
    let pager = &grid.model.pager;

    let mut spans: Vec<Span> = Vec::new();
    for button in &pager.buttons {
        spans.push(Span::styled(
            format!(" {} ", button.label(pager.total_pages)),
            button_style(button),
        ));
    }
    if spans.is_empty() {
        spans.push(Span::styled(
            " ",
            Style::default().fg(Color::DarkGray),
        ));
    }

    let lines = vec![
        Line::from(spans),
        Line::from(Span::styled(
            pager.summary.clone(),
            Style::default().fg(Color::Gray),
        )),
    ];

    let block = Block::default().borders(Borders::ALL).title(" Pages ");
    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn button_style(button: &PageButton) -> Style {
    if button.active {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else if button.disabled {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(Color::Cyan)
    }
}
