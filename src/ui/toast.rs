//! Toast notifications
//!
//! Brief messages rendered over the top-right corner of the table area.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

pub fn render_toast(f: &mut Frame, message: &str) {
    let container = f.area();
    let width = (message.chars().count() as u16 + 4).min(container.width);
    let area = Rect {
        x: container.width.saturating_sub(width + 1),
        y: container.y + 1,
        width,
        height: 3,
    };

    let toast = Paragraph::new(message)
        .style(Style::default().fg(Color::Black).bg(Color::Cyan))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .style(Style::default().bg(Color::Cyan)),
        );

    f.render_widget(Clear, area);
    f.render_widget(toast, area);
}
