//! Record table
//!
//! Renders the visible page of the current result set. Cells are truncated
//! to a fixed width, the price column is formatted as currency, and archived
//! rows are dimmed.

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use crate::app::Grid;
use crate::logic::format;

/// Cell values longer than this many display columns are cut.
const CELL_WIDTH_LIMIT: usize = 75;

pub fn render_table(f: &mut Frame, area: Rect, grid: &Grid) {
    let title = format!(" {} ", grid.config.title);
    let block = Block::default().borders(Borders::ALL).title(title);

    // A failed source renders as a message, not an empty table
    if let Some(message) = grid.model.data.source_error() {
        let error = Paragraph::new(format!("Could not load data: {}", message))
            .style(Style::default().fg(Color::Red))
            .block(block);
        f.render_widget(error, area);
        return;
    }

    let columns = &grid.model.data.columns;
    if columns.is_empty() {
        let empty = Paragraph::new("No columns to display").block(block);
        f.render_widget(empty, area);
        return;
    }

    let header = Row::new(
        columns
            .iter()
            .map(|c| Cell::from(format::title_case(&c.replace('_', " ")))),
    )
    .style(Style::default().add_modifier(Modifier::BOLD))
    .bottom_margin(1);

    let rows = grid.visible_records().iter().map(|record| {
        let style = if record.is_enabled() {
            Style::default()
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let cells = columns.iter().map(|column| {
            let raw = record.text(column);
            let text = if *column == grid.config.price_column {
                format::format_price(
                    &raw,
                    &grid.config.currency,
                    grid.config.price_decimals,
                    grid.config.call_for_pricing,
                )
                .unwrap_or_default()
            } else {
                format::truncate_cell(&raw, CELL_WIDTH_LIMIT).into_owned()
            };
            Cell::from(text)
        });

        Row::new(cells).style(style)
    });

    let widths = vec![Constraint::Ratio(1, columns.len().max(1) as u32); columns.len()];
    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .column_spacing(1);

    f.render_widget(table, area);
}
