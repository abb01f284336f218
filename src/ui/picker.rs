//! Category picker popup
//!
//! Centered list of the source's distinct categories, with "Show All" first.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, List, ListItem},
    Frame,
};

use crate::app::Grid;
use crate::logic::format;

pub fn render_category_picker(f: &mut Frame, grid: &Grid) {
    let selected = match grid.model.ui.category_picker {
        Some(index) => index,
        None => return,
    };

    let categories = &grid.model.data.categories;
    let mut items: Vec<ListItem> = Vec::with_capacity(categories.len() + 1);
    items.push(ListItem::new("Show All"));
    for category in categories {
        items.push(ListItem::new(Line::from(format::title_case(category))));
    }

    let items: Vec<ListItem> = items
        .into_iter()
        .enumerate()
        .map(|(i, item)| {
            if i == selected {
                item.style(
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                item
            }
        })
        .collect();

    let height = (items.len() as u16 + 2).min(f.area().height.saturating_sub(2));
    let area = centered_rect(30, height, f.area());

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Filter by category "),
    );

    f.render_widget(Clear, area);
    f.render_widget(list, area);
}

fn centered_rect(width: u16, height: u16, container: Rect) -> Rect {
    let width = width.min(container.width);
    let height = height.min(container.height);
    Rect {
        x: container.x + (container.width - width) / 2,
        y: container.y + (container.height - height) / 2,
        width,
        height,
    }
}
