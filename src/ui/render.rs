//! Main render orchestration

use ratatui::Frame;

use crate::app::Grid;

use super::{layout, pagination_bar, picker, search, status_bar, table, toast};

pub fn render(f: &mut Frame, grid: &Grid) {
    let ui = &grid.model.ui;
    let search_visible = ui.search_mode || !ui.search_query.is_empty();
    let areas = layout::compute(f.area(), search_visible);

    table::render_table(f, areas.table, grid);
    if let Some(area) = areas.search {
        search::render_search_input(f, area, grid);
    }
    pagination_bar::render_pagination(f, areas.pagination, grid);
    status_bar::render_status_bar(f, areas.status, grid);

    if ui.category_picker.is_some() {
        picker::render_category_picker(f, grid);
    }
    if let Some((message, _)) = &ui.toast_message {
        toast::render_toast(f, message);
    }
}
