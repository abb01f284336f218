//! Keyboard Input Handler
//!
//! Dispatches key events to grid operations. Modal state (category picker,
//! search input) is handled first; the flat key map applies otherwise.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::Grid;
use crate::logic::paginate::PageButtonKind;

pub fn handle_key(grid: &mut Grid, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }
    grid.model.ui.dirty = true;

    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        grid.model.ui.should_quit = true;
        return;
    }

    // Category picker popup swallows all input while open
    if let Some(selected) = grid.model.ui.category_picker {
        let entries = grid.model.data.categories.len() + 1;
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                grid.model.ui.category_picker = Some(selected.saturating_sub(1));
            }
            KeyCode::Down | KeyCode::Char('j') => {
                grid.model.ui.category_picker = Some((selected + 1).min(entries - 1));
            }
            KeyCode::Enter => {
                let choice = if selected == 0 {
                    None
                } else {
                    grid.model.data.categories.get(selected - 1).cloned()
                };
                grid.model.ui.category_picker = None;
                grid.apply_category(choice);
            }
            KeyCode::Esc => {
                grid.model.ui.category_picker = None;
            }
            _ => {}
        }
        return;
    }

    // Search input mode
    if grid.model.ui.search_mode {
        match key.code {
            KeyCode::Esc => grid.clear_search(),
            KeyCode::Enter => grid.commit_search(),
            KeyCode::Backspace => grid.search_input_backspace(),
            KeyCode::Char(c) => grid.search_input_push(c),
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Char('q') => grid.model.ui.should_quit = true,
        KeyCode::Char('/') => grid.enter_search_mode(),
        KeyCode::Esc if !grid.model.ui.search_query.is_empty() => grid.clear_search(),
        KeyCode::Char('c') => {
            grid.model.ui.category_picker = Some(0);
        }
        KeyCode::Char('s') => cycle_sort_column(grid),
        KeyCode::Char('d') => grid.toggle_sort_direction(),
        KeyCode::Char('a') => grid.toggle_archived(),
        KeyCode::Right | KeyCode::Char('n') => {
            if grid.model.pager.current_page < grid.model.pager.total_pages {
                grid.select_page(PageButtonKind::Next);
            }
        }
        KeyCode::Left | KeyCode::Char('p') => {
            if grid.model.pager.current_page > 1 {
                grid.select_page(PageButtonKind::Prev);
            }
        }
        KeyCode::Char('g') | KeyCode::Home => grid.select_page(PageButtonKind::JumpStart),
        KeyCode::Char('G') | KeyCode::End => grid.select_page(PageButtonKind::JumpEnd),
        KeyCode::Char('+') | KeyCode::Char('=') => grid.cycle_page_size(1),
        KeyCode::Char('-') => grid.cycle_page_size(-1),
        KeyCode::Char('r') => grid.model.ui.reload_requested = true,
        _ => {}
    }
}

/// Step the persisted sort column through the displayed columns.
fn cycle_sort_column(grid: &mut Grid) {
    let columns = grid.model.data.columns.clone();
    if columns.is_empty() {
        return;
    }
    let current = grid.resolved_sort_column();
    let next = match columns.iter().position(|c| *c == current) {
        Some(index) => columns[(index + 1) % columns.len()].clone(),
        None => columns[0].clone(),
    };
    grid.apply_sort_column(&next);
}
