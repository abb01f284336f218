//! Tests for the pager: configure arithmetic, button-strip maintenance, and
//! page-size resolution.
//!
//! Scenarios follow the button strip through navigation: numeric clicks
//! inside the rendered window must not shift it, Prev/Next slide it one page
//! at a time, and the jump/ellipsis shortcuts land on the far edges.

use gridtui::app::Grid;
use gridtui::config::Config;
use gridtui::data::{LoadedData, Record, SourceData};
use gridtui::logic::paginate::PageButtonKind;
use gridtui::prefs::{self, PrefStore};
use serde_json::json;

fn records(count: usize) -> Vec<Record> {
    (1..=count)
        .map(|i| {
            serde_json::from_value(json!({
                "title": format!("Item {:03}", i),
                "category": "widgets",
                "enabled": 1
            }))
            .expect("valid record fixture")
        })
        .collect()
}

fn test_config(default_page_size: usize) -> Config {
    Config {
        columns: vec!["title".to_string()],
        default_sort_column: Some("title".to_string()),
        default_page_size,
        ..Config::default()
    }
}

fn make_grid(count: usize, default_page_size: usize) -> Grid {
    let prefs = PrefStore::new_in_memory("catalog").expect("in-memory store");
    let loaded = LoadedData {
        source: SourceData::Records(records(count)),
        columns: Vec::new(),
    };
    let mut grid = Grid::new(test_config(default_page_size), prefs, loaded);
    grid.init();
    grid
}

fn numeric_pages(grid: &Grid) -> Vec<usize> {
    grid.model
        .pager
        .buttons
        .iter()
        .filter_map(|b| match b.kind {
            PageButtonKind::Numeric(n) => Some(n),
            _ => None,
        })
        .collect()
}

fn nav_disabled(grid: &Grid, kind: PageButtonKind) -> bool {
    grid.model
        .pager
        .buttons
        .iter()
        .find(|b| b.kind == kind)
        .map(|b| b.disabled)
        .unwrap_or(false)
}

#[test]
fn test_configure_arithmetic() {
    let grid = make_grid(47, 10);
    let pager = &grid.model.pager;

    assert_eq!(pager.page_size, 10);
    assert_eq!(pager.total_pages, 5);
    assert_eq!(pager.visible, Some((1, 10)));
    assert_eq!(pager.summary, "Displaying 1 to 10 of 47 results.");
}

#[test]
fn test_last_page_is_short() {
    let mut grid = make_grid(47, 10);
    grid.select_page(PageButtonKind::JumpEnd);

    let pager = &grid.model.pager;
    assert_eq!(pager.current_page, 5);
    assert_eq!(pager.visible, Some((41, 47)));
    assert_eq!(pager.summary, "Displaying 41 to 47 of 47 results.");
}

#[test]
fn test_empty_result_set() {
    let grid = make_grid(0, 10);
    let pager = &grid.model.pager;

    assert_eq!(pager.visible, None);
    assert_eq!(pager.summary, "No items found.");
    assert!(pager.buttons.is_empty());
}

#[test]
fn test_single_page_has_no_buttons() {
    let grid = make_grid(8, 10);
    assert!(grid.model.pager.buttons.is_empty());
    assert_eq!(grid.model.pager.summary, "Displaying 1 to 8 of 8 results.");
}

#[test]
fn test_large_set_initial_window() {
    // 250 items at 10 per page: 25 pages
    let grid = make_grid(250, 10);

    assert_eq!(grid.model.pager.total_pages, 25);
    assert_eq!(numeric_pages(&grid), (1..=10).collect::<Vec<_>>());
    assert!(nav_disabled(&grid, PageButtonKind::Prev));
    assert!(!nav_disabled(&grid, PageButtonKind::Next));
    assert!(grid
        .model
        .pager
        .buttons
        .iter()
        .any(|b| b.kind == PageButtonKind::JumpEnd));
}

#[test]
fn test_numeric_click_inside_window_keeps_start() {
    let mut grid = make_grid(250, 10);
    grid.select_page(PageButtonKind::Numeric(5));

    let pager = &grid.model.pager;
    assert_eq!(pager.current_page, 5);
    assert_eq!(pager.start_page, 1);
    assert_eq!(numeric_pages(&grid), (1..=10).collect::<Vec<_>>());
    let active: Vec<_> = grid
        .model
        .pager
        .buttons
        .iter()
        .filter(|b| b.active)
        .map(|b| b.kind)
        .collect();
    assert_eq!(active, vec![PageButtonKind::Numeric(5)]);
    assert_eq!(grid.model.pager.visible, Some((41, 50)));
}

#[test]
fn test_next_slides_the_window() {
    let mut grid = make_grid(250, 10);
    grid.select_page(PageButtonKind::Numeric(10));
    grid.select_page(PageButtonKind::Next);

    let pager = &grid.model.pager;
    assert_eq!(pager.current_page, 11);
    assert_eq!(pager.start_page, 2);
    assert_eq!(numeric_pages(&grid), (2..=11).collect::<Vec<_>>());
    assert!(!nav_disabled(&grid, PageButtonKind::Prev));
}

#[test]
fn test_prev_next_clamped_at_boundaries() {
    let mut grid = make_grid(30, 10);
    grid.select_page(PageButtonKind::Prev);
    assert_eq!(grid.model.pager.current_page, 1);

    grid.select_page(PageButtonKind::JumpEnd);
    grid.select_page(PageButtonKind::Next);
    assert_eq!(grid.model.pager.current_page, 3);
    assert!(nav_disabled(&grid, PageButtonKind::Next));
}

#[test]
fn test_small_set_window_never_drifts() {
    // Five pages: Prev/Next must keep the full strip anchored at page 1
    let mut grid = make_grid(47, 10);
    grid.select_page(PageButtonKind::Next);
    grid.select_page(PageButtonKind::Next);

    let pager = &grid.model.pager;
    assert_eq!(pager.current_page, 3);
    assert_eq!(pager.start_page, 1);
    assert_eq!(numeric_pages(&grid), vec![1, 2, 3, 4, 5]);
}

#[test]
fn test_jump_and_ellipsis_targets() {
    let mut grid = make_grid(250, 10);

    grid.select_page(PageButtonKind::EllipsisEnd);
    assert_eq!(grid.model.pager.current_page, 24);
    assert_eq!(grid.model.pager.start_page, 16);
    assert_eq!(numeric_pages(&grid), (16..=25).collect::<Vec<_>>());
    // Near the end: jump-to-start pair appears, end pair disappears
    assert!(grid
        .model
        .pager
        .buttons
        .iter()
        .any(|b| b.kind == PageButtonKind::JumpStart));
    assert!(!grid
        .model
        .pager
        .buttons
        .iter()
        .any(|b| b.kind == PageButtonKind::JumpEnd));

    grid.select_page(PageButtonKind::EllipsisStart);
    assert_eq!(grid.model.pager.current_page, 2);
    assert_eq!(grid.model.pager.start_page, 1);

    grid.select_page(PageButtonKind::JumpStart);
    assert_eq!(grid.model.pager.current_page, 1);
    assert!(nav_disabled(&grid, PageButtonKind::Prev));
}

#[test]
fn test_page_size_change_resets_and_persists() {
    let mut grid = make_grid(250, 10);
    grid.select_page(PageButtonKind::Numeric(3));

    grid.select_page_size(25);

    let pager = &grid.model.pager;
    assert_eq!(pager.current_page, 1);
    assert_eq!(pager.start_page, 1);
    assert_eq!(pager.page_size, 25);
    assert_eq!(pager.total_pages, 10);
    assert_eq!(
        grid.prefs.get(prefs::PAGE_SIZE).unwrap(),
        Some("25".to_string())
    );
}

#[test]
fn test_page_size_fallback_to_config_default() {
    let mut grid = make_grid(47, 30);
    grid.select_page_size(0);
    assert_eq!(grid.model.pager.page_size, 30);
}

#[test]
fn test_page_size_fallback_to_hardcoded_constant() {
    // Config default is unusable too: the hardcoded 25 wins
    let mut grid = make_grid(47, 0);
    grid.select_page_size(0);
    assert_eq!(grid.model.pager.page_size, 25);
}

#[test]
fn test_persisted_page_size_survives_restart() {
    let prefs_store = PrefStore::new_in_memory("catalog").expect("in-memory store");
    prefs_store.set(prefs::PAGE_SIZE, "50").unwrap();

    let loaded = LoadedData {
        source: SourceData::Records(records(120)),
        columns: Vec::new(),
    };
    let mut grid = Grid::new(test_config(10), prefs_store, loaded);
    grid.init();

    assert_eq!(grid.model.pager.page_size, 50);
    assert_eq!(grid.model.pager.total_pages, 3);
}

#[test]
fn test_refilter_resets_page_but_navigation_does_not() {
    let mut grid = make_grid(250, 10);

    grid.select_page(PageButtonKind::Numeric(4));
    assert_eq!(grid.model.pager.current_page, 4);

    // Pure navigation preserves the page
    grid.select_page(PageButtonKind::Next);
    assert_eq!(grid.model.pager.current_page, 5);

    // Regenerating the result set goes back to page 1
    grid.apply_category(None);
    assert_eq!(grid.model.pager.current_page, 1);
    assert_eq!(grid.model.pager.start_page, 1);
}

#[test]
fn test_stale_numeric_target_regenerates_window() {
    let mut grid = make_grid(250, 10);
    // A button that is no longer rendered (e.g. after a size change) is not
    // an error; the window regenerates around it
    grid.select_page(PageButtonKind::Numeric(20));
    assert_eq!(grid.model.pager.current_page, 20);
    assert!(numeric_pages(&grid).contains(&20));
}
