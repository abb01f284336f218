// UI module - renders the grid state using Ratatui
//
// Architecture:
// - layout: splits the screen into table / search / pagination / status areas
// - render: orchestration function that coordinates all rendering
// - table: the record table (formatting, truncation, archived dimming)
// - pagination_bar: button strip and result summary
// - search: search input box
// - status_bar: totals, sort state, archived visibility, load time
// - picker: category selection popup
// - toast: brief pop-up notices

pub mod layout;
pub mod pagination_bar;
pub mod picker;
pub mod render;
pub mod search;
pub mod status_bar;
pub mod table;
pub mod toast;

// Re-export main render function for convenience
pub use render::render;
