//! Grid Model
//!
//! Pure, cloneable state for the grid, organized into focused sub-models:
//!
//! - **DataModel**: the raw source, derived columns/categories, and the
//!   current (filtered + sorted) result set
//! - **UiModel**: search input, category selection, popups, toasts
//! - **PagerModel**: the page window and generated button strip
//!
//! All I/O (preference store, record fetch) lives outside the model.

pub mod data;
pub mod pager;
pub mod ui;

pub use data::DataModel;
pub use pager::PagerModel;
pub use ui::UiModel;

use crate::data::SourceData;

/// Root model composed of focused sub-models
#[derive(Debug, Clone)]
pub struct GridModel {
    pub data: DataModel,
    pub ui: UiModel,
    pub pager: PagerModel,
}

impl GridModel {
    pub fn new(source: SourceData) -> Self {
        GridModel {
            data: DataModel::new(source),
            ui: UiModel::new(),
            pager: PagerModel::new(),
        }
    }
}
