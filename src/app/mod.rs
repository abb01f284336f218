//! Grid orchestration
//!
//! The `Grid` owns all mutable state (model, preference store, debounce
//! timer) and exposes the operations the front-end drives:
//! - filters: the filter -> sort pipeline with preference resolution
//! - pagination: page window maintenance and button selection
//! - search: debounced free-text search entry points

mod filters;
mod pagination;
mod search;

pub use filters::{FilterParams, PipelineSource};

use std::time::Duration;

use tracing::warn;

use crate::config::Config;
use crate::data::{LoadedData, Record};
use crate::logic::debounce::Debouncer;
use crate::logic::filter;
use crate::model::GridModel;
use crate::prefs::PrefStore;
use crate::{ArchivedVisibility, SortDirection};

pub struct Grid {
    pub config: Config,
    pub prefs: PrefStore,
    pub model: GridModel,
    pub search_timer: Debouncer,
}

impl Grid {
    pub fn new(config: Config, prefs: PrefStore, loaded: LoadedData) -> Self {
        let debounce = Duration::from_millis(config.search_debounce_ms);
        let mut grid = Grid {
            config,
            prefs,
            model: GridModel::new(loaded.source),
            search_timer: Debouncer::new(debounce),
        };
        grid.adopt_source(loaded.columns);
        grid
    }

    /// Run the initial pipeline and set up the pager. Call once after
    /// construction.
    pub fn init(&mut self) {
        self.refilter_from_source();
    }

    /// Replace the record source (reload). Derived columns and categories are
    /// rebuilt and the pipeline re-runs with the live search/category state.
    pub fn set_source(&mut self, loaded: LoadedData) {
        self.model.data.source = loaded.source;
        self.model.data.current = Vec::new();
        self.adopt_source(loaded.columns);
        self.refilter_from_source();
    }

    fn adopt_source(&mut self, payload_columns: Vec<String>) {
        let records = self.model.data.source.records().unwrap_or(&[]);

        let mut columns = self.config.columns.clone();
        if columns.is_empty() {
            columns = payload_columns;
        }
        if columns.is_empty() {
            if let Some(first) = records.first() {
                columns = first.field_names().map(String::from).collect();
            }
        }

        self.model.data.columns = columns;
        self.model.data.categories =
            filter::distinct_categories(records, &self.config.category_field);
    }

    /// The records visible on the current page.
    pub fn visible_records(&self) -> &[Record] {
        let records = &self.model.data.current;
        match self.model.pager.visible {
            Some((first, last)) if first >= 1 && first <= last && last <= records.len() => {
                &records[first - 1..last]
            }
            _ => &[],
        }
    }

    /// Sort column in effect: persisted preference, else the configured or
    /// derived default.
    pub fn resolved_sort_column(&self) -> String {
        self.pref(crate::prefs::SORT_COLUMN)
            .unwrap_or_else(|| self.default_sort_column())
    }

    pub fn resolved_sort_direction(&self) -> SortDirection {
        self.pref(crate::prefs::SORT_DIRECTION)
            .and_then(|v| SortDirection::parse(&v))
            .unwrap_or(SortDirection::Asc)
    }

    pub fn resolved_archived_visibility(&self) -> ArchivedVisibility {
        self.pref(crate::prefs::SHOW_ARCHIVED)
            .and_then(|v| ArchivedVisibility::parse(&v))
            .unwrap_or(ArchivedVisibility::Show)
    }

    pub(crate) fn default_sort_column(&self) -> String {
        self.config
            .default_sort_column
            .clone()
            .or_else(|| self.model.data.columns.first().cloned())
            .unwrap_or_default()
    }

    /// Best-effort preference read; store failures log and read as absent.
    pub(crate) fn pref(&self, key: &str) -> Option<String> {
        match self.prefs.get(key) {
            Ok(value) => value,
            Err(e) => {
                warn!(key, error = %e, "preference read failed");
                None
            }
        }
    }

    /// Best-effort preference write; a failed write never aborts a pipeline
    /// run.
    pub(crate) fn persist_pref(&self, key: &str, value: &str) {
        if let Err(e) = self.prefs.set(key, value) {
            warn!(key, value, error = %e, "preference write failed");
        }
    }
}
