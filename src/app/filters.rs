//! Filter pipeline orchestration
//!
//! `filter_results` merges call parameters with persisted preferences, then
//! runs the stages in order: archived filter, category filter, search
//! filter, sort. Valid overrides are persisted immediately; invalid ones are
//! silently ignored in favor of the last-known-good value.

use crate::data::Record;
use crate::logic::filter;
use crate::prefs;
use crate::{ArchivedVisibility, SortDirection};

use super::Grid;

/// Transient input to one pipeline invocation. Never persisted itself; only
/// the resolved preference values are.
#[derive(Debug, Clone, Default)]
pub struct FilterParams {
    /// Keep only records in ANY of these categories
    pub categories: Option<Vec<String>>,
    /// Free-text search term
    pub search_string: Option<String>,
    /// Columns the search term is matched against
    pub search_columns: Option<Vec<String>>,
    /// Raw "asc"/"desc" override, validated case-insensitively
    pub sort_direction: Option<String>,
    /// Column override, applied only when present on the records
    pub sort_column: Option<String>,
    /// Raw "show"/"hide" override, validated case-insensitively
    pub archived: Option<String>,
}

/// Which record set a pipeline run starts from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineSource {
    /// The full record set as loaded
    Raw,
    /// The current result set (pure re-sort without re-filtering)
    Current,
}

impl Grid {
    /// Run the pipeline. Returns the new current result set, or None when
    /// the source is the error sentinel (no partial result is produced).
    pub fn filter_results(
        &mut self,
        source: PipelineSource,
        params: &FilterParams,
    ) -> Option<&[Record]> {
        let data = match &self.model.data.source {
            crate::data::SourceData::Error(_) => return None,
            crate::data::SourceData::Records(records) => match source {
                PipelineSource::Raw => records.clone(),
                PipelineSource::Current => self.model.data.current.clone(),
            },
        };

        let result = self.run_stages(data, params);
        self.model.data.current = result;
        Some(&self.model.data.current)
    }

    fn run_stages(&mut self, mut data: Vec<Record>, params: &FilterParams) -> Vec<Record> {
        // Resolve preferences, applying valid overrides and persisting them
        let mut direction = self.resolved_sort_direction();
        if let Some(raw) = &params.sort_direction {
            if let Some(parsed) = SortDirection::parse(raw) {
                direction = parsed;
                self.persist_pref(prefs::SORT_DIRECTION, parsed.as_str());
            }
        }

        let mut sort_column = self.resolved_sort_column();
        if let Some(column) = &params.sort_column {
            if data.iter().any(|r| r.has_field(column)) {
                sort_column = column.clone();
                self.persist_pref(prefs::SORT_COLUMN, column);
            }
        }

        let mut archived = self.resolved_archived_visibility();
        if let Some(raw) = &params.archived {
            if let Some(parsed) = ArchivedVisibility::parse(raw) {
                archived = parsed;
                self.persist_pref(prefs::SHOW_ARCHIVED, parsed.as_str());
            }
        }

        // Archived filter
        if archived == ArchivedVisibility::Hide {
            data.retain(Record::is_enabled);
        }

        // Category filter
        if let Some(categories) = &params.categories {
            if !categories.is_empty() {
                let field = self.config.category_field.clone();
                data.retain(|r| filter::matches_category(r, &field, categories));
            }
        }

        // Search filter; an empty trimmed term means "no search", not
        // "search for the empty string"
        if let (Some(term), Some(columns)) = (&params.search_string, &params.search_columns) {
            if let Some(pattern) = filter::search_pattern(term) {
                data.retain(|r| filter::matches_search(r, &pattern, columns));
            }
        }

        // Sort
        filter::sort_records(&mut data, &sort_column, direction);

        data
    }

    /// Category link activated. Re-filters from the raw source, combining
    /// the new category with whatever sits in the search box.
    pub fn apply_category(&mut self, category: Option<String>) {
        self.model.ui.active_category = category.clone();
        let note = match &category {
            Some(c) => format!("Filter: {}", crate::logic::format::title_case(c)),
            None => "Showing all categories".to_string(),
        };
        self.model.ui.show_toast(note);
        self.refilter_from_source();
    }

    /// Sort link activated: pure re-sort of the current result set.
    pub fn apply_sort_column(&mut self, column: &str) {
        let params = FilterParams {
            sort_column: Some(column.to_string()),
            ..Default::default()
        };
        if self.filter_results(PipelineSource::Current, &params).is_some() {
            self.reset_pager_and_configure();
        }
    }

    /// Sort-direction toggle activated. Writes the default first if the
    /// preference was never set, then flips it.
    pub fn toggle_sort_direction(&mut self) {
        if self
            .pref(prefs::SORT_DIRECTION)
            .and_then(|v| SortDirection::parse(&v))
            .is_none()
        {
            self.persist_pref(prefs::SORT_DIRECTION, SortDirection::Asc.as_str());
        }

        let flipped = self.resolved_sort_direction().flipped();
        let params = FilterParams {
            sort_direction: Some(flipped.as_str().to_string()),
            ..Default::default()
        };
        if self.filter_results(PipelineSource::Current, &params).is_some() {
            self.reset_pager_and_configure();
        }
    }

    /// Archived toggle activated. Same failsafe as the direction toggle;
    /// re-filters from the raw source with only the archived override.
    pub fn toggle_archived(&mut self) {
        if self
            .pref(prefs::SHOW_ARCHIVED)
            .and_then(|v| ArchivedVisibility::parse(&v))
            .is_none()
        {
            self.persist_pref(prefs::SHOW_ARCHIVED, ArchivedVisibility::Show.as_str());
        }

        let flipped = self.resolved_archived_visibility().flipped();
        let params = FilterParams {
            archived: Some(flipped.as_str().to_string()),
            ..Default::default()
        };
        if self.filter_results(PipelineSource::Raw, &params).is_some() {
            let note = match flipped {
                ArchivedVisibility::Show => "Archived items shown",
                ArchivedVisibility::Hide => "Archived items hidden",
            };
            self.model.ui.show_toast(note.to_string());
            self.reset_pager_and_configure();
        }
    }

    /// Re-run the pipeline from the raw source with the live search box and
    /// category selection.
    pub(crate) fn refilter_from_source(&mut self) {
        let search = {
            let trimmed = self.model.ui.search_query.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        };
        // Search every displayed column unless the config narrows the list
        let search_columns = if self.config.search_columns.is_empty() {
            self.model.data.columns.clone()
        } else {
            self.config.search_columns.clone()
        };
        let params = FilterParams {
            categories: self.model.ui.active_category.clone().map(|c| vec![c]),
            search_columns: search.is_some().then_some(search_columns),
            search_string: search,
            ..Default::default()
        };
        if self.filter_results(PipelineSource::Raw, &params).is_some() {
            self.reset_pager_and_configure();
        }
    }

    /// Any regenerated result set starts back at page one.
    pub(crate) fn reset_pager_and_configure(&mut self) {
        self.model.pager.reset_to_first_page();
        let count = self.model.data.current.len();
        self.configure(None, count);
        self.model.ui.dirty = true;
    }
}
