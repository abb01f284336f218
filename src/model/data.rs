//! Data Model
//!
//! The raw record source and everything derived from it.

use crate::data::{Record, SourceData};

#[derive(Debug, Clone)]
pub struct DataModel {
    /// Records as supplied by the source, or its error sentinel
    pub source: SourceData,

    /// Displayed (and sortable) column names
    pub columns: Vec<String>,

    /// Distinct category values found in the source, for the picker
    pub categories: Vec<String>,

    /// Current result set: the last pipeline output. Pure sort and paginate
    /// operations work from this without re-reading the raw source.
    pub current: Vec<Record>,

    /// How long the source load took, for the status bar
    pub last_load_ms: Option<u64>,
}

impl DataModel {
    pub fn new(source: SourceData) -> Self {
        DataModel {
            source,
            columns: Vec::new(),
            categories: Vec::new(),
            current: Vec::new(),
            last_load_ms: None,
        }
    }

    pub fn source_error(&self) -> Option<&str> {
        self.source.error()
    }
}
