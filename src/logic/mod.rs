//! Business Logic
//!
//! This module contains pure functions that can be unit tested:
//! - collate: numeric-aware, case-insensitive value comparison
//! - filter: record predicates (archived, category, search) and sorting
//! - paginate: page arithmetic and pagination button generation
//! - format: display formatting (title case, prices, cell truncation)
//! - debounce: restartable single-shot timer handle

pub mod collate;
pub mod debounce;
pub mod filter;
pub mod format;
pub mod paginate;
