//! Filter predicates and record sorting
//!
//! Pure functions applied by the pipeline, in stage order: archived
//! visibility, category match, free-text search, sort.

use regex::Regex;

use crate::data::Record;
use crate::logic::collate;
use crate::SortDirection;

/// Build the matcher for a free-text search term.
///
/// The term is matched case-insensitively as a literal substring; any regex
/// metacharacters in the user's input are escaped first. Returns None when
/// the trimmed term is empty, which callers treat as "no search" rather than
/// "search for the empty string".
pub fn search_pattern(term: &str) -> Option<Regex> {
    let trimmed = term.trim();
    if trimmed.is_empty() {
        return None;
    }
    Regex::new(&format!("(?i){}", regex::escape(trimmed))).ok()
}

/// A record matches when ANY of the listed columns' values contain the
/// pattern. Non-textual values are coerced to their display text first.
pub fn matches_search(record: &Record, pattern: &Regex, columns: &[String]) -> bool {
    columns.iter().any(|col| pattern.is_match(&record.text(col)))
}

/// A record matches when its category field case-insensitively equals ANY of
/// the given categories. Exact match, not substring.
pub fn matches_category(record: &Record, category_field: &str, categories: &[String]) -> bool {
    let value = record.text(category_field).to_lowercase();
    categories.iter().any(|c| value == c.to_lowercase())
}

/// Distinct category values across the record set, first-seen casing kept,
/// ordered with the grid collator. Used to build the category picker.
pub fn distinct_categories(records: &[Record], category_field: &str) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for record in records {
        let value = record.text(category_field);
        if value.is_empty() {
            continue;
        }
        if !seen.iter().any(|s| s.eq_ignore_ascii_case(&value)) {
            seen.push(value.into_owned());
        }
    }
    seen.sort_by(|a, b| collate::compare(a, b));
    seen
}

/// Stable sort by one column. Descending order swaps the comparison
/// arguments, so records with equal keys keep their input order either way.
pub fn sort_records(records: &mut [Record], column: &str, direction: SortDirection) {
    records.sort_by(|a, b| {
        let (x, y) = (a.text(column), b.text(column));
        match direction {
            SortDirection::Asc => collate::compare(&x, &y),
            SortDirection::Desc => collate::compare(&y, &x),
        }
    });
}
