//! Formatting and display logic
//!
//! Pure functions for formatting cell values for human-readable display.

use std::borrow::Cow;

use unicode_width::UnicodeWidthChar;

/// Change a string to title case, word by word.
///
/// # Examples
/// ```
/// use gridtui::logic::format::title_case;
///
/// assert_eq!(title_case("camera bags"), "Camera Bags");
/// assert_eq!(title_case("USED lenses"), "Used Lenses");
/// ```
pub fn title_case(s: &str) -> String {
    s.to_lowercase()
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Format a raw price value for display, or return a placeholder when the
/// value is not a positive number.
///
/// The value is rounded to cents before being rendered with `decimals`
/// fraction digits. Non-numeric or non-positive values yield
/// "Call for pricing" when that fallback is enabled, otherwise nothing.
pub fn format_price(
    raw: &str,
    currency: &str,
    decimals: usize,
    call_for_pricing: bool,
) -> Option<String> {
    let parsed: Option<f64> = raw.trim().parse().ok();
    match parsed {
        Some(price) if price.is_finite() && price > 0.0 => {
            let cents = (price * 100.0).round() / 100.0;
            Some(format!("{}{:.*}", currency, decimals, cents))
        }
        _ if call_for_pricing => Some("Call for pricing".to_string()),
        _ => None,
    }
}

/// Truncate a cell value to at most `max_width` display columns, appending
/// "..." when anything was cut. Wide characters count at their rendered
/// width, so CJK text does not overflow the column.
pub fn truncate_cell(s: &str, max_width: usize) -> Cow<'_, str> {
    let mut width = 0;
    for (i, c) in s.char_indices() {
        width += c.width().unwrap_or(0);
        if width > max_width {
            let mut cut = s[..i].trim_end().to_string();
            cut.push_str("...");
            return Cow::Owned(cut);
        }
    }
    Cow::Borrowed(s)
}
