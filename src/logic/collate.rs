//! Collation logic
//!
//! Pure comparison of field values for sorting.

use std::cmp::Ordering;
use std::iter::Peekable;
use std::str::Chars;

/// Compare two field values, ordering embedded digit runs by numeric value
/// rather than lexically ("9" sorts before "10") and letters
/// case-insensitively.
///
/// Absent fields reach this function as empty strings, which order before any
/// non-empty value. A missing numeric field therefore sorts ahead of 0 rather
/// than next to it; sanitize numeric fields upstream if that matters.
///
/// # Examples
/// ```
/// use std::cmp::Ordering;
/// use gridtui::logic::collate::compare;
///
/// assert_eq!(compare("9", "10"), Ordering::Less);
/// assert_eq!(compare("item-2", "ITEM-10"), Ordering::Less);
/// assert_eq!(compare("Apple", "apple"), Ordering::Equal);
/// ```
pub fn compare(a: &str, b: &str) -> Ordering {
    let mut xs = a.chars().peekable();
    let mut ys = b.chars().peekable();

    loop {
        let (x, y) = match (xs.peek().copied(), ys.peek().copied()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) => (x, y),
        };

        if x.is_ascii_digit() && y.is_ascii_digit() {
            let run_a = take_digit_run(&mut xs);
            let run_b = take_digit_run(&mut ys);
            let ord = compare_digit_runs(&run_a, &run_b);
            if ord != Ordering::Equal {
                return ord;
            }
        } else {
            let ord = x.to_lowercase().cmp(y.to_lowercase());
            if ord != Ordering::Equal {
                return ord;
            }
            xs.next();
            ys.next();
        }
    }
}

fn take_digit_run(chars: &mut Peekable<Chars>) -> String {
    let mut run = String::new();
    while let Some(&c) = chars.peek() {
        if !c.is_ascii_digit() {
            break;
        }
        run.push(c);
        chars.next();
    }
    run
}

/// Compare two digit runs by numeric value without parsing into a fixed-width
/// integer (runs can be arbitrarily long). Equal values with different
/// leading-zero counts fall back to run length so ordering stays total.
fn compare_digit_runs(a: &str, b: &str) -> Ordering {
    let ta = a.trim_start_matches('0');
    let tb = b.trim_start_matches('0');

    ta.len()
        .cmp(&tb.len())
        .then_with(|| ta.cmp(tb))
        .then_with(|| a.len().cmp(&b.len()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_runs_sort_by_value() {
        assert_eq!(compare("9", "10"), Ordering::Less);
        assert_eq!(compare("10", "9"), Ordering::Greater);
        assert_eq!(compare("2", "10"), Ordering::Less);
        assert_eq!(compare("100", "20"), Ordering::Greater);
    }

    #[test]
    fn test_embedded_numbers() {
        assert_eq!(compare("item-2", "item-10"), Ordering::Less);
        assert_eq!(compare("v1.9", "v1.10"), Ordering::Less);
        assert_eq!(compare("a10b2", "a10b10"), Ordering::Less);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(compare("apple", "APPLE"), Ordering::Equal);
        assert_eq!(compare("Apple", "banana"), Ordering::Less);
        assert_eq!(compare("BANANA", "apple"), Ordering::Greater);
    }

    #[test]
    fn test_empty_sorts_first() {
        assert_eq!(compare("", ""), Ordering::Equal);
        assert_eq!(compare("", "0"), Ordering::Less);
        assert_eq!(compare("a", ""), Ordering::Greater);
    }

    #[test]
    fn test_leading_zeros() {
        // Same value, fewer leading zeros first
        assert_eq!(compare("1", "01"), Ordering::Less);
        assert_eq!(compare("007", "7"), Ordering::Greater);
        // Value still wins over width
        assert_eq!(compare("010", "9"), Ordering::Greater);
    }

    #[test]
    fn test_digits_before_letters() {
        assert_eq!(compare("5", "a"), Ordering::Less);
        assert_eq!(compare("z", "0"), Ordering::Greater);
    }

    #[test]
    fn test_prefix_is_less() {
        assert_eq!(compare("cam", "camera"), Ordering::Less);
        assert_eq!(compare("camera", "cam"), Ordering::Greater);
    }

    #[test]
    fn test_long_digit_runs() {
        // Longer than any fixed-width integer
        let a = "99999999999999999999999999999999999998";
        let b = "99999999999999999999999999999999999999";
        assert_eq!(compare(a, b), Ordering::Less);
    }
}
