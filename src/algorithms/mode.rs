//! Most frequent value of a string sequence.

use std::collections::HashMap;

/// Return the most frequent value in `values`, or an empty string when
/// `values` is empty.
///
/// Counts are updated in a single left-to-right pass. The candidate only
/// changes when a value's count strictly exceeds the running maximum, which
/// starts at 1 with the first element. On a tie the value that reached the
/// winning count first is returned.
///
/// # Examples
/// ```
/// use trafficutils::algorithms::mode;
///
/// assert_eq!(mode(&["a", "b", "a", "c", "a"]), "a");
/// assert_eq!(mode(&["a", "b", "b", "a"]), "b");
/// assert_eq!(mode::<&str>(&[]), "");
/// ```
pub fn mode<S: AsRef<str>>(values: &[S]) -> String {
    let Some(first) = values.first() else {
        return String::new();
    };

    let mut counts: HashMap<&str, usize> = HashMap::with_capacity(values.len());
    let mut best = first.as_ref();
    let mut best_count = 1;

    for value in values {
        let value = value.as_ref();
        let count = counts.entry(value).or_insert(0);
        *count += 1;

        if *count > best_count {
            best = value;
            best_count = *count;
        }
    }

    best.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_clear_winner() {
        assert_eq!(mode(&["a", "b", "a", "c", "a"]), "a");
        assert_eq!(mode(&["x", "y", "y", "z", "y", "x"]), "y");
    }

    #[test]
    fn test_mode_empty_is_sentinel() {
        let empty: Vec<String> = Vec::new();
        assert_eq!(mode(&empty), "");
    }

    #[test]
    fn test_mode_all_distinct_returns_first() {
        assert_eq!(mode(&["c", "b", "a"]), "c");
        assert_eq!(mode(&["only"]), "only");
    }

    #[test]
    fn test_mode_tie_goes_to_first_to_reach_count() {
        // "b" reaches 2 at index 2, "a" only at index 3
        assert_eq!(mode(&["a", "b", "b", "a"]), "b");
        // "a" reaches 2 first here
        assert_eq!(mode(&["a", "a", "b", "b"]), "a");
        // first occurrence of the final leaders is "q", but "p" gets to 3 first
        assert_eq!(mode(&["q", "p", "p", "p", "q", "q"]), "p");
    }

    #[test]
    fn test_mode_owned_strings() {
        let values: Vec<String> =
            ["GBP", "EUR", "EUR", "SEK"].iter().map(|s| s.to_string()).collect();
        assert_eq!(mode(&values), "EUR");
    }
}
