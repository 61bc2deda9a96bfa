//! String and list helpers.

use std::collections::{HashMap, HashSet};

/// Drop repeated values, keeping the first occurrence of each in input order
pub fn remove_duplicates<S: AsRef<str>>(values: &[S]) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::with_capacity(values.len());
    values
        .iter()
        .map(|value| value.as_ref())
        .filter(|value| seen.insert(*value))
        .map(str::to_string)
        .collect()
}

/// Cut `s` at the first occurrence of `marker`.
///
/// Returns `s` untouched when `marker` does not occur.
///
/// # Examples
/// ```
/// use trafficutils::utils::strings::trim_after;
///
/// assert_eq!(trim_after("report.csv?token=1", "?"), "report.csv");
/// assert_eq!(trim_after("plain", "?"), "plain");
/// ```
pub fn trim_after<'a>(s: &'a str, marker: &str) -> &'a str {
    match s.find(marker) {
        Some(idx) => &s[..idx],
        None => s,
    }
}

/// Check whether `needle` is one of `list`
pub fn contains_str<S: AsRef<str>>(needle: &str, list: &[S]) -> bool {
    list.iter().any(|item| item.as_ref() == needle)
}

/// Look up an emoji by shortcode name.
///
/// The table is keyed by the colon-wrapped form (`:smile:`), the lookup takes
/// the bare name. Unknown names give an empty string.
pub fn emoji_for(name: &str, table: &HashMap<String, String>) -> String {
    table
        .get(&format!(":{}:", name))
        .cloned()
        .unwrap_or_default()
}

/// Reverse the order of a list
pub fn reversed<T>(mut values: Vec<T>) -> Vec<T> {
    values.reverse();
    values
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remove_duplicates_preserves_order() {
        let result = remove_duplicates(&["b", "a", "b", "c", "a"]);
        assert_eq!(result, vec!["b", "a", "c"]);

        let empty: Vec<String> = Vec::new();
        assert!(remove_duplicates(&empty).is_empty());
    }

    #[test]
    fn test_trim_after() {
        assert_eq!(trim_after("hello world", " "), "hello");
        assert_eq!(trim_after("a--b--c", "--"), "a");
        assert_eq!(trim_after("unchanged", "x"), "unchanged");
        assert_eq!(trim_after("xstart", "x"), "");
    }

    #[test]
    fn test_contains_str() {
        let list = vec!["GBP".to_string(), "EUR".to_string()];
        assert!(contains_str("EUR", &list));
        assert!(!contains_str("eur", &list));
        assert!(!contains_str("EUR", &Vec::<String>::new()));
    }

    #[test]
    fn test_emoji_for() {
        let mut table = HashMap::new();
        table.insert(":smile:".to_string(), "😄".to_string());
        table.insert(":car:".to_string(), "🚗".to_string());

        assert_eq!(emoji_for("smile", &table), "😄");
        assert_eq!(emoji_for("car", &table), "🚗");
        assert_eq!(emoji_for(":car:", &table), "");
        assert_eq!(emoji_for("boat", &table), "");
    }

    #[test]
    fn test_reversed() {
        assert_eq!(reversed(vec![1, 2, 3]), vec![3, 2, 1]);
        assert!(reversed(Vec::<u8>::new()).is_empty());
    }
}
