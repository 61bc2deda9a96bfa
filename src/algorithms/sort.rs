//! Descending ordering for string sequences.
//!
//! Ordering is byte-wise lexicographic (the `Ord` of `str`), largest first.
//! Equal elements may end up in either relative order.

/// Sort a slice into descending order in place and hand the same slice back.
///
/// # Examples
/// ```
/// use trafficutils::algorithms::sort_descending;
///
/// let mut names = vec!["apple", "pear", "fig"];
/// sort_descending(&mut names);
/// assert_eq!(names, ["pear", "fig", "apple"]);
/// ```
pub fn sort_descending<S: Ord>(values: &mut [S]) -> &mut [S] {
    values.sort_unstable_by(|a, b| b.cmp(a));
    values
}

/// Owning variant of [`sort_descending`].
pub fn sorted_descending<S: Ord>(mut values: Vec<S>) -> Vec<S> {
    sort_descending(&mut values);
    values
}
