//! Mapping user track selections onto a resolved list.

/// Parse a 1-based, whitespace-separated selection into zero-based indices.
///
/// Indices outside `0..len` are dropped, as are tokens that are not integers.
/// Order and duplicates are kept as given.
pub fn parse_selection(raw: &str, len: usize) -> Vec<usize> {
    raw.split_whitespace()
        .filter_map(|token| token.parse::<i64>().ok())
        .filter_map(|n| n.checked_sub(1))
        .filter_map(|n| usize::try_from(n).ok())
        .filter(|&index| index < len)
        .collect()
}

/// Select tracks by a raw 1-based selection string.
///
/// A blank selection returns every item in resolver order.
pub fn filter_selection<T: Clone>(items: &[T], raw: &str) -> Vec<T> {
    if raw.trim().is_empty() {
        return items.to_vec();
    }

    parse_selection(raw, items.len())
        .into_iter()
        .map(|index| items[index].clone())
        .collect()
}
