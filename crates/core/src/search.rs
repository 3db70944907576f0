//! Live platform search: substring filter with prefix-first ordering

use crate::models::Platform;

/// Filter `platforms` by `query` without touching the network.
///
/// An empty (or whitespace-only) query returns every platform in original
/// order. Otherwise only names containing the query (case-insensitive) are
/// kept, and names starting with it are moved ahead of the rest. Both groups
/// keep their original relative order.
pub fn filter_platforms<'a>(platforms: &'a [Platform], query: &str) -> Vec<&'a Platform> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return platforms.iter().collect();
    }

    let (prefixed, contained): (Vec<_>, Vec<_>) = platforms
        .iter()
        .filter_map(|p| {
            let name = p.name.to_lowercase();
            name.contains(&query).then(|| (name.starts_with(&query), p))
        })
        .partition(|(prefix, _)| *prefix);

    prefixed
        .into_iter()
        .chain(contained)
        .map(|(_, p)| p)
        .collect()
}
