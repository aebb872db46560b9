//! Autocomplete Matching
//!
//! Fuzzy filtering for the task-name and tag suggestion dropdowns.

/// Case-insensitive name equality, Unicode-aware (`Ärger` == `ärger`).
pub fn same_name(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

/// Simple fuzzy match: check if query chars appear in order in the target
pub fn fuzzy_match(query: &str, target: &str) -> bool {
    let query = query.to_lowercase();
    let target = target.to_lowercase();

    let mut target_chars = target.chars();
    for query_char in query.chars() {
        loop {
            match target_chars.next() {
                Some(c) if c == query_char => break,
                Some(_) => continue,
                None => return false,
            }
        }
    }
    true
}

/// Candidates matching `query`, skipping anything in `exclude`
/// (case-insensitive), at most `limit` results.
///
/// An empty query lists the first `limit` candidates so the dropdown can open
/// on focus.
pub fn suggest(query: &str, candidates: &[String], exclude: &[String], limit: usize) -> Vec<String> {
    let query = query.trim();
    candidates
        .iter()
        .filter(|c| !exclude.iter().any(|e| same_name(e, c)))
        .filter(|c| query.is_empty() || fuzzy_match(query, c))
        .take(limit)
        .cloned()
        .collect()
}

/// Text an Enter press commits: the highlighted suggestion if the user
/// moved the highlight onto one, otherwise exactly what was typed.
pub fn committed_text(typed: &str, suggestions: &[String], highlighted: Option<usize>) -> String {
    highlighted
        .and_then(|i| suggestions.get(i))
        .cloned()
        .unwrap_or_else(|| typed.to_string())
}
