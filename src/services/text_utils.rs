//! Shared text normalization utilities
//!
//! Small helpers used by the filename parser, the release-group extractor and
//! the relevance scorer.

/// Collapse runs of whitespace into single spaces and trim both ends.
pub fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Replace the release-name separators (`.` and `_`) with spaces and collapse
/// the result.
///
/// # Example
/// ```ignore
/// assert_eq!(separators_to_spaces("Ling.Cage_2019"), "Ling Cage 2019");
/// ```
pub fn separators_to_spaces(s: &str) -> String {
    collapse_whitespace(&s.replace(['.', '_'], " "))
}

/// Tokenize a search query for relevance scoring.
/// Lower-cases, treats dots as spaces and drops tokens of one character.
pub fn query_tokens(query: &str) -> Vec<String> {
    query
        .to_lowercase()
        .replace('.', " ")
        .split_whitespace()
        .filter(|t| t.chars().count() > 1)
        .map(str::to_string)
        .collect()
}

/// Trim separator debris left over after tokens were cut out of a title.
pub fn trim_title_debris(s: &str) -> &str {
    s.trim_matches(|c: char| c.is_whitespace() || matches!(c, '-' | '–' | '|' | '+' | ',' | ':'))
}
