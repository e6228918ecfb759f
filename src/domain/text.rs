// src/domain/text.rs

/// Single-char case fold. Every comparison in the filter engine and the
/// highlighter goes through this so that matching and marking agree.
pub fn fold_char(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

/// Case-folds `s` char by char. The result has exactly as many chars as `s`.
pub fn fold_case(s: &str) -> String {
    s.chars().map(fold_char).collect()
}

/// `needle` must already be folded.
pub fn contains_folded(haystack: &str, needle: &str) -> bool {
    fold_case(haystack).contains(needle)
}
