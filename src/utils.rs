//! Common utility functions shared across the codebase.

/// Counts the leading characters `a` and `b` have in common.
///
/// This is a strict literal comparison: no normalization, no case folding.
/// Used both to rank translation files by how close their path is to the
/// active document and to place a new key next to its closest sibling.
///
/// # Examples
///
/// ```
/// use translately::utils::match_strings;
///
/// assert_eq!(match_strings("abcX", "abcY"), 3);
/// assert_eq!(match_strings("abc", "abc"), 3);
/// assert_eq!(match_strings("", "abc"), 0);
/// assert_eq!(match_strings("a.bc", "a.b"), 3);
/// ```
pub fn match_strings(a: &str, b: &str) -> usize {
    a.chars()
        .zip(b.chars())
        .take_while(|(left, right)| left == right)
        .count()
}

/// Strips one leading and one trailing quote character (`"` or `'`).
///
/// Each side is handled independently, so an unbalanced token still loses its
/// quote on the side where one is present.
///
/// ```
/// use translately::utils::remove_quotes;
///
/// assert_eq!(remove_quotes("\"a.b\""), "a.b");
/// assert_eq!(remove_quotes("'a.b'"), "a.b");
/// assert_eq!(remove_quotes("plain"), "plain");
/// ```
pub fn remove_quotes(text: &str) -> &str {
    let text = text
        .strip_prefix('"')
        .or_else(|| text.strip_prefix('\''))
        .unwrap_or(text);
    text.strip_suffix('"')
        .or_else(|| text.strip_suffix('\''))
        .unwrap_or(text)
}
