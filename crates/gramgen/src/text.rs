//! Small text helpers shared by emitters

/// Strip one level of backslash escaping, if present
///
/// ```
/// assert_eq!(gramgen::unescape("\\n"), "n");
/// assert_eq!(gramgen::unescape("n"), "n");
/// ```
pub fn unescape(input: &str) -> &str {
    input.strip_prefix('\\').unwrap_or(input)
}
