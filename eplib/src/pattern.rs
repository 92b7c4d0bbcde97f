//! Literal path patterns.
//!
//! Patterns are plain strings, not globs. A pattern matches a path when the
//! path starts with it (`src/`), ends with it (`.rs`), or equals it
//! (`Cargo.toml`). Nothing is normalized: case, separators and leading `./`
//! are compared exactly as given.

/// Check whether `path` matches `pattern` by prefix, suffix or equality.
///
/// The empty pattern never matches. Pattern sets drop empty entries when they
/// are parsed, so this only matters for direct callers.
///
/// ```
/// use eplib::pattern::matches;
///
/// assert!(matches("assets/logo.png", "assets/"));
/// assert!(matches("src/main.go", ".go"));
/// assert!(!matches("src/main.go", "main"));
/// ```
pub fn matches(path: &str, pattern: &str) -> bool {
    if pattern.is_empty() {
        return false;
    }
    path.starts_with(pattern) || path.ends_with(pattern) || path == pattern
}

/// Split a comma-separated list into its non-empty patterns.
pub(crate) fn split_patterns(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(',').filter(|p| !p.is_empty())
}
