//! Exclude patterns: a flat set, any match rejects the path.

use crate::pattern::{matches, split_patterns};

/// Set of exclude patterns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExcludeSet {
    patterns: Vec<String>,
}

impl ExcludeSet {
    /// Create an empty set (excludes nothing).
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a comma-separated list such as `"assets/,.png,.bin"`.
    pub fn parse(raw: &str) -> Self {
        Self {
            patterns: split_patterns(raw).map(str::to_string).collect(),
        }
    }

    /// Add a single pattern. Empty patterns are ignored.
    pub fn with(mut self, pattern: impl Into<String>) -> Self {
        let pattern = pattern.into();
        if !pattern.is_empty() {
            self.patterns.push(pattern);
        }
        self
    }

    /// The patterns in the set, in insertion order.
    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Check if `path` matches any pattern in the set.
    pub fn should_exclude(&self, path: &str) -> bool {
        self.patterns.iter().any(|p| matches(path, p))
    }
}
