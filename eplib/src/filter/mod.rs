//! File filtering: exclude patterns, include expressions and content matching.
//!
//! [`FilterConfig`] bundles the three stages. Path stages run first and in a
//! fixed order: a path rejected by the exclude set is never checked against
//! the include expression, and only paths passing both are read for the
//! content stage.
//!
//! ## Example
//!
//! ```rust
//! use eplib::FilterConfig;
//!
//! let filter = FilterConfig::new()
//!     .exclude("vendor/,.png")
//!     .include("src/;.go,.md");
//!
//! assert!(filter.accepts_path("src/main.go"));
//! assert!(!filter.accepts_path("src/logo.png"));
//! assert!(!filter.accepts_path("cmd/main.go"));
//! ```

pub mod content;
pub mod exclude;
pub mod include;

use std::path::Path;

pub use content::{ContentFilter, ContentMatch};
pub use exclude::ExcludeSet;
pub use include::{Group, IncludeExpr};

/// Why a path was turned away.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    Excluded,
    NotIncluded,
    Content(ContentMatch),
}

/// Configuration for file filtering.
#[derive(Debug, Clone, Default)]
pub struct FilterConfig {
    /// Patterns that reject a path outright
    pub exclude: ExcludeSet,
    /// AND-of-OR expression a path must satisfy
    pub include: IncludeExpr,
    /// Predicate over file contents
    pub content: ContentFilter,
}

impl FilterConfig {
    /// Create a filter that accepts every file.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add comma-separated exclude patterns.
    pub fn exclude(mut self, raw: &str) -> Self {
        for pattern in ExcludeSet::parse(raw).patterns() {
            self.exclude = self.exclude.with(pattern.as_str());
        }
        self
    }

    /// Set the include expression from its `;`/`,` syntax.
    pub fn include(mut self, raw: &str) -> Self {
        self.include = IncludeExpr::parse(raw);
        self
    }

    /// Require file contents to match a regular expression.
    ///
    /// An expression that does not compile is logged and rejects every file.
    pub fn grep(mut self, pattern: &str) -> Self {
        self.content = ContentFilter::regex_or_reject(pattern);
        self
    }

    /// Require file contents to contain a literal substring.
    pub fn grep_literal(mut self, needle: &str) -> Self {
        self.content = ContentFilter::literal(needle);
        self
    }

    /// Set the content filter directly.
    pub fn content(mut self, content: ContentFilter) -> Self {
        self.content = content;
        self
    }

    /// Run the path stages (exclude, then include) on a relative path.
    pub fn check_path(&self, path: &str) -> Result<(), Rejection> {
        if self.exclude.should_exclude(path) {
            return Err(Rejection::Excluded);
        }
        if !self.include.should_include(path) {
            return Err(Rejection::NotIncluded);
        }
        Ok(())
    }

    /// Check whether a relative path passes the exclude and include stages.
    pub fn accepts_path(&self, path: &str) -> bool {
        self.check_path(path).is_ok()
    }

    /// Run all three stages. `full_path` is `path` resolved against the
    /// operating directory and is only read when a content filter is set.
    pub fn check(&self, path: &str, full_path: &Path) -> Result<(), Rejection> {
        self.check_path(path)?;
        match self.content.check(full_path) {
            outcome if outcome.is_accepted() => Ok(()),
            outcome => Err(Rejection::Content(outcome)),
        }
    }
}
