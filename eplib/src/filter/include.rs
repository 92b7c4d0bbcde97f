//! Include expressions: an AND of OR-groups.
//!
//! The raw syntax uses `;` between groups and `,` between the alternatives of
//! a group, so `"src/;.go,.md"` reads "under `src/` AND (ending in `.go` OR
//! `.md`)". The expression is parsed once into [`IncludeExpr`].
//!
//! A group that holds no patterns after empty entries are dropped (`"a;;b"`,
//! a trailing `;`, or `","`) places no constraint on the path.

use crate::pattern::{matches, split_patterns};

/// One AND-position of an include expression: a path satisfies the group if
/// it matches at least one of its patterns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Group {
    patterns: Vec<String>,
}

impl Group {
    /// Parse a comma-separated list of alternatives.
    pub fn parse(raw: &str) -> Self {
        Self {
            patterns: split_patterns(raw).map(str::to_string).collect(),
        }
    }

    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// An empty group is satisfied by every path.
    pub fn is_satisfied_by(&self, path: &str) -> bool {
        self.is_empty() || self.patterns.iter().any(|p| matches(path, p))
    }
}

/// Parsed include expression.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IncludeExpr {
    groups: Vec<Group>,
}

impl IncludeExpr {
    /// Create an expression that accepts every path.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse the `;`/`,` syntax. The empty string yields no groups.
    pub fn parse(raw: &str) -> Self {
        if raw.is_empty() {
            return Self::default();
        }
        Self {
            groups: raw.split(';').map(Group::parse).collect(),
        }
    }

    /// Append an AND-group made of the given alternatives.
    pub fn and_any<I, S>(mut self, alternatives: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let patterns: Vec<String> = alternatives
            .into_iter()
            .map(|p| p.into())
            .filter(|p: &String| !p.is_empty())
            .collect();
        self.groups.push(Group { patterns });
        self
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    /// Whether the expression accepts every path.
    pub fn is_unconstrained(&self) -> bool {
        self.groups.iter().all(Group::is_empty)
    }

    /// Check that `path` satisfies every group.
    pub fn should_include(&self, path: &str) -> bool {
        self.groups.iter().all(|g| g.is_satisfied_by(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_expression_accepts_all() {
        let expr = IncludeExpr::parse("");
        assert!(expr.groups().is_empty());
        assert!(expr.is_unconstrained());
        assert!(expr.should_include("anything/at/all.bin"));
    }

    #[test]
    fn test_single_group_is_or() {
        let expr = IncludeExpr::parse(".go,.md");

        assert!(expr.should_include("a.go"));
        assert!(expr.should_include("b.md"));
        assert!(!expr.should_include("c.rs"));
    }

    #[test]
    fn test_groups_are_and() {
        let expr = IncludeExpr::parse("a;b,c");

        assert!(expr.should_include("a_b"));
        assert!(expr.should_include("a_c"));
        assert!(expr.should_include("ab"));
        assert!(!expr.should_include("a_x"));
        assert!(!expr.should_include("b_c"));
    }

    #[test]
    fn test_directory_and_extension() {
        let expr = IncludeExpr::parse("src;.go,.cpp");

        assert!(expr.should_include("src/main.go"));
        assert!(expr.should_include("src/x/y.cpp"));
        assert!(!expr.should_include("src/readme.md"));
        assert!(!expr.should_include("cmd/main.go"));
    }

    #[test]
    fn test_empty_patterns_within_group_are_skipped() {
        let expr = IncludeExpr::parse(".go,,");
        assert_eq!(expr.groups()[0].patterns(), &[".go".to_string()]);
        assert!(expr.should_include("a.go"));
        assert!(!expr.should_include("a.md"));
    }

    // Empty groups place no constraint on the path.
    #[test]
    fn test_empty_group_between_groups_is_vacuously_satisfied() {
        let expr = IncludeExpr::parse("src/;;.go");
        assert_eq!(expr.groups().len(), 3);
        assert!(expr.groups()[1].is_empty());
        assert!(expr.should_include("src/a.go"));
        assert!(!expr.should_include("src/a.md"));
    }

    #[test]
    fn test_trailing_semicolon_is_vacuously_satisfied() {
        let expr = IncludeExpr::parse(".go;");
        assert!(expr.should_include("a.go"));
        assert!(!expr.should_include("a.md"));
    }

    #[test]
    fn test_group_of_only_commas_is_vacuously_satisfied() {
        let expr = IncludeExpr::parse(",");
        assert!(expr.is_unconstrained());
        assert!(expr.should_include("a.md"));
    }

    #[test]
    fn test_builder_matches_parsed_form() {
        let built = IncludeExpr::new().and_any(["src"]).and_any([".go", ".cpp"]);
        assert_eq!(built, IncludeExpr::parse("src;.go,.cpp"));
    }
}
