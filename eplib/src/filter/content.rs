//! Content matching against a regular expression or literal substring.
//!
//! Matching works on raw bytes, so non-UTF-8 files can still be searched. A
//! match anywhere in the file is enough; nothing is anchored and patterns may
//! span lines.
//!
//! The file is only touched when a predicate is configured. Files that vanish
//! between enumeration and the check, and directories, are rejected without a
//! diagnostic. Other I/O failures are logged and rejected.

use std::fs;
use std::io;
use std::path::Path;

use regex::bytes::Regex;
use tracing::{debug, error, warn};

use crate::error::EpError;
use crate::Result;

/// Content predicate applied after the path filters.
#[derive(Debug, Clone, Default)]
pub enum ContentFilter {
    /// No predicate: every file passes and none is read
    #[default]
    Any,
    /// File must contain this substring
    Literal(String),
    /// File must contain a match for this expression
    Regex(Regex),
    /// The expression did not compile; every file is rejected
    Invalid { pattern: String, message: String },
}

/// Outcome of checking one file against a [`ContentFilter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentMatch {
    /// No predicate configured, the file was not read
    Skipped,
    Matched,
    NotMatched,
    /// The file no longer exists
    Missing,
    /// The path is a directory
    NotAFile,
    /// Stat or read failed for another reason
    Unreadable,
    /// The predicate itself is invalid
    InvalidPredicate,
}

impl ContentMatch {
    /// Whether the file passes the content stage.
    pub fn is_accepted(self) -> bool {
        matches!(self, ContentMatch::Skipped | ContentMatch::Matched)
    }
}

impl ContentFilter {
    /// Filter that accepts every file without reading it.
    pub fn any() -> Self {
        Self::Any
    }

    /// Substring filter. The empty string accepts everything.
    pub fn literal(needle: impl Into<String>) -> Self {
        let needle = needle.into();
        if needle.is_empty() {
            Self::Any
        } else {
            Self::Literal(needle)
        }
    }

    /// Compile a regular expression filter. The empty pattern accepts everything.
    pub fn regex(pattern: &str) -> Result<Self> {
        if pattern.is_empty() {
            return Ok(Self::Any);
        }
        Regex::new(pattern)
            .map(Self::Regex)
            .map_err(|e| EpError::InvalidRegex {
                pattern: pattern.to_string(),
                message: e.to_string(),
            })
    }

    /// Compile a regular expression, falling back to a filter that rejects
    /// every file when it does not compile. The failure is logged once here.
    pub fn regex_or_reject(pattern: &str) -> Self {
        match Self::regex(pattern) {
            Ok(filter) => filter,
            Err(EpError::InvalidRegex { pattern, message }) => {
                error!("invalid regex pattern '{}': {}", pattern, message);
                Self::Invalid { pattern, message }
            }
            Err(e) => {
                error!("{}", e);
                Self::Invalid {
                    pattern: pattern.to_string(),
                    message: e.to_string(),
                }
            }
        }
    }

    /// Build the filter for a `-grep` value, as a literal when `fixed` is set.
    pub fn from_grep(pattern: &str, fixed: bool) -> Self {
        if fixed {
            Self::literal(pattern)
        } else {
            Self::regex_or_reject(pattern)
        }
    }

    /// Whether a predicate is configured (files will be read).
    pub fn is_active(&self) -> bool {
        !matches!(self, Self::Any)
    }

    /// Test already-loaded content against the predicate.
    pub fn matches_content(&self, content: &[u8]) -> bool {
        match self {
            Self::Any => true,
            Self::Literal(needle) => contains(content, needle.as_bytes()),
            Self::Regex(re) => re.is_match(content),
            Self::Invalid { .. } => false,
        }
    }

    /// Check the file at `path`, reporting why it was rejected.
    pub fn check(&self, path: &Path) -> ContentMatch {
        match self {
            Self::Any => return ContentMatch::Skipped,
            Self::Invalid { .. } => return ContentMatch::InvalidPredicate,
            Self::Literal(_) | Self::Regex(_) => {}
        }

        let metadata = match fs::metadata(path) {
            Ok(m) => m,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("skipping vanished file {}", path.display());
                return ContentMatch::Missing;
            }
            Err(e) => {
                warn!("error accessing file {}: {}", path.display(), e);
                return ContentMatch::Unreadable;
            }
        };
        if metadata.is_dir() {
            return ContentMatch::NotAFile;
        }

        let content = match fs::read(path) {
            Ok(c) => c,
            Err(source) => {
                let err = EpError::FileRead {
                    path: path.to_path_buf(),
                    source,
                };
                if err.is_not_found() {
                    return ContentMatch::Missing;
                }
                warn!("{}", err);
                return ContentMatch::Unreadable;
            }
        };

        if self.matches_content(&content) {
            ContentMatch::Matched
        } else {
            ContentMatch::NotMatched
        }
    }

    /// Check whether the file at `path` passes the content stage.
    pub fn matches(&self, path: &Path) -> bool {
        self.check(path).is_accepted()
    }
}

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    needle.is_empty() || haystack.windows(needle.len()).any(|w| w == needle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_any_accepts_without_reading() {
        let filter = ContentFilter::any();

        // The path does not exist; no read is attempted
        assert_eq!(
            filter.check(Path::new("/nonexistent/file.go")),
            ContentMatch::Skipped
        );
        assert!(filter.matches(Path::new("/nonexistent/file.go")));
        assert!(!filter.is_active());
    }

    #[test]
    fn test_empty_grep_is_any() {
        assert!(!ContentFilter::from_grep("", false).is_active());
        assert!(!ContentFilter::from_grep("", true).is_active());
    }

    #[test]
    fn test_regex_match() {
        let temp = tempdir().unwrap();
        let a = temp.path().join("a.go");
        let b = temp.path().join("b.go");
        fs::write(&a, "package a\n// TODO: fix\n").unwrap();
        fs::write(&b, "package b\n").unwrap();

        let filter = ContentFilter::regex("TODO").unwrap();
        assert_eq!(filter.check(&a), ContentMatch::Matched);
        assert_eq!(filter.check(&b), ContentMatch::NotMatched);
    }

    #[test]
    fn test_regex_is_unanchored_and_spans_lines() {
        let filter = ContentFilter::regex(r"(?s)start.*end").unwrap();
        assert!(filter.matches_content(b"xx start\nmiddle\nend yy"));

        let alternation = ContentFilter::regex("(foo|bar).*").unwrap();
        assert!(alternation.matches_content(b"some bar here"));
        assert!(!alternation.matches_content(b"baz"));
    }

    #[test]
    fn test_literal_treats_metacharacters_verbatim() {
        let filter = ContentFilter::literal("a.b(");
        assert!(filter.matches_content(b"x a.b( y"));
        assert!(!filter.matches_content(b"axb("));
    }

    #[test]
    fn test_regex_on_non_utf8_content() {
        let filter = ContentFilter::regex("MAGIC").unwrap();
        assert!(filter.matches_content(&[0xff, 0xfe, b'M', b'A', b'G', b'I', b'C', 0x00]));
    }

    #[test]
    fn test_missing_file_is_distinguished_from_no_match() {
        let temp = tempdir().unwrap();
        let filter = ContentFilter::literal("x");

        let outcome = filter.check(&temp.path().join("gone.txt"));
        assert_eq!(outcome, ContentMatch::Missing);
        assert!(!outcome.is_accepted());
    }

    #[test]
    fn test_directory_is_rejected() {
        let temp = tempdir().unwrap();
        fs::create_dir(temp.path().join("sub")).unwrap();

        let filter = ContentFilter::literal("x");
        assert_eq!(filter.check(&temp.path().join("sub")), ContentMatch::NotAFile);
    }

    #[test]
    fn test_invalid_regex_is_an_error() {
        let result = ContentFilter::regex("(unclosed");

        if let Err(EpError::InvalidRegex { pattern, .. }) = result {
            assert_eq!(pattern, "(unclosed");
        } else {
            panic!("Expected InvalidRegex error");
        }
    }

    #[test]
    fn test_invalid_regex_rejects_every_file() {
        let temp = tempdir().unwrap();
        let file = temp.path().join("a.txt");
        fs::write(&file, "(unclosed").unwrap();

        let filter = ContentFilter::from_grep("(unclosed", false);
        assert!(matches!(filter, ContentFilter::Invalid { .. }));
        assert_eq!(filter.check(&file), ContentMatch::InvalidPredicate);
        assert!(!filter.matches(&file));
    }

    #[test]
    fn test_fixed_grep_accepts_what_regex_rejects() {
        let temp = tempdir().unwrap();
        let file = temp.path().join("a.txt");
        fs::write(&file, "call(unclosed").unwrap();

        assert!(ContentFilter::from_grep("(unclosed", true).matches(&file));
    }
}
