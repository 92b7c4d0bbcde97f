//! # eplib
//!
//! A library for taking textual snapshots of the files tracked by a git
//! repository: list them with word counts, or print them with their contents.
//!
//! ## Overview
//!
//! A run is a single pass through four stages:
//!
//! - **Source**: the tracked files under a directory, read from the git index
//! - **Filter**: exclude patterns, then include groups, then a content match
//! - **Pipeline**: lazily applies the filter, preserving input order
//! - **Output**: a listing (`path (N words)` plus a total) or a full dump
//!
//! ## Patterns
//!
//! Patterns are literal strings matched by prefix, suffix or equality, so
//! `assets/` selects a directory and `.go` an extension. Include expressions
//! combine them: `;` separates groups that must all match, `,` separates
//! alternatives within a group.
//!
//! ## Errors
//!
//! Only failures that make the whole run meaningless are returned: the
//! directory is missing or not in a repository, the index cannot be read, or
//! the output cannot be written. A file that cannot be read is logged through
//! `tracing` and skipped.
//!
//! ## Example
//!
//! ```rust
//! use eplib::{snapshot, FilterConfig, SnapshotOptions};
//! use std::fs;
//! use tempfile::tempdir;
//!
//! let dir = tempdir().unwrap();
//! fs::write(dir.path().join("a.go"), "package a // TODO\n").unwrap();
//! fs::write(dir.path().join("b.go"), "package b\n").unwrap();
//! fs::write(dir.path().join("notes.md"), "TODO: docs\n").unwrap();
//!
//! // Any FileSource works; a git repository is the usual one
//! let files = vec!["a.go", "b.go", "notes.md"];
//! let filter = FilterConfig::new().include(".go").grep("TODO");
//! let options = SnapshotOptions::new().listing().filter(filter);
//!
//! let mut out = Vec::new();
//! let summary = snapshot(&files, dir.path(), &options, &mut out).unwrap();
//! assert_eq!(String::from_utf8(out).unwrap(), "a.go (4 words)\n\nTotal: 4 words\n");
//! assert_eq!(summary.total_words, 4);
//! ```

pub mod counter;
pub mod error;
pub mod filter;
pub mod options;
pub mod output;
pub mod pattern;
pub mod pipeline;
pub mod snapshot;
pub mod source;

pub use counter::{count_file_words, count_words};
pub use error::EpError;
pub use filter::{
    ContentFilter, ContentMatch, ExcludeSet, FilterConfig, Group, IncludeExpr, Rejection,
};
pub use options::{Mode, OutputFormat, SnapshotOptions};
pub use output::{DumpRenderer, ListingRenderer, RenderSummary, Renderer};
pub use pipeline::{accepted_paths, Accepted, FilterPipeline};
pub use snapshot::{snapshot, snapshot_repo};
pub use source::{is_git_repo, FileSource, GitRepo};

/// Result type for eplib operations
pub type Result<T> = std::result::Result<T, EpError>;
