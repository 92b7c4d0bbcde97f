//! Source discovery: find the files to snapshot.
//!
//! This module handles the first stage of the pipeline - producing the
//! ordered list of candidate paths. It provides:
//!
//! - **FileSource**: the seam the pipeline reads from
//! - **GitRepo**: tracked files from a git index, relative to a directory
//!
//! ## Example
//!
//! ```rust,ignore
//! use eplib::source::{FileSource, GitRepo};
//!
//! let repo = GitRepo::discover(".")?;
//! let files = repo.files()?;
//! ```

pub mod git;

pub use git::{is_git_repo, GitRepo};

use crate::Result;

/// Produces repository-relative, forward-slash separated paths in a stable
/// order. Enumeration failures are fatal to a run.
pub trait FileSource {
    /// List the candidate paths.
    fn files(&self) -> Result<Vec<String>>;
}

impl<T: AsRef<str>> FileSource for [T] {
    fn files(&self) -> Result<Vec<String>> {
        Ok(self.iter().map(|p| p.as_ref().to_string()).collect())
    }
}

impl<T: AsRef<str>> FileSource for Vec<T> {
    fn files(&self) -> Result<Vec<String>> {
        self.as_slice().files()
    }
}
