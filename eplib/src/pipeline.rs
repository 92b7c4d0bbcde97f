//! The filter pipeline: candidate paths in, accepted entries out.
//!
//! Evaluation is lazy and sequential. Each call to `next` checks candidates
//! until one is accepted, so a renderer can write early entries before later
//! paths have been looked at. Input order is preserved.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::filter::FilterConfig;

/// A path that passed every filter stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accepted {
    /// Path relative to the operating directory, as listed by the source
    pub path: String,
    /// The same path resolved against the operating directory
    pub full_path: PathBuf,
}

/// Applies a [`FilterConfig`] to candidates rooted at an operating directory.
#[derive(Debug, Clone)]
pub struct FilterPipeline<'a> {
    filter: &'a FilterConfig,
    root: &'a Path,
}

impl<'a> FilterPipeline<'a> {
    pub fn new(filter: &'a FilterConfig, root: &'a Path) -> Self {
        Self { filter, root }
    }

    /// Lazily yield the accepted subset of `paths`.
    pub fn accepted<I>(&self, paths: I) -> AcceptedIter<'a, I::IntoIter>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        AcceptedIter {
            filter: self.filter,
            root: self.root,
            paths: paths.into_iter(),
        }
    }
}

/// Iterator returned by [`FilterPipeline::accepted`].
#[derive(Debug)]
pub struct AcceptedIter<'a, I> {
    filter: &'a FilterConfig,
    root: &'a Path,
    paths: I,
}

impl<I> Iterator for AcceptedIter<'_, I>
where
    I: Iterator,
    I::Item: Into<String>,
{
    type Item = Accepted;

    fn next(&mut self) -> Option<Accepted> {
        for path in self.paths.by_ref() {
            let path: String = path.into();
            let full_path = self.root.join(&path);
            match self.filter.check(&path, &full_path) {
                Ok(()) => return Some(Accepted { path, full_path }),
                Err(reason) => debug!("skipping {}: {:?}", path, reason),
            }
        }
        None
    }
}

/// Eagerly collect the accepted relative paths.
pub fn accepted_paths<I>(filter: &FilterConfig, root: &Path, paths: I) -> Vec<String>
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    FilterPipeline::new(filter, root)
        .accepted(paths)
        .map(|a| a.path)
        .collect()
}
