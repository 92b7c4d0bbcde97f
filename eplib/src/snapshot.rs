//! High-level snapshot API.
//!
//! This module ties the stages together: a [`FileSource`] lists candidates,
//! the [`FilterPipeline`] accepts a subset, and the renderer chosen by
//! [`SnapshotOptions`] writes them out as they are accepted.

use std::io::Write;
use std::path::Path;

use tracing::debug;

use crate::options::{Mode, SnapshotOptions};
use crate::output::{DumpRenderer, ListingRenderer, RenderSummary, Renderer};
use crate::pipeline::FilterPipeline;
use crate::source::{FileSource, GitRepo};
use crate::Result;

/// Build the renderer selected by `options`.
pub fn renderer<'w, W: Write + 'w>(options: &SnapshotOptions, out: W) -> Box<dyn Renderer + 'w> {
    match options.mode {
        Mode::Listing => Box::new(
            ListingRenderer::new(out)
                .format(options.format)
                .count_words(options.count_words)
                .total_style(options.style.clone()),
        ),
        Mode::Dump => Box::new(
            DumpRenderer::new(out)
                .format(options.format)
                .header_style(options.style.clone()),
        ),
    }
}

/// Snapshot the files listed by `source`, resolved against `root`.
///
/// Failing to enumerate files or to write the output is an error; files that
/// cannot be read are logged and skipped.
///
/// # Example
///
/// ```rust
/// use eplib::{snapshot, FilterConfig, SnapshotOptions};
/// use std::path::Path;
///
/// let files = vec!["a.go", "b.md", "assets/x.png"];
/// let options = SnapshotOptions::new()
///     .listing()
///     .count_words(false)
///     .filter(FilterConfig::new().exclude("assets/"));
///
/// let mut out = Vec::new();
/// snapshot(&files, Path::new("."), &options, &mut out).unwrap();
/// assert_eq!(String::from_utf8(out).unwrap(), "a.go\nb.md\n");
/// ```
pub fn snapshot<S, W>(
    source: &S,
    root: &Path,
    options: &SnapshotOptions,
    out: W,
) -> Result<RenderSummary>
where
    S: FileSource + ?Sized,
    W: Write,
{
    let files = source.files()?;
    debug!("{} candidate files", files.len());

    let pipeline = FilterPipeline::new(&options.filter, root);
    let mut renderer = renderer(options, out);
    for entry in pipeline.accepted(files) {
        renderer.render(&entry)?;
    }
    renderer.finish()
}

/// Snapshot the files tracked by the git repository containing `dir`.
pub fn snapshot_repo<W: Write>(
    dir: impl AsRef<Path>,
    options: &SnapshotOptions,
    out: W,
) -> Result<RenderSummary> {
    let repo = GitRepo::discover(dir)?;
    snapshot(&repo, repo.dir(), options, out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EpError;
    use crate::filter::FilterConfig;
    use std::fs;
    use tempfile::tempdir;

    fn fixture() -> tempfile::TempDir {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("a.go"), "package a // TODO\n").unwrap();
        fs::write(temp.path().join("b.go"), "package b\n").unwrap();
        fs::write(temp.path().join("c.md"), "# notes\n").unwrap();
        temp
    }

    #[test]
    fn test_listing_with_filters() {
        let temp = fixture();
        let files = vec!["a.go", "b.go", "c.md"];
        let options = SnapshotOptions::new()
            .listing()
            .filter(FilterConfig::new().include(".go").grep("TODO"));

        let mut out = Vec::new();
        let summary = snapshot(&files, temp.path(), &options, &mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "a.go (4 words)\n\nTotal: 4 words\n"
        );
        assert_eq!(summary.files, 1);
    }

    #[test]
    fn test_dump_everything() {
        let temp = fixture();
        let files = vec!["c.md"];

        let mut out = Vec::new();
        snapshot(&files, temp.path(), &SnapshotOptions::new(), &mut out).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "\n=== c.md ===\n\n# notes\n\n");
    }

    #[test]
    fn test_invalid_regex_renders_nothing() {
        let temp = fixture();
        let files = vec!["a.go", "b.go"];
        let options = SnapshotOptions::new().filter(FilterConfig::new().grep("[unclosed"));

        let mut out = Vec::new();
        let summary = snapshot(&files, temp.path(), &options, &mut out).unwrap();

        assert!(out.is_empty());
        assert_eq!(summary.files, 0);
    }

    #[test]
    fn test_snapshot_repo_outside_repository() {
        let temp = tempdir().unwrap();
        let result = snapshot_repo(temp.path(), &SnapshotOptions::new(), Vec::new());

        assert!(matches!(result, Err(EpError::NotARepository(_))));
    }
}
