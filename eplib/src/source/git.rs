//! Tracked files from a git repository.
//!
//! The repository is discovered from the operating directory and its index
//! is read directly, so the process working directory is never touched.
//! Paths are reported relative to the operating directory, like
//! `git ls-files` run from inside it.

use std::fs;
use std::path::{Component, Path, PathBuf};

use tracing::debug;

use super::FileSource;
use crate::error::EpError;
use crate::Result;

/// A git working tree opened at an operating directory.
pub struct GitRepo {
    repo: gix::Repository,
    /// Canonical operating directory
    dir: PathBuf,
    /// Canonical root of the working tree
    work_dir: PathBuf,
    /// Operating directory relative to the root, `/`-terminated (or empty)
    prefix: String,
}

impl std::fmt::Debug for GitRepo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GitRepo")
            .field("dir", &self.dir)
            .field("work_dir", &self.work_dir)
            .field("prefix", &self.prefix)
            .finish()
    }
}

impl GitRepo {
    /// Open the repository whose working tree contains `dir`.
    ///
    /// Fails with [`EpError::PathNotFound`] when `dir` cannot be resolved and
    /// with [`EpError::NotARepository`] when it is not inside a working tree
    /// (bare repositories and the `.git` directory itself included).
    pub fn discover(dir: impl AsRef<Path>) -> Result<Self> {
        let given = dir.as_ref();
        let dir =
            fs::canonicalize(given).map_err(|_| EpError::PathNotFound(given.to_path_buf()))?;
        if !dir.is_dir() {
            return Err(EpError::NotARepository(given.to_path_buf()));
        }

        let repo = gix::discover(&dir).map_err(|e| {
            debug!("repository discovery failed for {}: {}", dir.display(), e);
            EpError::NotARepository(given.to_path_buf())
        })?;

        let work_dir = repo
            .work_dir()
            .ok_or_else(|| EpError::NotARepository(given.to_path_buf()))?;
        let work_dir = fs::canonicalize(work_dir).map_err(|e| {
            EpError::GitError(format!(
                "Failed to resolve work directory {}: {}",
                work_dir.display(),
                e
            ))
        })?;

        let relative = dir
            .strip_prefix(&work_dir)
            .map_err(|_| EpError::NotARepository(given.to_path_buf()))?;
        let prefix = index_prefix(relative)
            .ok_or_else(|| EpError::NotARepository(given.to_path_buf()))?;

        debug!(
            "opened repository at {} (prefix '{}')",
            work_dir.display(),
            prefix
        );

        Ok(Self {
            repo,
            dir,
            work_dir,
            prefix,
        })
    }

    /// The canonical operating directory; listed paths are relative to it.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// The canonical root of the working tree.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// List tracked files under the operating directory, in index order.
    ///
    /// Conflicted paths appear once even though the index holds one entry
    /// per merge stage. A repository without an index has no tracked files.
    pub fn tracked_files(&self) -> Result<Vec<String>> {
        let index = self
            .repo
            .index_or_empty()
            .map_err(|e| EpError::GitError(format!("Failed to read index: {}", e)))?;

        let mut files: Vec<String> = Vec::new();
        for entry in index.entries() {
            let path = entry.path(&index).to_string();
            let Some(relative) = path.strip_prefix(self.prefix.as_str()) else {
                continue;
            };
            if relative.is_empty() {
                continue;
            }
            if files.last().map(String::as_str) != Some(relative) {
                files.push(relative.to_string());
            }
        }

        debug!("{} tracked files under {}", files.len(), self.dir.display());
        Ok(files)
    }
}

impl FileSource for GitRepo {
    fn files(&self) -> Result<Vec<String>> {
        self.tracked_files()
    }
}

/// Check whether `dir` is inside a git working tree.
pub fn is_git_repo(dir: impl AsRef<Path>) -> bool {
    GitRepo::discover(dir).is_ok()
}

/// Turn a path relative to the work tree root into the prefix index entries
/// carry. Returns `None` for locations inside the `.git` directory.
fn index_prefix(relative: &Path) -> Option<String> {
    let mut parts = Vec::new();
    for component in relative.components() {
        match component {
            Component::Normal(name) => parts.push(name.to_string_lossy().into_owned()),
            Component::CurDir => {}
            _ => return None,
        }
    }
    if parts.first().is_some_and(|p| p == ".git") {
        return None;
    }

    let mut prefix = parts.join("/");
    if !prefix.is_empty() {
        prefix.push('/');
    }
    Some(prefix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::process::Command;
    use tempfile::tempdir;

    fn git(dir: &Path, args: &[&str]) -> bool {
        Command::new("git")
            .args(args)
            .current_dir(dir)
            .output()
            .map(|o| o.status.success())
            .unwrap_or(false)
    }

    /// Create a repository with the given files staged. Returns `None` when
    /// the `git` executable is unavailable.
    fn staged_repo(files: &[(&str, &str)]) -> Option<tempfile::TempDir> {
        let temp = tempdir().unwrap();
        if !git(temp.path(), &["init", "-q"]) {
            return None;
        }
        for (path, content) in files {
            let full = temp.path().join(path);
            fs::create_dir_all(full.parent().unwrap()).unwrap();
            fs::write(full, content).unwrap();
        }
        assert!(git(temp.path(), &["add", "-A"]));
        Some(temp)
    }

    #[test]
    fn test_index_prefix() {
        assert_eq!(index_prefix(Path::new("")), Some(String::new()));
        assert_eq!(index_prefix(Path::new("src")), Some("src/".to_string()));
        assert_eq!(
            index_prefix(Path::new("src/nested")),
            Some("src/nested/".to_string())
        );
        assert_eq!(index_prefix(Path::new(".git/objects")), None);
    }

    #[test]
    fn test_discover_nonexistent_path() {
        let result = GitRepo::discover("/nonexistent/path/for/ep");
        assert!(matches!(result, Err(EpError::PathNotFound(_))));
    }

    #[test]
    fn test_discover_plain_directory() {
        let temp = tempdir().unwrap();
        let result = GitRepo::discover(temp.path());

        assert!(matches!(result, Err(EpError::NotARepository(_))));
        assert!(!is_git_repo(temp.path()));
    }

    #[test]
    fn test_tracked_files_in_index_order() {
        let Some(temp) = staged_repo(&[
            ("b.md", "# b"),
            ("a.go", "package a"),
            ("assets/x.png", "png"),
        ]) else {
            return;
        };
        fs::write(temp.path().join("untracked.txt"), "nope").unwrap();

        let repo = GitRepo::discover(temp.path()).unwrap();
        let files = repo.tracked_files().unwrap();

        assert_eq!(files, vec!["a.go", "assets/x.png", "b.md"]);
    }

    #[test]
    fn test_tracked_files_relative_to_subdirectory() {
        let Some(temp) = staged_repo(&[
            ("README.md", "top"),
            ("src/lib.rs", "lib"),
            ("src/util/mod.rs", "util"),
            ("srcx/other.rs", "other"),
        ]) else {
            return;
        };

        let repo = GitRepo::discover(temp.path().join("src")).unwrap();
        let files = repo.files().unwrap();

        assert_eq!(files, vec!["lib.rs", "util/mod.rs"]);
        assert!(repo.dir().ends_with("src"));
    }

    #[test]
    fn test_empty_repository_has_no_files() {
        let Some(temp) = staged_repo(&[]) else {
            return;
        };

        let repo = GitRepo::discover(temp.path()).unwrap();
        assert!(repo.tracked_files().unwrap().is_empty());
    }

    #[test]
    fn test_git_directory_is_not_a_work_tree() {
        let Some(temp) = staged_repo(&[("a.go", "package a")]) else {
            return;
        };

        let result = GitRepo::discover(temp.path().join(".git"));
        assert!(matches!(result, Err(EpError::NotARepository(_))));
    }

    #[test]
    fn test_static_file_source() {
        let files = vec!["a.go", "b.md"];
        assert_eq!(files.files().unwrap(), vec!["a.go", "b.md"]);
    }
}
