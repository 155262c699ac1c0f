//! Read-only repository snapshot
//!
//! A [`RepositorySnapshot`] is built once per invocation from the repository
//! root and holds a sorted list of repo-relative file paths. Detectors query
//! it; nothing ever mutates it. Sorting the file list makes every downstream
//! result independent of the host filesystem's directory-listing order.

use glob::Pattern;
use regex::Regex;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;
use walkdir::WalkDir;

const MAX_WALK_DEPTH: usize = 5;
const MAX_FILE_ENTRIES: usize = 10_000;

#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("Path does not exist: {0}")]
    PathNotFound(PathBuf),
    #[error("Path is not a directory: {0}")]
    NotADirectory(PathBuf),
    #[error("Failed to read directory {path}: {source}")]
    Io { path: PathBuf, source: io::Error },
}

/// Directory names never descended into during the scan.
fn default_ignores() -> Vec<Regex> {
    [
        r"^\.git$",
        r"^\.hg$",
        r"^\.svn$",
        r"^node_modules$",
        r"^target$",
        r"^dist$",
        r"^build$",
        r"^out$",
        r"^venv$",
        r"^\.venv$",
        r"^__pycache__$",
        r"^\.pytest_cache$",
        r"^vendor$",
        r"^\.idea$",
        r"^\.vscode$",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("static ignore pattern"))
    .collect()
}

/// Immutable view of a repository's file tree.
#[derive(Debug)]
pub struct RepositorySnapshot {
    root: PathBuf,
    files: Vec<String>,
}

impl RepositorySnapshot {
    /// Scans the repository rooted at `root`.
    ///
    /// Fails only when the root itself is missing, not a directory, or
    /// unreadable. Unreadable entries deeper in the tree are skipped.
    pub fn scan(root: &Path) -> Result<Self, SnapshotError> {
        if !root.exists() {
            return Err(SnapshotError::PathNotFound(root.to_path_buf()));
        }
        if !root.is_dir() {
            return Err(SnapshotError::NotADirectory(root.to_path_buf()));
        }
        std::fs::read_dir(root).map_err(|source| SnapshotError::Io {
            path: root.to_path_buf(),
            source,
        })?;

        let ignores = default_ignores();
        let mut files = Vec::new();

        let walker = WalkDir::new(root)
            .max_depth(MAX_WALK_DEPTH)
            .into_iter()
            .filter_entry(|entry| {
                if !entry.file_type().is_dir() {
                    return true;
                }
                let name = entry.file_name().to_string_lossy();
                !ignores.iter().any(|re| re.is_match(&name))
            });

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    debug!(error = %err, "Skipping unreadable entry");
                    continue;
                }
            };
            if !entry.file_type().is_file() {
                continue;
            }
            if files.len() >= MAX_FILE_ENTRIES {
                debug!(limit = MAX_FILE_ENTRIES, "File entry limit reached, truncating scan");
                break;
            }
            if let Ok(rel) = entry.path().strip_prefix(root) {
                let rel = rel
                    .components()
                    .map(|c| c.as_os_str().to_string_lossy())
                    .collect::<Vec<_>>()
                    .join("/");
                files.push(rel);
            }
        }

        files.sort();
        debug!(root = %root.display(), files = files.len(), "Repository snapshot built");

        Ok(Self {
            root: root.to_path_buf(),
            files,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn files(&self) -> &[String] {
        &self.files
    }

    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    /// True if the repo-relative path exists as a regular file.
    pub fn has_file(&self, rel_path: &str) -> bool {
        self.files.binary_search_by(|f| f.as_str().cmp(rel_path)).is_ok()
    }

    /// True if any file in the snapshot matches the glob pattern.
    pub fn matches_glob(&self, pattern: &str) -> bool {
        self.first_match(pattern).is_some()
    }

    /// First file (in sorted order) matching the glob pattern.
    pub fn first_match(&self, pattern: &str) -> Option<&str> {
        let pattern = match Pattern::new(pattern) {
            Ok(pattern) => pattern,
            Err(err) => {
                debug!(pattern, error = %err, "Invalid glob pattern");
                return None;
            }
        };
        self.files
            .iter()
            .find(|f| pattern.matches(f))
            .map(|f| f.as_str())
    }
}
