//! Workflow file generator
//!
//! Resolves a catalog entry and writes it into the repository. The only
//! directory ever created is the fixed workflow directory; the write is the
//! single filesystem mutation the whole tool performs.

use crate::catalog::{self, UnknownOption, WorkflowKind, WORKFLOW_DIR};
use std::io;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;
use tracing::{info, warn};

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error(transparent)]
    UnknownOption(#[from] UnknownOption),
    #[error("Failed to write {path}: {source}")]
    WriteFailure { path: PathBuf, source: io::Error },
}

/// What happened to the target file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// File did not exist and was written.
    Created,
    /// File existed and `force` replaced it.
    Overwritten,
    /// File existed, `force` was off, nothing was written.
    SkippedExisting,
}

#[derive(Debug)]
pub struct GenerationResult {
    pub path: PathBuf,
    pub outcome: WriteOutcome,
}

impl GenerationResult {
    pub fn was_written(&self) -> bool {
        self.outcome != WriteOutcome::SkippedExisting
    }
}

/// Generates the workflow file for `kind` under `root`.
pub fn generate(
    root: &Path,
    kind: WorkflowKind,
    force: bool,
) -> Result<GenerationResult, GenerateError> {
    if force {
        warn!("Force overwrite is on, existing files will be over-written");
    }

    let template = catalog::template(kind);
    let target = root.join(template.path);

    let exists = target.exists();
    if exists && !force {
        warn!(path = %target.display(), "Workflow file already exists, skipping (use --force to overwrite)");
        return Ok(GenerationResult {
            path: target,
            outcome: WriteOutcome::SkippedExisting,
        });
    }

    let workflow_dir = root.join(WORKFLOW_DIR);
    std::fs::create_dir_all(&workflow_dir).map_err(|source| GenerateError::WriteFailure {
        path: workflow_dir.clone(),
        source,
    })?;

    std::fs::write(&target, template.content).map_err(|source| GenerateError::WriteFailure {
        path: target.clone(),
        source,
    })?;

    let outcome = if exists {
        WriteOutcome::Overwritten
    } else {
        WriteOutcome::Created
    };
    info!(path = %target.display(), ?outcome, "Generated workflow");

    Ok(GenerationResult {
        path: target,
        outcome,
    })
}

/// Validates the option string against the catalog, then generates.
///
/// The CLI already checks membership; this re-validates so the generator
/// fails closed even when called directly.
pub fn generate_named(
    root: &Path,
    option: &str,
    force: bool,
) -> Result<GenerationResult, GenerateError> {
    let kind = WorkflowKind::from_str(option)?;
    generate(root, kind, force)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_fresh_write() {
        let dir = TempDir::new().unwrap();
        let result = generate(dir.path(), WorkflowKind::GoBuild, false).unwrap();

        assert_eq!(result.outcome, WriteOutcome::Created);
        assert_eq!(result.path, dir.path().join(".github/workflows/go-build.yml"));
        let written = fs::read_to_string(&result.path).unwrap();
        assert_eq!(written, catalog::template(WorkflowKind::GoBuild).content);
    }

    #[test]
    fn test_skip_without_force() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join(".github/workflows/go-build.yml");
        fs::create_dir_all(target.parent().unwrap()).unwrap();
        fs::write(&target, "custom: workflow\n").unwrap();

        let result = generate(dir.path(), WorkflowKind::GoBuild, false).unwrap();

        assert_eq!(result.outcome, WriteOutcome::SkippedExisting);
        assert!(!result.was_written());
        assert_eq!(fs::read_to_string(&target).unwrap(), "custom: workflow\n");
    }

    #[test]
    fn test_overwrite_with_force() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join(".github/workflows/go-build.yml");
        fs::create_dir_all(target.parent().unwrap()).unwrap();
        fs::write(&target, "custom: workflow\n").unwrap();

        let result = generate(dir.path(), WorkflowKind::GoBuild, true).unwrap();

        assert_eq!(result.outcome, WriteOutcome::Overwritten);
        assert_eq!(
            fs::read_to_string(&target).unwrap(),
            catalog::template(WorkflowKind::GoBuild).content
        );
    }

    #[test]
    fn test_unknown_option_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let err = generate_named(dir.path(), "cobol-build", false).unwrap_err();

        assert!(matches!(err, GenerateError::UnknownOption(_)));
        assert!(!dir.path().join(".github").exists());
    }

    #[test]
    fn test_generate_named_valid_option() {
        let dir = TempDir::new().unwrap();
        let result = generate_named(dir.path(), "shellcheck", false).unwrap();

        assert_eq!(result.outcome, WriteOutcome::Created);
        assert!(dir.path().join(".github/workflows/shellcheck.yml").exists());
    }
}
