//! Workflow option catalog
//!
//! The catalog is the single source of truth for which workflow kinds exist
//! and what each one generates. Entries are static configuration, never
//! derived from repository contents.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Directory all workflow files are written under.
pub const WORKFLOW_DIR: &str = ".github/workflows";

/// Closed enumeration of supported workflow kinds.
///
/// Validity of a user-supplied option string is a pure membership test via
/// [`WorkflowKind::from_str`]; there is no partial matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WorkflowKind {
    GoBuild,
    RustBuild,
    NodeBuild,
    PythonBuild,
    JavaBuild,
    DockerBuild,
    Shellcheck,
}

impl WorkflowKind {
    /// Canonical identifier, also the generated file's basename.
    pub fn id(&self) -> &'static str {
        match self {
            WorkflowKind::GoBuild => "go-build",
            WorkflowKind::RustBuild => "rust-build",
            WorkflowKind::NodeBuild => "node-build",
            WorkflowKind::PythonBuild => "python-build",
            WorkflowKind::JavaBuild => "java-build",
            WorkflowKind::DockerBuild => "docker-build",
            WorkflowKind::Shellcheck => "shellcheck",
        }
    }
}

impl fmt::Display for WorkflowKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for WorkflowKind {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        all()
            .iter()
            .find(|kind| kind.id() == s)
            .copied()
            .ok_or_else(|| UnknownOption(s.to_string()))
    }
}

/// The option string does not name a catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown workflow option: {0}")]
pub struct UnknownOption(pub String);

/// Target path and content of a generated workflow file.
#[derive(Debug, Clone, Copy)]
pub struct WorkflowTemplate {
    /// Path relative to the repository root.
    pub path: &'static str,
    pub content: &'static str,
}

/// All catalog entries, in canonical listing order.
pub fn all() -> &'static [WorkflowKind] {
    &[
        WorkflowKind::GoBuild,
        WorkflowKind::RustBuild,
        WorkflowKind::NodeBuild,
        WorkflowKind::PythonBuild,
        WorkflowKind::JavaBuild,
        WorkflowKind::DockerBuild,
        WorkflowKind::Shellcheck,
    ]
}

/// Membership test used by the CLI before invoking the generator.
pub fn is_valid(option: &str) -> bool {
    WorkflowKind::from_str(option).is_ok()
}

/// Comma-separated list of valid option identifiers, for error messages.
pub fn option_list() -> String {
    all()
        .iter()
        .map(|kind| kind.id())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Resolves the template for a workflow kind. Total over the closed enum.
pub fn template(kind: WorkflowKind) -> WorkflowTemplate {
    let content = match kind {
        WorkflowKind::GoBuild => include_str!("templates/go-build.yml"),
        WorkflowKind::RustBuild => include_str!("templates/rust-build.yml"),
        WorkflowKind::NodeBuild => include_str!("templates/node-build.yml"),
        WorkflowKind::PythonBuild => include_str!("templates/python-build.yml"),
        WorkflowKind::JavaBuild => include_str!("templates/java-build.yml"),
        WorkflowKind::DockerBuild => include_str!("templates/docker-build.yml"),
        WorkflowKind::Shellcheck => include_str!("templates/shellcheck.yml"),
    };
    let path = match kind {
        WorkflowKind::GoBuild => ".github/workflows/go-build.yml",
        WorkflowKind::RustBuild => ".github/workflows/rust-build.yml",
        WorkflowKind::NodeBuild => ".github/workflows/node-build.yml",
        WorkflowKind::PythonBuild => ".github/workflows/python-build.yml",
        WorkflowKind::JavaBuild => ".github/workflows/java-build.yml",
        WorkflowKind::DockerBuild => ".github/workflows/docker-build.yml",
        WorkflowKind::Shellcheck => ".github/workflows/shellcheck.yml",
    };
    WorkflowTemplate { path, content }
}
