//! Project signature detectors
//!
//! Detectors are single-purpose probes over a [`RepositorySnapshot`]. Each
//! one recognizes exactly one project signature (presence of a build
//! manifest, a Dockerfile, shell scripts) and maps it to the workflow kind
//! it calls for. Detectors are stateless and read-only; the registry order
//! is the only thing that distinguishes two detectors suggesting the same
//! kind.

use crate::catalog::WorkflowKind;
use crate::snapshot::RepositorySnapshot;
use serde::Serialize;

mod docker;
mod go;
mod java;
mod node;
mod python;
mod registry;
mod rust;
mod shell;

pub use docker::DockerDetector;
pub use go::GoDetector;
pub use java::JavaDetector;
pub use node::NodeDetector;
pub use python::PythonDetector;
pub use registry::DetectorRegistry;
pub use rust::RustDetector;
pub use shell::ShellDetector;

/// A detector's recommendation: which workflow to generate, and why.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    pub kind: WorkflowKind,
    pub reason: String,
}

impl Suggestion {
    pub fn new(kind: WorkflowKind, reason: impl Into<String>) -> Self {
        Self {
            kind,
            reason: reason.into(),
        }
    }
}

/// Read-only probe for one project signature.
pub trait Detect: Send + Sync {
    fn name(&self) -> &'static str;

    /// Inspects the snapshot and suggests a workflow if the signature is
    /// present. Must not touch the filesystem.
    fn inspect(&self, snapshot: &RepositorySnapshot) -> Option<Suggestion>;
}
