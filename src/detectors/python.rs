//! Python project detector

use super::{Detect, Suggestion};
use crate::catalog::WorkflowKind;
use crate::snapshot::RepositorySnapshot;

const MANIFESTS: &[&str] = &["pyproject.toml", "requirements.txt", "setup.py"];

pub struct PythonDetector;

impl Detect for PythonDetector {
    fn name(&self) -> &'static str {
        "python"
    }

    fn inspect(&self, snapshot: &RepositorySnapshot) -> Option<Suggestion> {
        let manifest = MANIFESTS.iter().find(|m| snapshot.has_file(m))?;
        Some(Suggestion::new(
            WorkflowKind::PythonBuild,
            format!("found {} at repository root", manifest),
        ))
    }
}
