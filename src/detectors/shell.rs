//! Shell script detector

use super::{Detect, Suggestion};
use crate::catalog::WorkflowKind;
use crate::snapshot::RepositorySnapshot;

pub struct ShellDetector;

impl Detect for ShellDetector {
    fn name(&self) -> &'static str {
        "shell"
    }

    fn inspect(&self, snapshot: &RepositorySnapshot) -> Option<Suggestion> {
        let path = snapshot.first_match("**/*.sh")?;
        Some(Suggestion::new(
            WorkflowKind::Shellcheck,
            format!("found shell script {}", path),
        ))
    }
}
