//! Dockerfile detector

use super::{Detect, Suggestion};
use crate::catalog::WorkflowKind;
use crate::snapshot::RepositorySnapshot;

pub struct DockerDetector;

impl Detect for DockerDetector {
    fn name(&self) -> &'static str {
        "docker"
    }

    fn inspect(&self, snapshot: &RepositorySnapshot) -> Option<Suggestion> {
        let path = snapshot.first_match("**/Dockerfile")?;
        Some(Suggestion::new(
            WorkflowKind::DockerBuild,
            format!("found {}", path),
        ))
    }
}
