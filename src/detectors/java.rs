//! Java/JVM project detector

use super::{Detect, Suggestion};
use crate::catalog::WorkflowKind;
use crate::snapshot::RepositorySnapshot;

const MANIFESTS: &[&str] = &["pom.xml", "build.gradle", "build.gradle.kts"];

pub struct JavaDetector;

impl Detect for JavaDetector {
    fn name(&self) -> &'static str {
        "java"
    }

    fn inspect(&self, snapshot: &RepositorySnapshot) -> Option<Suggestion> {
        let manifest = MANIFESTS.iter().find(|m| snapshot.has_file(m))?;
        Some(Suggestion::new(
            WorkflowKind::JavaBuild,
            format!("found {} at repository root", manifest),
        ))
    }
}
