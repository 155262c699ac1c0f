//! Node.js project detector

use super::{Detect, Suggestion};
use crate::catalog::WorkflowKind;
use crate::snapshot::RepositorySnapshot;

pub struct NodeDetector;

impl Detect for NodeDetector {
    fn name(&self) -> &'static str {
        "node"
    }

    fn inspect(&self, snapshot: &RepositorySnapshot) -> Option<Suggestion> {
        if snapshot.has_file("package.json") {
            return Some(Suggestion::new(
                WorkflowKind::NodeBuild,
                "found package.json at repository root",
            ));
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_detects_package_json() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("package.json"), "{\"name\": \"x\"}\n").unwrap();
        let snapshot = RepositorySnapshot::scan(dir.path()).unwrap();

        let suggestion = NodeDetector.inspect(&snapshot).unwrap();
        assert_eq!(suggestion.kind, WorkflowKind::NodeBuild);
    }
}
