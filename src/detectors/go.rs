//! Go project detector

use super::{Detect, Suggestion};
use crate::catalog::WorkflowKind;
use crate::snapshot::RepositorySnapshot;

pub struct GoDetector;

impl Detect for GoDetector {
    fn name(&self) -> &'static str {
        "go"
    }

    fn inspect(&self, snapshot: &RepositorySnapshot) -> Option<Suggestion> {
        if snapshot.has_file("go.mod") {
            return Some(Suggestion::new(
                WorkflowKind::GoBuild,
                "found go.mod at repository root",
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
    fn test_detects_go_module() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("go.mod"), "module example.com/app\n").unwrap();
        let snapshot = RepositorySnapshot::scan(dir.path()).unwrap();

        let suggestion = GoDetector.inspect(&snapshot).unwrap();
        assert_eq!(suggestion.kind, WorkflowKind::GoBuild);
    }

    #[test]
    fn test_ignores_non_go_repo() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("README.md"), "# hi\n").unwrap();
        let snapshot = RepositorySnapshot::scan(dir.path()).unwrap();

        assert!(GoDetector.inspect(&snapshot).is_none());
    }
}
