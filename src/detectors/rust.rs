//! Rust project detector

use super::{Detect, Suggestion};
use crate::catalog::WorkflowKind;
use crate::snapshot::RepositorySnapshot;

pub struct RustDetector;

impl Detect for RustDetector {
    fn name(&self) -> &'static str {
        "rust"
    }

    fn inspect(&self, snapshot: &RepositorySnapshot) -> Option<Suggestion> {
        if snapshot.has_file("Cargo.toml") {
            return Some(Suggestion::new(
                WorkflowKind::RustBuild,
                "found Cargo.toml at repository root",
            ));
        }
        None
    }
}
