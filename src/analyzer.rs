//! Repository analyzer
//!
//! Runs every registered detector against a repository snapshot and collects
//! the matches into a deduplicated, deterministically ordered suggestion
//! list. Suggest mode only ever reads.

use crate::detectors::{DetectorRegistry, Suggestion};
use crate::snapshot::{RepositorySnapshot, SnapshotError};
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, trace};

#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("Invalid repository: {0}")]
    InvalidRepository(#[from] SnapshotError),
}

pub struct Analyzer {
    registry: DetectorRegistry,
}

impl Analyzer {
    pub fn new(registry: DetectorRegistry) -> Self {
        Self { registry }
    }

    pub fn with_defaults() -> Self {
        Self::new(DetectorRegistry::with_defaults())
    }

    /// Builds a snapshot of `root` and analyzes it.
    pub fn analyze(&self, root: &Path) -> Result<Vec<Suggestion>, AnalysisError> {
        let snapshot = RepositorySnapshot::scan(root)?;
        Ok(self.analyze_snapshot(&snapshot))
    }

    /// Analyzes an already-built snapshot.
    ///
    /// Detectors run in registry order; duplicate workflow kinds keep the
    /// first occurrence, so the output ordering is stable across runs.
    pub fn analyze_snapshot(&self, snapshot: &RepositorySnapshot) -> Vec<Suggestion> {
        let mut seen = HashSet::new();
        let mut suggestions = Vec::new();

        for detector in self.registry.iter() {
            trace!(detector = detector.name(), "Running detector");
            let Some(suggestion) = detector.inspect(snapshot) else {
                continue;
            };
            if seen.insert(suggestion.kind) {
                debug!(
                    detector = detector.name(),
                    kind = %suggestion.kind,
                    reason = %suggestion.reason,
                    "Detector matched"
                );
                suggestions.push(suggestion);
            } else {
                trace!(
                    detector = detector.name(),
                    kind = %suggestion.kind,
                    "Dropping duplicate suggestion"
                );
            }
        }

        suggestions
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::with_defaults()
    }
}
