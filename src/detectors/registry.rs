//! Detector registry

use super::{
    Detect, DockerDetector, GoDetector, JavaDetector, NodeDetector, PythonDetector, RustDetector,
    ShellDetector,
};
use std::sync::Arc;

/// Ordered collection of detectors, closed at construction.
///
/// Registry order is the dedup tie-break in the analyzer, so
/// [`with_defaults`](Self::with_defaults) registers in a fixed order.
#[derive(Clone)]
pub struct DetectorRegistry {
    detectors: Vec<Arc<dyn Detect>>,
}

impl DetectorRegistry {
    pub fn new() -> Self {
        Self {
            detectors: Vec::new(),
        }
    }

    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(GoDetector));
        registry.register(Arc::new(RustDetector));
        registry.register(Arc::new(NodeDetector));
        registry.register(Arc::new(PythonDetector));
        registry.register(Arc::new(JavaDetector));
        registry.register(Arc::new(DockerDetector));
        registry.register(Arc::new(ShellDetector));
        registry
    }

    pub fn register(&mut self, detector: Arc<dyn Detect>) {
        self.detectors.push(detector);
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn Detect> {
        self.detectors.iter().map(|d| d.as_ref())
    }

    pub fn len(&self) -> usize {
        self.detectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.detectors.is_empty()
    }

    pub fn detector_names(&self) -> Vec<&str> {
        self.detectors.iter().map(|d| d.name()).collect()
    }
}

impl Default for DetectorRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
