//! gabo - suggests and generates GitHub Actions workflows
//!
//! This library inspects a local git working copy, infers which CI workflows
//! are applicable to it by language/build-system fingerprint, and either
//! returns ranked suggestions or writes a chosen workflow definition into
//! the repository.
//!
//! # Core Concepts
//!
//! - **Detectors**: read-only probes that recognize one project signature
//!   each (a build manifest, a Dockerfile, shell scripts) against an
//!   immutable [`RepositorySnapshot`]
//! - **Analyzer**: runs the detector registry in order and collects a
//!   deduplicated, deterministically ordered suggestion list
//! - **Catalog**: the closed set of supported workflow kinds, each mapped
//!   to a static file path and content under `.github/workflows`
//! - **Generator**: writes a catalog entry to disk, skipping existing files
//!   unless forced
//!
//! # Example Usage
//!
//! ```no_run
//! use gabo::{generator, Analyzer, WorkflowKind};
//! use std::path::Path;
//!
//! fn suggest_and_generate(repo: &Path) -> anyhow::Result<()> {
//!     let analyzer = Analyzer::with_defaults();
//!     for suggestion in analyzer.analyze(repo)? {
//!         println!("{}: {}", suggestion.kind, suggestion.reason);
//!     }
//!
//!     let result = generator::generate(repo, WorkflowKind::GoBuild, false)?;
//!     println!("wrote {}", result.path.display());
//!     Ok(())
//! }
//! ```
//!
//! # Project Structure
//!
//! - [`detectors`]: the detector trait, registry, and concrete detectors
//! - [`analyzer`]: orchestration and suggestion collection
//! - [`catalog`]: workflow kinds and their templates
//! - [`generator`]: conflict-aware file generation

pub mod analyzer;
pub mod catalog;
pub mod cli;
pub mod detectors;
pub mod generator;
pub mod snapshot;
pub mod util;

// Re-export key types for convenient access
pub use analyzer::{AnalysisError, Analyzer};
pub use catalog::{UnknownOption, WorkflowKind, WorkflowTemplate, WORKFLOW_DIR};
pub use detectors::{Detect, DetectorRegistry, Suggestion};
pub use generator::{GenerateError, GenerationResult, WriteOutcome};
pub use snapshot::{RepositorySnapshot, SnapshotError};
pub use util::{init_default, init_from_env, init_logging, LoggingConfig};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
