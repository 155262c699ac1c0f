//! Integration tests for the repository analyzer
//!
//! These tests verify the complete suggest workflow over real directory
//! trees: detection per project type, deduplication, deterministic
//! ordering, and the read-only guarantee.

use gabo::{Analyzer, WorkflowKind};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Helper to create a Go project fixture
fn create_go_project() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let repo_path = temp_dir.path();

    fs::write(
        repo_path.join("go.mod"),
        "module example.com/app\n\ngo 1.21\n",
    )
    .unwrap();
    fs::write(repo_path.join("main.go"), "package main\n\nfunc main() {}\n").unwrap();

    temp_dir
}

/// Helper to create a Rust project fixture
fn create_rust_project() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let repo_path = temp_dir.path();

    fs::write(
        repo_path.join("Cargo.toml"),
        r#"[package]
name = "test-project"
version = "0.1.0"
edition = "2021"
"#,
    )
    .unwrap();
    fs::create_dir(repo_path.join("src")).unwrap();
    fs::write(repo_path.join("src/main.rs"), "fn main() {}\n").unwrap();

    temp_dir
}

/// Helper to create a polyglot fixture with several signatures
fn create_polyglot_project() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let repo_path = temp_dir.path();

    fs::write(repo_path.join("go.mod"), "module example.com/app\n").unwrap();
    fs::write(repo_path.join("package.json"), "{\"name\": \"app\"}\n").unwrap();
    fs::write(repo_path.join("Dockerfile"), "FROM alpine\n").unwrap();
    fs::create_dir(repo_path.join("scripts")).unwrap();
    fs::write(repo_path.join("scripts/deploy.sh"), "#!/bin/sh\n").unwrap();

    temp_dir
}

/// Recursively lists all paths under a directory, sorted.
fn list_tree(root: &Path) -> Vec<String> {
    let mut entries = Vec::new();
    for entry in walkdir(root) {
        entries.push(entry);
    }
    entries.sort();
    entries
}

fn walkdir(root: &Path) -> Vec<String> {
    let mut out = Vec::new();
    if let Ok(read) = fs::read_dir(root) {
        for entry in read.flatten() {
            out.push(entry.path().display().to_string());
            if entry.path().is_dir() {
                out.extend(walkdir(&entry.path()));
            }
        }
    }
    out
}

#[test]
fn test_go_project_yields_exactly_one_suggestion() {
    let project = create_go_project();
    let analyzer = Analyzer::with_defaults();

    let suggestions = analyzer.analyze(project.path()).unwrap();

    assert_eq!(suggestions.len(), 1);
    assert_eq!(suggestions[0].kind, WorkflowKind::GoBuild);
    assert!(suggestions[0].reason.contains("go.mod"));
}

#[test]
fn test_rust_project_detected() {
    let project = create_rust_project();
    let analyzer = Analyzer::with_defaults();

    let suggestions = analyzer.analyze(project.path()).unwrap();

    assert_eq!(suggestions.len(), 1);
    assert_eq!(suggestions[0].kind, WorkflowKind::RustBuild);
}

#[test]
fn test_polyglot_project_ordered_by_registry() {
    let project = create_polyglot_project();
    let analyzer = Analyzer::with_defaults();

    let suggestions = analyzer.analyze(project.path()).unwrap();
    let kinds: Vec<_> = suggestions.iter().map(|s| s.kind).collect();

    assert_eq!(
        kinds,
        vec![
            WorkflowKind::GoBuild,
            WorkflowKind::NodeBuild,
            WorkflowKind::DockerBuild,
            WorkflowKind::Shellcheck,
        ]
    );
}

#[test]
fn test_suggest_is_idempotent() {
    let project = create_polyglot_project();
    let analyzer = Analyzer::with_defaults();

    let first = analyzer.analyze(project.path()).unwrap();
    let second = analyzer.analyze(project.path()).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_suggest_has_no_side_effects() {
    let project = create_polyglot_project();
    let before = list_tree(project.path());

    let analyzer = Analyzer::with_defaults();
    analyzer.analyze(project.path()).unwrap();

    let after = list_tree(project.path());
    assert_eq!(before, after);
}

#[test]
fn test_empty_repository_yields_no_suggestions() {
    let project = TempDir::new().unwrap();
    let analyzer = Analyzer::with_defaults();

    let suggestions = analyzer.analyze(project.path()).unwrap();
    assert!(suggestions.is_empty());
}

#[test]
fn test_signatures_in_ignored_dirs_are_not_detected() {
    let project = TempDir::new().unwrap();
    fs::create_dir_all(project.path().join("node_modules/dep")).unwrap();
    fs::write(
        project.path().join("node_modules/dep/setup.py"),
        "print('hi')\n",
    )
    .unwrap();

    let analyzer = Analyzer::with_defaults();
    let suggestions = analyzer.analyze(project.path()).unwrap();
    assert!(suggestions.is_empty());
}

#[test]
fn test_analyze_nonexistent_path_fails() {
    let analyzer = Analyzer::with_defaults();
    assert!(analyzer.analyze(Path::new("/definitely/not/here")).is_err());
}
