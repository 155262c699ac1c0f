//! Mode handlers
//!
//! Handlers own the flag validation the core does not (git-dir check,
//! option membership) and translate core results into exit codes. The core
//! stays exit-free; `main` is the only place that terminates the process.

use super::commands::{GenerateArgs, OutputFormatArg, SuggestArgs};
use super::output::{OutputFormat, OutputFormatter};
use crate::analyzer::Analyzer;
use crate::catalog;
use crate::generator::{self, WriteOutcome};
use std::path::PathBuf;
use tracing::{error, info};

pub fn handle_suggest(args: &SuggestArgs) -> i32 {
    let root = match resolve_repo_root(args.repository_path.clone()) {
        Ok(root) => root,
        Err(msg) => {
            eprintln!("Error: {}", msg);
            return 2;
        }
    };

    info!("Analyzing dir '{}'", root.display());
    let analyzer = Analyzer::with_defaults();
    let suggestions = match analyzer.analyze(&root) {
        Ok(suggestions) => suggestions,
        Err(err) => {
            error!("Analysis failed: {}", err);
            return 1;
        }
    };

    let formatter = OutputFormatter::new(output_format(args.format));
    match formatter.format_suggestions(&suggestions) {
        Ok(text) => {
            println!("{}", text);
            0
        }
        Err(err) => {
            error!("Failed to format suggestions: {:#}", err);
            1
        }
    }
}

pub fn handle_generate(args: &GenerateArgs) -> i32 {
    if !catalog::is_valid(&args.option) {
        eprintln!(
            "Error: '{}' is not a valid option, valid options are: {}",
            args.option,
            catalog::option_list()
        );
        return 2;
    }

    let root = match resolve_repo_root(args.repository_path.clone()) {
        Ok(root) => root,
        Err(msg) => {
            eprintln!("Error: {}", msg);
            return 2;
        }
    };

    match generator::generate_named(&root, &args.option, args.force) {
        Ok(result) => {
            match result.outcome {
                WriteOutcome::SkippedExisting => println!(
                    "Skipped {} (already exists, use --force to overwrite)",
                    result.path.display()
                ),
                WriteOutcome::Created => println!("Wrote {}", result.path.display()),
                WriteOutcome::Overwritten => println!("Overwrote {}", result.path.display()),
            }
            0
        }
        Err(err) => {
            error!("Failed to generate: {}", err);
            1
        }
    }
}

fn output_format(arg: OutputFormatArg) -> OutputFormat {
    match arg {
        OutputFormatArg::Human => OutputFormat::Human,
        OutputFormatArg::Json => OutputFormat::Json,
        OutputFormatArg::Yaml => OutputFormat::Yaml,
    }
}

/// Resolves and validates the repository root. The root must be a readable
/// directory containing a `.git` entry.
fn resolve_repo_root(path: Option<PathBuf>) -> Result<PathBuf, String> {
    let root = match path {
        Some(path) => path,
        None => std::env::current_dir().map_err(|err| format!("Unable to get current dir: {}", err))?,
    };
    if !root.is_dir() {
        return Err(format!("Not a directory: {}", root.display()));
    }
    if !root.join(".git").exists() {
        return Err(format!(
            "dir exists but is not a git directory: {}",
            root.display()
        ));
    }
    Ok(root)
}
