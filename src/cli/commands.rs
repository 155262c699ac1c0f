use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Suggests and generates GitHub Actions workflows from repository fingerprints
#[derive(Parser, Debug)]
#[command(
    name = "gabo",
    about = "Suggests and generates GitHub Actions workflows from repository fingerprints",
    version,
    long_about = "gabo inspects a local git working copy, infers which CI workflows apply to it \
                  (by language and build-system fingerprint), and either prints suggestions or \
                  writes a chosen workflow file into .github/workflows."
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(long, global = true, value_name = "LEVEL", help = "Set logging level")]
    pub log_level: Option<String>,

    #[arg(short = 'v', long, global = true, help = "Enable verbose logging")]
    pub verbose: bool,

    #[arg(
        short = 'q',
        long,
        global = true,
        conflicts_with = "verbose",
        help = "Quiet mode - suppress non-error output"
    )]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(
        about = "Suggest applicable workflows for a repository",
        long_about = "Inspects the repository and prints one suggestion per applicable workflow \
                      kind. Read-only: never creates or modifies files.\n\n\
                      Examples:\n  \
                      gabo suggest\n  \
                      gabo suggest /path/to/repo\n  \
                      gabo suggest --format json"
    )]
    Suggest(SuggestArgs),

    #[command(
        about = "Generate a workflow file in the repository",
        long_about = "Writes the workflow for the chosen option under .github/workflows. An \
                      existing file is left untouched unless --force is given.\n\n\
                      Examples:\n  \
                      gabo generate --for go-build\n  \
                      gabo generate --for rust-build /path/to/repo --force"
    )]
    Generate(GenerateArgs),
}

#[derive(Parser, Debug, Clone)]
pub struct SuggestArgs {
    #[arg(
        value_name = "PATH",
        help = "Path to the git repository root (defaults to current directory)"
    )]
    pub repository_path: Option<PathBuf>,

    #[arg(
        short = 'f',
        long,
        value_enum,
        default_value = "human",
        help = "Output format"
    )]
    pub format: OutputFormatArg,
}

#[derive(Parser, Debug, Clone)]
pub struct GenerateArgs {
    #[arg(
        long = "for",
        value_name = "OPTION",
        help = "Workflow option to generate (run `gabo suggest` to see candidates)"
    )]
    pub option: String,

    #[arg(
        value_name = "PATH",
        help = "Path to the git repository root (defaults to current directory)"
    )]
    pub repository_path: Option<PathBuf>,

    #[arg(long, help = "Force overwrite an existing workflow file")]
    pub force: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormatArg {
    Human,
    Json,
    Yaml,
}
