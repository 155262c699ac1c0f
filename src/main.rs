use gabo::cli::commands::{CliArgs, Commands};
use gabo::cli::handlers::{handle_generate, handle_suggest};
use gabo::util::logging::{self, LoggingConfig};
use gabo::VERSION;

use clap::Parser;
use std::env;
use tracing::{debug, Level};

fn main() {
    let args = CliArgs::parse();
    init_logging_from_args(&args);

    debug!("gabo v{} starting", VERSION);
    debug!("Arguments: {:?}", args);

    let exit_code = match &args.command {
        Commands::Suggest(suggest_args) => handle_suggest(suggest_args),
        Commands::Generate(generate_args) => handle_generate(generate_args),
    };

    std::process::exit(exit_code);
}

fn init_logging_from_args(args: &CliArgs) {
    let level = if let Some(level_str) = &args.log_level {
        logging::parse_level(level_str)
    } else if args.verbose {
        Level::DEBUG
    } else if args.quiet {
        Level::ERROR
    } else {
        let level_str = env::var("GABO_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
        logging::parse_level(&level_str)
    };

    logging::init_logging(LoggingConfig::with_level(level));
}
