//! Kinship CLI - Family relationship queries from the command line.

use clap::Parser;
use kinship_cli::commands;
use kinship_cli::repl;
use kinship_cli::seed::{seed_tree, DEFAULT_SEED};
use kinship_cli::{Cli, Command, Config, Formatter, Session};
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "KINSHIP_LOG";

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Initialize tracing (log to stderr).
///
/// `KINSHIP_LOG` takes precedence over the `-v` count.
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };

    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}

fn run(cli: Cli) -> kinship_cli::Result<()> {
    let config = match &cli.config {
        Some(path) => Config::load_from(Path::new(path))?,
        None => Config::load().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Falling back to default configuration");
            Config::default()
        }),
    };

    let seed_path = cli
        .seed
        .as_ref()
        .map(PathBuf::from)
        .or_else(|| config.settings.seed_file.clone());
    let tree = match seed_path {
        Some(path) => {
            tracing::info!(path = %path.display(), "Loading seed file");
            seed_tree(&fs::read_to_string(&path)?)?
        }
        None => seed_tree(DEFAULT_SEED)?,
    };
    let mut session = Session::new(tree);

    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);
    let color_enabled = !cli.no_color && config.settings.color;
    let formatter = Formatter::new(format, color_enabled);

    match cli.command {
        None | Some(Command::Repl) => {
            repl::run_repl(&mut session, &config, &formatter)?;
        }
        Some(Command::Run(args)) => {
            commands::execute_run(args, &mut session, &formatter)?;
        }
        Some(Command::Query(args)) => {
            commands::execute_query(args, &session, &formatter)?;
        }
        Some(Command::Members) => {
            commands::execute_members(&session, &formatter)?;
        }
    }

    Ok(())
}
