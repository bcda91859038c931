//! CLI command definitions and argument parsing.

use clap::{ArgAction, Parser, Subcommand};

/// Kinship CLI - Answer family relationship queries over a seeded family tree.
#[derive(Debug, Parser)]
#[command(name = "kinship")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Seed file describing the initial family
    #[arg(short, long, global = true, env = "KINSHIP_SEED")]
    pub seed: Option<String>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Names separated by spaces (default)
    Plain,
    /// JSON format
    Json,
    /// Table format
    Table,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Execute every command in an input file
    Run(RunArgs),

    /// Resolve one relation of a member
    Query(QueryArgs),

    /// List every member of the family
    Members,

    /// Enter interactive REPL mode
    Repl,
}

/// Arguments for the run command.
#[derive(Debug, Parser)]
pub struct RunArgs {
    /// Input file, one command per line
    pub file: String,

    /// Also write the results to this file
    #[arg(short, long)]
    pub output: Option<String>,
}

/// Arguments for the query command.
#[derive(Debug, Parser)]
pub struct QueryArgs {
    /// Member the relation is resolved for
    pub member: String,

    /// Relation name (e.g. father, sister-in-law, maternal-aunt)
    pub relation: String,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Plain => crate::config::OutputFormat::Plain,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Table => crate::config::OutputFormat::Table,
        }
    }
}
