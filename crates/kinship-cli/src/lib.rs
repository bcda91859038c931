//! Kinship CLI library.
//!
//! This library provides the core functionality for the Kinship command-line interface,
//! including seed loading, command parsing, session execution and output formatting.

pub mod cli;
pub mod command;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;
pub mod repl;
pub mod seed;
pub mod session;

pub use cli::{Cli, Command};
pub use config::Config;
pub use error::{CliError, CommandFailure, Result};
pub use output::Formatter;
pub use session::{Outcome, Session};
