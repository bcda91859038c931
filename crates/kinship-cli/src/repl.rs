//! Interactive REPL (Read-Eval-Print Loop) mode.

use crate::commands;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use crate::session::Session;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::path::PathBuf;

const PROMPT: &str = "kinship> ";

/// Run the interactive REPL.
pub fn run_repl(session: &mut Session, config: &Config, formatter: &Formatter) -> Result<()> {
    println!(
        "{}",
        formatter.info("Kinship REPL - Type 'help' for commands, 'exit' to quit")
    );
    println!();

    let editor_config = rustyline::Config::builder()
        .max_history_size(config.settings.history_size)
        .map_err(editor_error)?
        .build();
    let mut editor = DefaultEditor::with_config(editor_config).map_err(editor_error)?;

    let history_path = get_history_path()?;
    let _ = editor.load_history(&history_path);

    loop {
        match editor.readline(PROMPT) {
            Ok(line) => {
                let line = line.trim();

                if line.is_empty() {
                    continue;
                }

                editor.add_history_entry(line).ok();

                match parse_repl_command(line) {
                    ReplCommand::Exit => {
                        println!("{}", formatter.info("Goodbye!"));
                        break;
                    }
                    ReplCommand::Help => print_help(session, formatter),
                    ReplCommand::Members => {
                        if let Err(e) = commands::execute_members(session, formatter) {
                            eprintln!("{}", formatter.error(&e.to_string()));
                        }
                    }
                    ReplCommand::Family(line) => {
                        println!("{}", execute_family_command(session, formatter, line));
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", formatter.info("Use 'exit' to quit"));
            }
            Err(ReadlineError::Eof) => {
                break;
            }
            Err(err) => {
                eprintln!("{}", formatter.error(&format!("Error: {}", err)));
                break;
            }
        }
    }

    editor.save_history(&history_path).ok();

    Ok(())
}

/// REPL command type.
#[derive(Debug, PartialEq, Eq)]
enum ReplCommand<'a> {
    Exit,
    Help,
    Members,
    Family(&'a str),
}

/// Parse a REPL command line.
fn parse_repl_command(line: &str) -> ReplCommand<'_> {
    match line.to_lowercase().as_str() {
        "exit" | "quit" | "q" => ReplCommand::Exit,
        "help" | "?" => ReplCommand::Help,
        "members" => ReplCommand::Members,
        _ => ReplCommand::Family(line),
    }
}

/// Run one add or query line and render its result.
fn execute_family_command(session: &mut Session, formatter: &Formatter, line: &str) -> String {
    match session.execute_line(line) {
        Ok(outcome) => formatter.outcome(session.tree(), &outcome),
        Err(failure) => {
            tracing::debug!(command = line, error = %failure.source, "Command failed");
            formatter.failure(&failure)
        }
    }
}

fn editor_error(err: ReadlineError) -> CliError {
    CliError::Io(std::io::Error::other(format!(
        "Failed to initialize editor: {}",
        err
    )))
}

fn get_history_path() -> Result<PathBuf> {
    let dir = Config::dir()?;
    std::fs::create_dir_all(&dir)?;
    Ok(dir.join("history.txt"))
}

fn print_help(session: &Session, formatter: &Formatter) {
    let registry = session.registry();

    println!("{}", formatter.info("Available commands:"));
    println!();
    println!("  add_<relation> <member> <new member> [gender] [via member]");
    println!("                                 - Relate a new or existing member");
    println!("  get_relationship <member> <relation>");
    println!("                                 - Resolve a relation of a member");
    println!("  members                        - List every member");
    println!("  help, ?                        - Show this help");
    println!("  exit, quit, q                  - Exit REPL");
    println!();
    println!("  Relations: {}", registry.query_tokens().join(", "));
    println!("  Additions: {}", registry.add_tokens().join(", "));
    println!();
}
