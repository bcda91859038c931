//! Run command implementation.

use crate::cli::RunArgs;
use crate::error::Result;
use crate::output::Formatter;
use crate::session::Session;
use std::fs;

/// Execute every command of an input file.
///
/// Prints one line per command. With `--output` the same lines are written
/// to the file, without color codes.
pub fn execute_run(args: RunArgs, session: &mut Session, formatter: &Formatter) -> Result<()> {
    let input = fs::read_to_string(&args.file)?;

    let lines = match &args.output {
        Some(_) => session.run_batch(&input, &formatter.with_color(false)),
        None => session.run_batch(&input, formatter),
    };
    tracing::info!(file = %args.file, commands = lines.len(), "Batch finished");

    for line in &lines {
        println!("{}", line);
    }

    if let Some(output) = args.output {
        let mut contents = lines.join("\n");
        contents.push('\n');
        fs::write(&output, contents)?;
    }

    Ok(())
}
