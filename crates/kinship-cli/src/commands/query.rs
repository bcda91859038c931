//! Query command implementation.

use crate::cli::QueryArgs;
use crate::error::{CommandFailure, Result};
use crate::output::Formatter;
use crate::session::Session;

/// Execute the query command.
///
/// A query that cannot be answered prints its code; it is not a CLI error.
pub fn execute_query(args: QueryArgs, session: &Session, formatter: &Formatter) -> Result<()> {
    let line = match session.query(&args.member, &args.relation) {
        Ok(members) => formatter.format_members(session.tree(), &members)?,
        Err(e) => formatter.failure(&CommandFailure::new(e)),
    };

    println!("{}", line);
    Ok(())
}
