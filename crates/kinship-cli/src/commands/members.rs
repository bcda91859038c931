//! Members command implementation.

use crate::error::Result;
use crate::output::Formatter;
use crate::session::Session;

/// Print every member of the tree.
pub fn execute_members(session: &Session, formatter: &Formatter) -> Result<()> {
    println!("{}", formatter.format_roster(session.tree())?);
    Ok(())
}
