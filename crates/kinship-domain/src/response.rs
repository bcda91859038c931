//! Response formatting for resolved relations

use crate::error::{KinshipError, Result};
use crate::member::MemberId;
use crate::tree::FamilyTree;

/// Separator between member names in a rendered response
pub const NAME_DELIMITER: &str = " ";

/// Render resolved members as their names joined by a single space
///
/// # Errors
/// Returns `NoResult` for an empty list
pub fn render(tree: &FamilyTree, members: &[MemberId]) -> Result<String> {
    if members.is_empty() {
        return Err(KinshipError::NoResult);
    }

    Ok(members
        .iter()
        .map(|id| tree.name_of(*id))
        .collect::<Vec<_>>()
        .join(NAME_DELIMITER))
}
