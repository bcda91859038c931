//! Siblings relation (brother / sister)

use crate::error::{KinshipError, Result};
use crate::member::MemberId;
use crate::tree::FamilyTree;

pub(super) fn members(tree: &FamilyTree, pivot: MemberId) -> Vec<MemberId> {
    tree.siblings(pivot, None)
}

pub(super) fn establish(tree: &mut FamilyTree, pivot: MemberId, member: MemberId) -> Result<()> {
    attach_as_sibling(tree, pivot, member)
}

/// Give `member` the same parents as `anchor`. The mother is required since
/// siblings are derived through her.
pub(super) fn attach_as_sibling(
    tree: &mut FamilyTree,
    anchor: MemberId,
    member: MemberId,
) -> Result<()> {
    let anchor_member = tree.member(anchor);
    let mother = anchor_member.mother().ok_or_else(|| {
        KinshipError::InvalidRelation(format!("{} has no known mother", anchor_member.name()))
    })?;
    let father = anchor_member.father();

    tree.link_parents(member, Some(mother), father)
}
