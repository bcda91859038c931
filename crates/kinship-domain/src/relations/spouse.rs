//! Spouse relation

use crate::error::Result;
use crate::member::MemberId;
use crate::tree::FamilyTree;

pub(super) fn members(tree: &FamilyTree, pivot: MemberId) -> Vec<MemberId> {
    tree.member(pivot).spouse().into_iter().collect()
}

pub(super) fn establish(tree: &mut FamilyTree, pivot: MemberId, member: MemberId) -> Result<()> {
    tree.link_spouses(pivot, member)
}
