//! Father and mother relations

use crate::error::Result;
use crate::member::MemberId;
use crate::tree::FamilyTree;

pub(super) fn father(tree: &FamilyTree, pivot: MemberId) -> Vec<MemberId> {
    tree.member(pivot).father().into_iter().collect()
}

pub(super) fn mother(tree: &FamilyTree, pivot: MemberId) -> Vec<MemberId> {
    tree.member(pivot).mother().into_iter().collect()
}

/// The father's wife, if any, becomes the mother as well.
pub(super) fn establish_father(
    tree: &mut FamilyTree,
    pivot: MemberId,
    father: MemberId,
) -> Result<()> {
    let mother = tree.member(father).spouse();
    tree.link_parents(pivot, mother, Some(father))
}

/// The mother's husband, if any, becomes the father as well.
pub(super) fn establish_mother(
    tree: &mut FamilyTree,
    pivot: MemberId,
    mother: MemberId,
) -> Result<()> {
    let father = tree.member(mother).spouse();
    tree.link_parents(pivot, Some(mother), father)
}
