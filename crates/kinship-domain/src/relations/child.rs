//! Child relation (son / daughter)

use crate::error::{KinshipError, Result};
use crate::gender::Gender;
use crate::member::MemberId;
use crate::tree::FamilyTree;

pub(super) fn members(tree: &FamilyTree, pivot: MemberId) -> Vec<MemberId> {
    tree.children_of(pivot)
}

/// Only a married woman can have a child added; the child gets both parents.
pub(super) fn establish(tree: &mut FamilyTree, pivot: MemberId, child: MemberId) -> Result<()> {
    let mother = tree.member(pivot);
    if mother.gender() != Gender::Female {
        return Err(KinshipError::InvalidRelation(format!(
            "{} is not female, children are added through the mother",
            mother.name()
        )));
    }

    let father = mother.spouse().ok_or_else(|| {
        KinshipError::InvalidRelation(format!("{} is not married", mother.name()))
    })?;

    tree.link_parents(child, Some(pivot), Some(father))
}
