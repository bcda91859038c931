//! Sister-in-law and brother-in-law relations

use crate::error::{KinshipError, Result};
use crate::gender::Gender;
use crate::member::MemberId;
use crate::tree::FamilyTree;

use super::siblings;

/// In-laws of the given gender: spouses of the pivot's opposite-gender
/// siblings first, then the spouse's same-gender siblings, each listed once.
pub(super) fn members(tree: &FamilyTree, pivot: MemberId, gender: Gender) -> Vec<MemberId> {
    let mut in_laws: Vec<MemberId> = tree
        .siblings(pivot, Some(gender.opposite()))
        .into_iter()
        .filter_map(|sibling| tree.member(sibling).spouse())
        .collect();

    if let Some(spouse) = tree.member(pivot).spouse() {
        for sibling in tree.siblings(spouse, Some(gender)) {
            if !in_laws.contains(&sibling) {
                in_laws.push(sibling);
            }
        }
    }

    in_laws
}

/// How the via-member relates to the pivot
enum Via {
    /// New member becomes a sibling of the pivot's spouse
    Spouse(MemberId),
    /// New member marries the pivot's sibling
    Sibling(MemberId),
}

fn classify(
    tree: &FamilyTree,
    pivot: MemberId,
    via: Option<MemberId>,
    gender: Gender,
) -> Result<Via> {
    let via = via.ok_or_else(|| {
        KinshipError::InvalidRelation(format!(
            "adding an in-law of {} needs the spouse or sibling they join through",
            tree.name_of(pivot)
        ))
    })?;

    if tree.member(pivot).spouse() == Some(via) {
        return Ok(Via::Spouse(via));
    }
    if tree.siblings(pivot, Some(gender.opposite())).contains(&via) {
        return Ok(Via::Sibling(via));
    }

    Err(KinshipError::InvalidRelation(format!(
        "{} is neither the spouse nor a {} sibling of {}",
        tree.name_of(via),
        gender.opposite(),
        tree.name_of(pivot)
    )))
}

pub(super) fn establish(
    tree: &mut FamilyTree,
    pivot: MemberId,
    member: MemberId,
    via: Option<MemberId>,
    gender: Gender,
) -> Result<()> {
    match classify(tree, pivot, via, gender)? {
        Via::Spouse(spouse) => siblings::attach_as_sibling(tree, spouse, member),
        Via::Sibling(sibling) => tree.link_spouses(sibling, member),
    }
}
