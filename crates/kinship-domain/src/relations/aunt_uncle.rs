//! Paternal and maternal aunts and uncles

use crate::error::{KinshipError, Result};
use crate::gender::Gender;
use crate::member::MemberId;
use crate::tree::FamilyTree;

use super::siblings;

/// Which parent's family the relation goes through
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Side {
    Paternal,
    Maternal,
}

impl Side {
    fn parent(self, tree: &FamilyTree, pivot: MemberId) -> Option<MemberId> {
        let member = tree.member(pivot);
        match self {
            Side::Paternal => member.father(),
            Side::Maternal => member.mother(),
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            Side::Paternal => "father",
            Side::Maternal => "mother",
        }
    }
}

pub(super) fn members(
    tree: &FamilyTree,
    pivot: MemberId,
    side: Side,
    gender: Gender,
) -> Vec<MemberId> {
    match side.parent(tree, pivot) {
        Some(parent) => tree.siblings(parent, Some(gender)),
        None => Vec::new(),
    }
}

/// The new aunt or uncle becomes a child of the grandmother on `side`.
/// A via-member, when given, must be the pivot's parent on that side.
pub(super) fn establish(
    tree: &mut FamilyTree,
    pivot: MemberId,
    member: MemberId,
    via: Option<MemberId>,
    side: Side,
) -> Result<()> {
    let parent = side.parent(tree, pivot).ok_or_else(|| {
        KinshipError::InvalidRelation(format!(
            "{} has no known {}",
            tree.name_of(pivot),
            side.as_str()
        ))
    })?;

    if let Some(via) = via {
        if via != parent {
            return Err(KinshipError::InvalidRelation(format!(
                "{} is not the {} of {}",
                tree.name_of(via),
                side.as_str(),
                tree.name_of(pivot)
            )));
        }
    }

    siblings::attach_as_sibling(tree, parent, member)
}
