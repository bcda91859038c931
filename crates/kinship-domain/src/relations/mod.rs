//! Relation strategies
//!
//! Each [`RelationKind`] knows how to derive the members standing in that
//! relation to a pivot, and how to establish the relation between the pivot
//! and another member. The set of relations is closed, so dispatch is a
//! `match` over the kind rather than a trait object per relation.

mod aunt_uncle;
mod child;
mod in_law;
mod parent;
mod siblings;
mod spouse;

use crate::error::{KinshipError, Result};
use crate::gender::Gender;
use crate::member::MemberId;
use crate::tree::FamilyTree;

use aunt_uncle::Side;

/// Kind of relationship between two members
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelationKind {
    /// Husband or wife
    Spouse,

    /// Son or daughter
    Child,

    /// Brother or sister (same mother)
    Siblings,

    /// Father
    Father,

    /// Mother
    Mother,

    /// Father's sister
    PaternalAunt,

    /// Father's brother
    PaternalUncle,

    /// Mother's sister
    MaternalAunt,

    /// Mother's brother
    MaternalUncle,

    /// Spouse's sister or brother's wife
    SisterInLaw,

    /// Spouse's brother or sister's husband
    BrotherInLaw,
}

impl RelationKind {
    /// Get the relation name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            RelationKind::Spouse => "spouse",
            RelationKind::Child => "child",
            RelationKind::Siblings => "siblings",
            RelationKind::Father => "father",
            RelationKind::Mother => "mother",
            RelationKind::PaternalAunt => "paternal-aunt",
            RelationKind::PaternalUncle => "paternal-uncle",
            RelationKind::MaternalAunt => "maternal-aunt",
            RelationKind::MaternalUncle => "maternal-uncle",
            RelationKind::SisterInLaw => "sister-in-law",
            RelationKind::BrotherInLaw => "brother-in-law",
        }
    }

    /// Gender the related member must have, when the relation fixes one
    pub fn required_gender(&self) -> Option<Gender> {
        match self {
            RelationKind::Father
            | RelationKind::PaternalUncle
            | RelationKind::MaternalUncle
            | RelationKind::BrotherInLaw => Some(Gender::Male),
            RelationKind::Mother
            | RelationKind::PaternalAunt
            | RelationKind::MaternalAunt
            | RelationKind::SisterInLaw => Some(Gender::Female),
            RelationKind::Spouse | RelationKind::Child | RelationKind::Siblings => None,
        }
    }

    fn members(self, tree: &FamilyTree, pivot: MemberId) -> Vec<MemberId> {
        match self {
            RelationKind::Spouse => spouse::members(tree, pivot),
            RelationKind::Child => child::members(tree, pivot),
            RelationKind::Siblings => siblings::members(tree, pivot),
            RelationKind::Father => parent::father(tree, pivot),
            RelationKind::Mother => parent::mother(tree, pivot),
            RelationKind::PaternalAunt => {
                aunt_uncle::members(tree, pivot, Side::Paternal, Gender::Female)
            }
            RelationKind::PaternalUncle => {
                aunt_uncle::members(tree, pivot, Side::Paternal, Gender::Male)
            }
            RelationKind::MaternalAunt => {
                aunt_uncle::members(tree, pivot, Side::Maternal, Gender::Female)
            }
            RelationKind::MaternalUncle => {
                aunt_uncle::members(tree, pivot, Side::Maternal, Gender::Male)
            }
            RelationKind::SisterInLaw => in_law::members(tree, pivot, Gender::Female),
            RelationKind::BrotherInLaw => in_law::members(tree, pivot, Gender::Male),
        }
    }

    fn establish(
        self,
        tree: &mut FamilyTree,
        pivot: MemberId,
        member: MemberId,
        via: Option<MemberId>,
    ) -> Result<()> {
        match self {
            RelationKind::Spouse => spouse::establish(tree, pivot, member),
            RelationKind::Child => child::establish(tree, pivot, member),
            RelationKind::Siblings => siblings::establish(tree, pivot, member),
            RelationKind::Father => parent::establish_father(tree, pivot, member),
            RelationKind::Mother => parent::establish_mother(tree, pivot, member),
            RelationKind::PaternalAunt | RelationKind::PaternalUncle => {
                aunt_uncle::establish(tree, pivot, member, via, Side::Paternal)
            }
            RelationKind::MaternalAunt | RelationKind::MaternalUncle => {
                aunt_uncle::establish(tree, pivot, member, via, Side::Maternal)
            }
            RelationKind::SisterInLaw => in_law::establish(tree, pivot, member, via, Gender::Female),
            RelationKind::BrotherInLaw => in_law::establish(tree, pivot, member, via, Gender::Male),
        }
    }
}

impl std::fmt::Display for RelationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A relation strategy bound to its pivot member
///
/// Obtained from [`FamilyTree::build_relation`]. The binding is a plain
/// value, so every query or command starts from a fresh one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundRelation {
    kind: RelationKind,
    pivot: MemberId,
}

impl BoundRelation {
    pub(crate) fn new(kind: RelationKind, pivot: MemberId) -> Self {
        Self { kind, pivot }
    }

    /// The relation kind
    pub fn kind(&self) -> RelationKind {
        self.kind
    }

    /// The pivot member
    pub fn pivot(&self) -> MemberId {
        self.pivot
    }

    /// Members standing in this relation to the pivot, in derivation order
    ///
    /// # Errors
    /// Returns `NoResult` when no member matches
    pub fn members(&self, tree: &FamilyTree, gender: Option<Gender>) -> Result<Vec<MemberId>> {
        let found: Vec<MemberId> = self
            .kind
            .members(tree, self.pivot)
            .into_iter()
            .filter(|id| gender.is_none_or(|g| tree.member(*id).gender() == g))
            .collect();

        tracing::trace!(
            pivot = tree.name_of(self.pivot),
            relation = self.kind.as_str(),
            count = found.len(),
            "Relation resolved"
        );

        if found.is_empty() {
            return Err(KinshipError::NoResult);
        }
        Ok(found)
    }

    /// Establish this relation between the pivot and `member`
    ///
    /// `via` names an auxiliary member for relations that need one to decide
    /// where `member` attaches. Preconditions are checked before any link is
    /// written.
    ///
    /// # Errors
    /// Returns `InvalidRelation` when a relation precondition fails
    pub fn make_relation(
        &self,
        tree: &mut FamilyTree,
        member: MemberId,
        via: Option<MemberId>,
    ) -> Result<()> {
        if member == self.pivot {
            return Err(KinshipError::InvalidRelation(format!(
                "{} cannot be related to themselves",
                tree.name_of(member)
            )));
        }

        if let Some(required) = self.kind.required_gender() {
            if tree.member(member).gender() != required {
                return Err(KinshipError::InvalidRelation(format!(
                    "{} must be {} to be a {}",
                    tree.name_of(member),
                    required,
                    self.kind
                )));
            }
        }

        self.kind.establish(tree, self.pivot, member, via)?;
        tracing::debug!(
            pivot = tree.name_of(self.pivot),
            member = tree.name_of(member),
            relation = self.kind.as_str(),
            "Relation established"
        );

        Ok(())
    }

    /// Create `name` and relate it to the pivot in one step
    ///
    /// The new member is discarded again if the relation cannot be made.
    ///
    /// # Errors
    /// Returns `InvalidInput` for a bad name, or whatever
    /// [`make_relation`](Self::make_relation) returns
    pub fn add_new(
        &self,
        tree: &mut FamilyTree,
        name: &str,
        gender: Gender,
        via: Option<MemberId>,
    ) -> Result<MemberId> {
        let previous = tree.member_id(name).ok();
        let member = tree.add_member(name, gender)?;

        if let Err(e) = self.make_relation(tree, member, via) {
            tree.discard_new_member(member, previous);
            return Err(e);
        }
        Ok(member)
    }
}
