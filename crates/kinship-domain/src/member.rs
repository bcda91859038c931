//! Member module - one person in the family tree

use std::fmt;

use crate::error::{KinshipError, Result};
use crate::gender::Gender;

/// Stable handle of a member inside a [`FamilyTree`](crate::FamilyTree) arena
///
/// Handles are only minted by the tree that owns the member. Links between
/// members are stored as handles, never as owned values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MemberId(usize);

impl MemberId {
    pub(crate) fn new(index: usize) -> Self {
        Self(index)
    }

    /// Position of the member in the owning arena
    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A family member with biological and marital edges
///
/// Edge setters validate before writing, so a rejected call leaves the
/// member unchanged. The symmetric side of a marriage or parentage is the
/// tree's responsibility.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    name: String,
    gender: Gender,
    mother: Option<MemberId>,
    father: Option<MemberId>,
    spouse: Option<MemberId>,
    children: Vec<MemberId>,
}

impl Member {
    /// Create an unlinked member
    ///
    /// # Errors
    /// Returns `InvalidInput` if the name is empty
    pub fn new(name: impl Into<String>, gender: Gender) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(KinshipError::InvalidInput("name is required".to_string()));
        }

        Ok(Self {
            name,
            gender,
            mother: None,
            father: None,
            spouse: None,
            children: Vec::new(),
        })
    }

    /// Member name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Member gender
    pub fn gender(&self) -> Gender {
        self.gender
    }

    /// Mother, if assigned
    pub fn mother(&self) -> Option<MemberId> {
        self.mother
    }

    /// Father, if assigned
    pub fn father(&self) -> Option<MemberId> {
        self.father
    }

    /// Spouse, if married
    pub fn spouse(&self) -> Option<MemberId> {
        self.spouse
    }

    /// Children in addition order, each listed once
    pub fn children(&self) -> Vec<MemberId> {
        let mut seen = Vec::with_capacity(self.children.len());
        for child in &self.children {
            if !seen.contains(child) {
                seen.push(*child);
            }
        }
        seen
    }

    /// Raw parentage edges, duplicates included
    pub fn child_edges(&self) -> &[MemberId] {
        &self.children
    }

    pub(crate) fn check_spouse(&self, spouse: MemberId, spouse_gender: Gender) -> Result<()> {
        if self.gender == spouse_gender {
            return Err(KinshipError::InvalidRelation(format!(
                "{} cannot marry a member of the same gender",
                self.name
            )));
        }

        match self.spouse {
            Some(current) if current != spouse => Err(KinshipError::InvalidRelation(format!(
                "{} is already married",
                self.name
            ))),
            _ => Ok(()),
        }
    }

    pub(crate) fn set_spouse(&mut self, spouse: MemberId, spouse_gender: Gender) -> Result<()> {
        self.check_spouse(spouse, spouse_gender)?;
        self.spouse = Some(spouse);
        Ok(())
    }

    pub(crate) fn check_mother(&self, mother: MemberId, mother_gender: Gender) -> Result<()> {
        if mother_gender != Gender::Female {
            return Err(KinshipError::InvalidRelation(format!(
                "mother of {} must be female",
                self.name
            )));
        }
        Self::check_parent_slot(&self.name, self.mother, mother, "mother")
    }

    pub(crate) fn set_mother(&mut self, mother: MemberId, mother_gender: Gender) -> Result<()> {
        self.check_mother(mother, mother_gender)?;
        self.mother = Some(mother);
        Ok(())
    }

    pub(crate) fn check_father(&self, father: MemberId, father_gender: Gender) -> Result<()> {
        if father_gender != Gender::Male {
            return Err(KinshipError::InvalidRelation(format!(
                "father of {} must be male",
                self.name
            )));
        }
        Self::check_parent_slot(&self.name, self.father, father, "father")
    }

    pub(crate) fn set_father(&mut self, father: MemberId, father_gender: Gender) -> Result<()> {
        self.check_father(father, father_gender)?;
        self.father = Some(father);
        Ok(())
    }

    /// Appends without de-duplication; readers go through [`Member::children`].
    pub(crate) fn add_child(&mut self, child: MemberId) {
        self.children.push(child);
    }

    fn check_parent_slot(
        name: &str,
        current: Option<MemberId>,
        candidate: MemberId,
        role: &str,
    ) -> Result<()> {
        match current {
            Some(existing) if existing != candidate => Err(KinshipError::InvalidRelation(format!(
                "{} already has a {}",
                name, role
            ))),
            _ => Ok(()),
        }
    }
}
