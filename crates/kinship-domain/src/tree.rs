//! Family tree - the arena that owns every member

use std::collections::HashMap;

use crate::error::{KinshipError, Result};
use crate::gender::Gender;
use crate::member::{Member, MemberId};
use crate::relations::{BoundRelation, RelationKind};

/// In-memory family graph
///
/// Members live in an append-only arena addressed by [`MemberId`]; a name
/// index maps each name to its latest member. Re-adding a name points the
/// index at the new member and leaves existing links to the old one intact.
#[derive(Debug, Clone, Default)]
pub struct FamilyTree {
    members: Vec<Member>,
    index: HashMap<String, MemberId>,
    root: Option<MemberId>,
}

impl FamilyTree {
    /// Create an empty tree
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a new member
    ///
    /// # Errors
    /// Returns `InvalidInput` if the name is empty
    pub fn add_member(&mut self, name: &str, gender: Gender) -> Result<MemberId> {
        let member = Member::new(name, gender)?;
        let id = MemberId::new(self.members.len());

        if self.index.contains_key(name) {
            tracing::warn!(name, "Member name reused, replacing index entry");
        }

        self.members.push(member);
        self.index.insert(name.to_string(), id);
        tracing::debug!(name, gender = gender.as_str(), id = %id, "Member added");

        Ok(id)
    }

    /// Add a new member from a raw gender token
    ///
    /// # Errors
    /// Returns `InvalidInput` if the name is empty or the gender unrecognized
    pub fn add_member_with_token(&mut self, name: &str, gender: &str) -> Result<MemberId> {
        let gender = gender.parse::<Gender>()?;
        self.add_member(name, gender)
    }

    /// Resolve a name to its member handle
    ///
    /// # Errors
    /// Returns `NotFound` if no member has this name
    pub fn member_id(&self, name: &str) -> Result<MemberId> {
        self.index
            .get(name)
            .copied()
            .ok_or_else(|| KinshipError::NotFound(name.to_string()))
    }

    /// Look a member up by name
    ///
    /// # Errors
    /// Returns `NotFound` if no member has this name
    pub fn get_member(&self, name: &str) -> Result<&Member> {
        let id = self.member_id(name)?;
        Ok(self.member(id))
    }

    /// Access a member by handle
    ///
    /// # Panics
    /// Panics if `id` was minted by a different tree
    pub fn member(&self, id: MemberId) -> &Member {
        &self.members[id.index()]
    }

    /// Name of the member behind a handle
    pub fn name_of(&self, id: MemberId) -> &str {
        self.member(id).name()
    }

    /// Whether a member with this name exists
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Number of members in the arena
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether the tree has no members
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Members reachable by name, in insertion order
    pub fn members(&self) -> impl Iterator<Item = (MemberId, &Member)> + '_ {
        self.members
            .iter()
            .enumerate()
            .map(|(index, member)| (MemberId::new(index), member))
            .filter(|(id, member)| self.index.get(member.name()) == Some(id))
    }

    /// Designate the root ancestor
    ///
    /// The root is set once; naming the current root again is a no-op.
    ///
    /// # Errors
    /// Returns `InvalidInput` unless the member exists and is female, or if
    /// a different root is already set
    pub fn set_root(&mut self, name: &str) -> Result<()> {
        match self.index.get(name).copied() {
            Some(id) if self.root == Some(id) => Ok(()),
            Some(_) if self.root.is_some() => Err(KinshipError::InvalidInput(format!(
                "root is already set, cannot make {} the root",
                name
            ))),
            Some(id) if self.member(id).gender() == Gender::Female => {
                self.root = Some(id);
                tracing::debug!(name, "Root set");
                Ok(())
            }
            _ => Err(KinshipError::InvalidInput(format!(
                "root must be an existing female member: {}",
                name
            ))),
        }
    }

    /// The root ancestor, once set
    pub fn root(&self) -> Option<MemberId> {
        self.root
    }

    /// Bind a relation strategy to the named pivot
    ///
    /// # Errors
    /// Returns `NotFound` if the pivot does not exist
    pub fn build_relation(&self, name: &str, kind: RelationKind) -> Result<BoundRelation> {
        let pivot = self.member_id(name)?;
        Ok(BoundRelation::new(kind, pivot))
    }

    /// Children of a member, each listed once, in addition order
    pub fn children_of(&self, id: MemberId) -> Vec<MemberId> {
        self.member(id).children()
    }

    /// Other children of the member's mother, optionally filtered by gender
    ///
    /// Empty when the member has no mother.
    pub fn siblings(&self, id: MemberId, gender: Option<Gender>) -> Vec<MemberId> {
        let Some(mother) = self.member(id).mother() else {
            return Vec::new();
        };

        self.children_of(mother)
            .into_iter()
            .filter(|child| *child != id)
            .filter(|child| gender.is_none_or(|g| self.member(*child).gender() == g))
            .collect()
    }

    /// Marry two members, writing both directions
    pub(crate) fn link_spouses(&mut self, a: MemberId, b: MemberId) -> Result<()> {
        let (a_gender, b_gender) = (self.member(a).gender(), self.member(b).gender());
        self.member(a).check_spouse(b, b_gender)?;
        self.member(b).check_spouse(a, a_gender)?;

        self.members[a.index()].set_spouse(b, b_gender)?;
        self.members[b.index()].set_spouse(a, a_gender)?;
        tracing::debug!(a = self.name_of(a), b = self.name_of(b), "Spouses linked");

        Ok(())
    }

    /// Attach `child` to the given parents and record it in their children
    pub(crate) fn link_parents(
        &mut self,
        child: MemberId,
        mother: Option<MemberId>,
        father: Option<MemberId>,
    ) -> Result<()> {
        if mother.is_none() && father.is_none() {
            return Err(KinshipError::InvalidRelation(format!(
                "no parent known for {}",
                self.name_of(child)
            )));
        }
        if mother == Some(child) || father == Some(child) {
            return Err(KinshipError::InvalidRelation(format!(
                "{} cannot be their own parent",
                self.name_of(child)
            )));
        }

        if let Some(mother) = mother {
            self.member(child).check_mother(mother, self.member(mother).gender())?;
        }
        if let Some(father) = father {
            self.member(child).check_father(father, self.member(father).gender())?;
        }

        if let Some(mother) = mother {
            let gender = self.member(mother).gender();
            self.members[child.index()].set_mother(mother, gender)?;
            self.members[mother.index()].add_child(child);
        }
        if let Some(father) = father {
            let gender = self.member(father).gender();
            self.members[child.index()].set_father(father, gender)?;
            self.members[father.index()].add_child(child);
        }
        tracing::debug!(child = self.name_of(child), "Parents linked");

        Ok(())
    }

    /// Drop a member created moments ago whose relation could not be made
    pub(crate) fn discard_new_member(&mut self, id: MemberId, previous: Option<MemberId>) {
        if id.index() + 1 != self.members.len() {
            return;
        }

        let member = self.members.remove(id.index());
        match previous {
            Some(previous) => {
                self.index.insert(member.name().to_string(), previous);
            }
            None => {
                self.index.remove(member.name());
            }
        }
        tracing::debug!(name = member.name(), "Discarded unlinked member");
    }
}
