//! Relation registry - maps command tokens to relation strategies
//!
//! Query tokens (`father`, `son`, `sister-in-law`, ...) resolve to a
//! [`QueryRelation`]; add-operation tokens (`add_child`, `add_spouse`, ...)
//! resolve to an [`AddOperation`]. Lookups are case-insensitive and fail with
//! `Configuration` for unknown tokens.

use std::collections::HashMap;

use crate::error::{KinshipError, Result};
use crate::gender::Gender;
use crate::relations::RelationKind;

/// A query-side relation with its optional gender filter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryRelation {
    /// Strategy that derives the members
    pub kind: RelationKind,

    /// Gender to keep, if the token implies one
    pub gender: Option<Gender>,
}

/// Gender a newly created member gets when the command does not give one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImpliedGender {
    /// The relation fixes the gender
    Fixed(Gender),

    /// Opposite of the pivot (spouses)
    OppositeOfPivot,

    /// Must be supplied explicitly
    Unspecified,
}

impl ImpliedGender {
    /// Resolve against the pivot's gender
    pub fn resolve(&self, pivot_gender: Gender) -> Option<Gender> {
        match self {
            ImpliedGender::Fixed(gender) => Some(*gender),
            ImpliedGender::OppositeOfPivot => Some(pivot_gender.opposite()),
            ImpliedGender::Unspecified => None,
        }
    }
}

/// An add operation with its reporting messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddOperation {
    /// Strategy that establishes the relation
    pub kind: RelationKind,

    /// Reported when the relation is made
    pub success_message: &'static str,

    /// Reported when the relation is rejected
    pub failure_code: &'static str,

    /// Gender for a member the command creates
    pub implied_gender: ImpliedGender,
}

/// Token lookup tables for queries and add operations
#[derive(Debug, Clone)]
pub struct RelationRegistry {
    queries: HashMap<&'static str, QueryRelation>,
    additions: HashMap<&'static str, AddOperation>,
}

impl RelationRegistry {
    /// Create a registry holding every supported relation
    pub fn new() -> Self {
        let queries = [
            ("spouse", RelationKind::Spouse, None),
            ("son", RelationKind::Child, Some(Gender::Male)),
            ("daughter", RelationKind::Child, Some(Gender::Female)),
            ("siblings", RelationKind::Siblings, None),
            ("brother", RelationKind::Siblings, Some(Gender::Male)),
            ("sister", RelationKind::Siblings, Some(Gender::Female)),
            ("father", RelationKind::Father, None),
            ("mother", RelationKind::Mother, None),
            ("paternal-uncle", RelationKind::PaternalUncle, None),
            ("paternal-aunt", RelationKind::PaternalAunt, None),
            ("maternal-uncle", RelationKind::MaternalUncle, None),
            ("maternal-aunt", RelationKind::MaternalAunt, None),
            ("sister-in-law", RelationKind::SisterInLaw, None),
            ("brother-in-law", RelationKind::BrotherInLaw, None),
        ]
        .into_iter()
        .map(|(token, kind, gender)| (token, QueryRelation { kind, gender }))
        .collect();

        let additions = [
            (
                "add_child",
                RelationKind::Child,
                ("CHILD_ADDITION_SUCCEEDED", "CHILD_ADDITION_FAILED"),
                ImpliedGender::Unspecified,
            ),
            (
                "add_spouse",
                RelationKind::Spouse,
                ("SPOUSE_ADDITION_SUCCEEDED", "SPOUSE_ADDITION_FAILED"),
                ImpliedGender::OppositeOfPivot,
            ),
            (
                "add_sibling",
                RelationKind::Siblings,
                ("SIBLINGS_ADDITION_SUCCEEDED", "SIBLINGS_ADDITION_FAILED"),
                ImpliedGender::Unspecified,
            ),
            (
                "add_father",
                RelationKind::Father,
                ("FATHER_ADDITION_SUCCEEDED", "FATHER_ADDITION_FAILED"),
                ImpliedGender::Fixed(Gender::Male),
            ),
            (
                "add_mother",
                RelationKind::Mother,
                ("MOTHER_ADDITION_SUCCEEDED", "MOTHER_ADDITION_FAILED"),
                ImpliedGender::Fixed(Gender::Female),
            ),
            (
                "add_paternal-uncle",
                RelationKind::PaternalUncle,
                ("PATERNAL_UNCLE_ADDITION_SUCCEEDED", "PATERNAL_UNCLE_ADDITION_FAILED"),
                ImpliedGender::Fixed(Gender::Male),
            ),
            (
                "add_paternal-aunt",
                RelationKind::PaternalAunt,
                ("PATERNAL_AUNT_ADDITION_SUCCEEDED", "PATERNAL_AUNT_ADDITION_FAILED"),
                ImpliedGender::Fixed(Gender::Female),
            ),
            (
                "add_maternal-uncle",
                RelationKind::MaternalUncle,
                ("MATERNAL_UNCLE_ADDITION_SUCCEEDED", "MATERNAL_UNCLE_ADDITION_FAILED"),
                ImpliedGender::Fixed(Gender::Male),
            ),
            (
                "add_maternal-aunt",
                RelationKind::MaternalAunt,
                ("MATERNAL_AUNT_ADDITION_SUCCEEDED", "MATERNAL_AUNT_ADDITION_FAILED"),
                ImpliedGender::Fixed(Gender::Female),
            ),
            (
                "add_sister-in-law",
                RelationKind::SisterInLaw,
                ("SISTER_IN_LAW_ADDITION_SUCCEEDED", "SISTER_IN_LAW_ADDITION_FAILED"),
                ImpliedGender::Fixed(Gender::Female),
            ),
            (
                "add_brother-in-law",
                RelationKind::BrotherInLaw,
                ("BROTHER_IN_LAW_ADDITION_SUCCEEDED", "BROTHER_IN_LAW_ADDITION_FAILED"),
                ImpliedGender::Fixed(Gender::Male),
            ),
        ]
        .into_iter()
        .map(|(token, kind, (success_message, failure_code), implied_gender)| {
            (
                token,
                AddOperation {
                    kind,
                    success_message,
                    failure_code,
                    implied_gender,
                },
            )
        })
        .collect();

        Self { queries, additions }
    }

    /// Resolve a query relation token
    ///
    /// # Errors
    /// Returns `Configuration` for an unknown token
    pub fn resolve_query(&self, token: &str) -> Result<QueryRelation> {
        self.queries
            .get(token.to_lowercase().as_str())
            .copied()
            .ok_or_else(|| KinshipError::Configuration(token.to_string()))
    }

    /// Resolve an add-operation token
    ///
    /// # Errors
    /// Returns `Configuration` for an unknown token
    pub fn resolve_add(&self, token: &str) -> Result<AddOperation> {
        self.additions
            .get(token.to_lowercase().as_str())
            .copied()
            .ok_or_else(|| KinshipError::Configuration(token.to_string()))
    }

    /// Supported query tokens, sorted
    pub fn query_tokens(&self) -> Vec<&'static str> {
        let mut tokens: Vec<_> = self.queries.keys().copied().collect();
        tokens.sort_unstable();
        tokens
    }

    /// Supported add-operation tokens, sorted
    pub fn add_tokens(&self) -> Vec<&'static str> {
        let mut tokens: Vec<_> = self.additions.keys().copied().collect();
        tokens.sort_unstable();
        tokens
    }
}

impl Default for RelationRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_query_with_gender() {
        let registry = RelationRegistry::new();
        let son = registry.resolve_query("son").unwrap();
        assert_eq!(son.kind, RelationKind::Child);
        assert_eq!(son.gender, Some(Gender::Male));

        let spouse = registry.resolve_query("Spouse").unwrap();
        assert_eq!(spouse.kind, RelationKind::Spouse);
        assert_eq!(spouse.gender, None);
    }

    #[test]
    fn test_resolve_add_operation() {
        let registry = RelationRegistry::new();
        let op = registry.resolve_add("ADD_CHILD").unwrap();
        assert_eq!(op.kind, RelationKind::Child);
        assert_eq!(op.success_message, "CHILD_ADDITION_SUCCEEDED");
        assert_eq!(op.failure_code, "CHILD_ADDITION_FAILED");

        let op = registry.resolve_add("add_sister-in-law").unwrap();
        assert_eq!(op.implied_gender, ImpliedGender::Fixed(Gender::Female));
    }

    #[test]
    fn test_unknown_tokens() {
        let registry = RelationRegistry::new();
        assert_eq!(
            registry.resolve_query("cousin"),
            Err(KinshipError::Configuration("cousin".to_string()))
        );
        assert!(matches!(
            registry.resolve_add("add_cousin"),
            Err(KinshipError::Configuration(_))
        ));
    }

    #[test]
    fn test_every_add_operation_reports_its_relation() {
        let registry = RelationRegistry::new();
        for token in registry.add_tokens() {
            let op = registry.resolve_add(token).unwrap();
            assert!(op.success_message.ends_with("_ADDITION_SUCCEEDED"), "{}", token);
            assert!(op.failure_code.ends_with("_ADDITION_FAILED"), "{}", token);
        }
        assert_eq!(registry.add_tokens().len(), 11);
        assert_eq!(registry.query_tokens().len(), 14);
    }

    #[test]
    fn test_implied_gender_resolution() {
        assert_eq!(
            ImpliedGender::OppositeOfPivot.resolve(Gender::Male),
            Some(Gender::Female)
        );
        assert_eq!(ImpliedGender::Unspecified.resolve(Gender::Male), None);
    }
}
