//! Integration tests for kinship-domain
//!
//! These tests drive the tree through the registry the way a command layer
//! does: resolve a token, bind it to a pivot, then query or establish.

use kinship_domain::response::render;
use kinship_domain::{FamilyTree, Gender, KinshipError, RelationKind, RelationRegistry};

/// Anna (root) married to Abe.
fn seeded() -> FamilyTree {
    let mut tree = FamilyTree::new();
    tree.add_member("Anna", Gender::Female).unwrap();
    let abe = tree.add_member("Abe", Gender::Male).unwrap();
    tree.build_relation("Anna", RelationKind::Spouse)
        .unwrap()
        .make_relation(&mut tree, abe, None)
        .unwrap();
    tree.set_root("Anna").unwrap();
    tree
}

/// Anna and Abe with children Bela and Che.
fn with_children() -> FamilyTree {
    let mut tree = seeded();
    let child = tree.build_relation("Anna", RelationKind::Child).unwrap();
    child.add_new(&mut tree, "Bela", Gender::Female, None).unwrap();
    child.add_new(&mut tree, "Che", Gender::Male, None).unwrap();
    tree
}

fn query(tree: &FamilyTree, name: &str, token: &str) -> Result<String, KinshipError> {
    let registry = RelationRegistry::new();
    let relation = registry.resolve_query(token)?;
    let members = tree
        .build_relation(name, relation.kind)?
        .members(tree, relation.gender)?;
    render(tree, &members)
}

#[test]
fn test_child_added_to_root_has_mother() {
    let mut tree = seeded();
    let bela = tree.add_member("Bela", Gender::Female).unwrap();
    tree.build_relation("Anna", RelationKind::Child)
        .unwrap()
        .make_relation(&mut tree, bela, None)
        .unwrap();

    assert_eq!(query(&tree, "Bela", "mother").unwrap(), "Anna");
    assert_eq!(query(&tree, "Bela", "father").unwrap(), "Abe");
}

#[test]
fn test_brother_and_sister() {
    let tree = with_children();
    assert_eq!(query(&tree, "Bela", "brother").unwrap(), "Che");
    assert_eq!(query(&tree, "Che", "sister").unwrap(), "Bela");
    assert_eq!(query(&tree, "Anna", "son").unwrap(), "Che");
    assert_eq!(query(&tree, "Abe", "daughter").unwrap(), "Bela");
}

#[test]
fn test_unset_spouse_is_none() {
    let tree = with_children();
    assert_eq!(query(&tree, "Che", "spouse"), Err(KinshipError::NoResult));
}

#[test]
fn test_added_spouse_is_found() {
    let mut tree = with_children();
    let registry = RelationRegistry::new();
    let op = registry.resolve_add("add_spouse").unwrap();
    let pivot = tree.member_id("Che").unwrap();
    let gender = op.implied_gender.resolve(tree.member(pivot).gender()).unwrap();

    tree.build_relation("Che", op.kind)
        .unwrap()
        .add_new(&mut tree, "Dora", gender, None)
        .unwrap();

    assert_eq!(query(&tree, "Che", "spouse").unwrap(), "Dora");
    assert_eq!(query(&tree, "Dora", "spouse").unwrap(), "Che");
}

#[test]
fn test_unknown_member_is_not_found_for_every_relation() {
    let tree = with_children();
    let registry = RelationRegistry::new();
    for token in registry.query_tokens() {
        assert_eq!(
            query(&tree, "Zed", token),
            Err(KinshipError::NotFound("Zed".to_string())),
            "{}",
            token
        );
    }
}

#[test]
fn test_only_child_has_no_siblings() {
    let mut tree = seeded();
    tree.build_relation("Anna", RelationKind::Child)
        .unwrap()
        .add_new(&mut tree, "Bela", Gender::Female, None)
        .unwrap();

    assert_eq!(query(&tree, "Bela", "siblings"), Err(KinshipError::NoResult));
    assert_eq!(query(&tree, "Anna", "mother"), Err(KinshipError::NoResult));
}

#[test]
fn test_repeated_query_is_stable() {
    let tree = with_children();
    let first = query(&tree, "Anna", "siblings");
    let second = query(&tree, "Anna", "siblings");
    assert_eq!(first, second);

    assert_eq!(query(&tree, "Abe", "son"), query(&tree, "Abe", "son"));
}

#[test]
fn test_child_relation_requires_married_mother() {
    let mut tree = with_children();
    let child = tree.build_relation("Abe", RelationKind::Child).unwrap();
    assert!(matches!(
        child.add_new(&mut tree, "Eve", Gender::Female, None),
        Err(KinshipError::InvalidRelation(_))
    ));

    let child = tree.build_relation("Bela", RelationKind::Child).unwrap();
    assert!(matches!(
        child.add_new(&mut tree, "Eve", Gender::Female, None),
        Err(KinshipError::InvalidRelation(_))
    ));
    assert!(!tree.contains("Eve"));
}

#[test]
fn test_uncles_aunts_and_in_laws() {
    let mut tree = with_children();

    // Che marries Dora; they have Fay
    let che = tree.member_id("Che").unwrap();
    tree.build_relation("Che", RelationKind::Spouse)
        .unwrap()
        .add_new(&mut tree, "Dora", Gender::Female, None)
        .unwrap();
    tree.build_relation("Dora", RelationKind::Child)
        .unwrap()
        .add_new(&mut tree, "Fay", Gender::Female, None)
        .unwrap();

    // Bela marries Gil
    tree.build_relation("Bela", RelationKind::Spouse)
        .unwrap()
        .add_new(&mut tree, "Gil", Gender::Male, None)
        .unwrap();

    assert_eq!(query(&tree, "Fay", "paternal-aunt").unwrap(), "Bela");
    assert_eq!(query(&tree, "Fay", "paternal-uncle"), Err(KinshipError::NoResult));
    assert_eq!(query(&tree, "Fay", "maternal-aunt"), Err(KinshipError::NoResult));
    assert_eq!(query(&tree, "Bela", "sister-in-law").unwrap(), "Dora");
    assert_eq!(query(&tree, "Dora", "sister-in-law").unwrap(), "Bela");
    assert_eq!(query(&tree, "Che", "brother-in-law").unwrap(), "Gil");
    assert_eq!(query(&tree, "Gil", "brother-in-law").unwrap(), "Che");

    // A paternal uncle joins Anna's children
    tree.build_relation("Fay", RelationKind::PaternalUncle)
        .unwrap()
        .add_new(&mut tree, "Hal", Gender::Male, Some(che))
        .unwrap();
    assert_eq!(query(&tree, "Fay", "paternal-uncle").unwrap(), "Hal");
    assert_eq!(query(&tree, "Anna", "son").unwrap(), "Che Hal");
}

#[test]
fn test_wrong_gender_for_relation_rejected() {
    let mut tree = with_children();
    let relation = tree.build_relation("Bela", RelationKind::Father).unwrap();
    let err = relation
        .add_new(&mut tree, "Ida", Gender::Female, None)
        .unwrap_err();
    assert!(matches!(err, KinshipError::InvalidRelation(_)));
}

#[test]
fn test_sibling_added_through_sibling() {
    let mut tree = with_children();
    tree.build_relation("Che", RelationKind::Siblings)
        .unwrap()
        .add_new(&mut tree, "Ivy", Gender::Female, None)
        .unwrap();

    assert_eq!(query(&tree, "Bela", "siblings").unwrap(), "Che Ivy");
    assert_eq!(query(&tree, "Che", "sister").unwrap(), "Bela Ivy");
    assert_eq!(query(&tree, "Ivy", "father").unwrap(), "Abe");
}
