//! Kinship Domain Layer
//!
//! This crate contains the relationship resolution engine: the in-memory
//! family graph, the member entity with its biological and marital edges,
//! and the relation strategies that traverse the graph to answer queries or
//! attach new members.
//!
//! ## Key Concepts
//!
//! - **Member**: one person, with mother/father/spouse/children links
//! - **FamilyTree**: arena that owns every member, addressed by [`MemberId`]
//! - **Relation strategies**: one algorithm per [`RelationKind`], bound to a
//!   pivot member as a [`BoundRelation`]
//! - **Registry**: command tokens to strategies, see [`RelationRegistry`]
//! - **NONE**: an empty query result is [`KinshipError::NoResult`], never an
//!   empty success
//!
//! ## Architecture
//!
//! - No I/O; parsing and printing live in the CLI crate
//! - Links are handles into the arena, so cyclic family edges need no
//!   shared ownership
//! - Single-threaded, mutated strictly in sequence by one caller

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod gender;
pub mod member;
pub mod registry;
pub mod relations;
pub mod response;
pub mod tree;

// Re-exports for convenience
pub use error::{KinshipError, Result};
pub use gender::Gender;
pub use member::{Member, MemberId};
pub use registry::{AddOperation, ImpliedGender, QueryRelation, RelationRegistry};
pub use relations::{BoundRelation, RelationKind};
pub use tree::FamilyTree;
