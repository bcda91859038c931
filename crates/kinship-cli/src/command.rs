//! Parsing of input command lines.
//!
//! Two shapes are accepted:
//!
//! - `add_<relation> <relationMember> <newMember> [gender] [viaMember]`
//! - `<anything>_query <member> <relation>` or `get_relationship <member> <relation>`
//!
//! Any leading token that does not start with `add` is treated as a query.

use kinship_domain::{Gender, KinshipError, Result};

const ADD_PREFIX: &str = "add";

/// A command split into its fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Relate a new or existing member to another member
    Add {
        /// Operation token, e.g. `add_child`
        operation: String,
        /// Member the relation is anchored to
        relation_member: String,
        /// Member being added
        new_member: String,
        /// Explicit gender for the new member
        gender: Option<Gender>,
        /// Auxiliary member deciding where the new one attaches
        via_member: Option<String>,
    },

    /// Resolve a relation of a member
    Query {
        /// Member the query is anchored to
        member: String,
        /// Relation token, e.g. `maternal-aunt`
        relation: String,
    },
}

/// Whether a line should be skipped in batch input.
pub fn is_ignorable(line: &str) -> bool {
    let line = line.trim();
    line.is_empty() || line.contains("//")
}

/// Split a command line into a [`Command`].
pub fn parse_command(line: &str) -> Result<Command> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    let Some(head) = parts.first() else {
        return Err(KinshipError::InvalidInput("Empty command".to_string()));
    };

    let is_add = head
        .split('_')
        .next()
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case(ADD_PREFIX));

    if is_add {
        parse_add(&parts)
    } else {
        parse_query(&parts)
    }
}

fn parse_add(parts: &[&str]) -> Result<Command> {
    if parts.len() < 3 || parts.len() > 5 {
        return Err(KinshipError::InvalidInput(format!(
            "Usage: {} <relation member> <new member> [gender] [via member]",
            parts[0]
        )));
    }

    // The fourth field is a gender when it parses as one, otherwise the via-member
    let (gender, via_member) = match parts.get(3) {
        Some(token) => match Gender::parse(token) {
            Some(gender) => (Some(gender), parts.get(4)),
            None if parts.len() == 4 => (None, Some(token)),
            None => return Err(KinshipError::InvalidInput(format!("Invalid gender: {}", token))),
        },
        None => (None, None),
    };

    Ok(Command::Add {
        operation: parts[0].to_string(),
        relation_member: parts[1].to_string(),
        new_member: parts[2].to_string(),
        gender,
        via_member: via_member.map(|s| s.to_string()),
    })
}

fn parse_query(parts: &[&str]) -> Result<Command> {
    if parts.len() != 3 {
        return Err(KinshipError::InvalidInput(format!(
            "Usage: {} <member> <relation>",
            parts[0]
        )));
    }

    Ok(Command::Query {
        member: parts[1].to_string(),
        relation: parts[2].to_string(),
    })
}
