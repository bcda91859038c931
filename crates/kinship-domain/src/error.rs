//! Error types for family tree operations

use thiserror::Error;

/// Result type alias for domain operations.
pub type Result<T> = std::result::Result<T, KinshipError>;

/// Errors raised by the family tree and its relation strategies.
///
/// Every variant maps to a stable identifying code (see [`KinshipError::code`])
/// which callers report per command.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KinshipError {
    /// Referenced member name does not exist in the tree
    #[error("Member not found: {0}")]
    NotFound(String),

    /// Malformed construction arguments
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A relation-specific precondition failed
    #[error("Invalid relation: {0}")]
    InvalidRelation(String),

    /// A well-formed query matched no members
    #[error("No matching members")]
    NoResult,

    /// Unknown relation or operation token
    #[error("Unknown relation or operation: {0}")]
    Configuration(String),
}

impl KinshipError {
    /// Identifying code reported to the user for this error.
    pub fn code(&self) -> &'static str {
        match self {
            KinshipError::NotFound(_) => "PERSON_NOT_FOUND",
            KinshipError::InvalidInput(_) => "INVALID_INPUT",
            KinshipError::InvalidRelation(_) => "INVALID_RELATION",
            KinshipError::NoResult => "NONE",
            KinshipError::Configuration(_) => "CONFIGURATION_ERROR",
        }
    }

    /// Whether this error is the "NONE" outcome of an empty query.
    pub fn is_no_result(&self) -> bool {
        matches!(self, KinshipError::NoResult)
    }
}
