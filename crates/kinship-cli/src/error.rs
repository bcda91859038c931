//! Error types for the CLI application.

use kinship_domain::KinshipError;
use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Family tree error
    #[error("{0}")]
    Domain(#[from] KinshipError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// A single command that could not be carried out.
///
/// `code` is what gets reported for the command: the domain error's own code,
/// or the add operation's failure code when a relation was rejected.
#[derive(Debug, Error)]
#[error("{code}: {source}")]
pub struct CommandFailure {
    /// Reported code, e.g. `PERSON_NOT_FOUND` or `CHILD_ADDITION_FAILED`
    pub code: &'static str,

    /// Underlying domain error
    pub source: KinshipError,
}

impl CommandFailure {
    /// Failure reported with the domain error's own code.
    pub fn new(source: KinshipError) -> Self {
        Self {
            code: source.code(),
            source,
        }
    }

    /// Failure reported with an operation-specific code.
    pub fn with_code(code: &'static str, source: KinshipError) -> Self {
        Self { code, source }
    }
}

impl From<KinshipError> for CommandFailure {
    fn from(source: KinshipError) -> Self {
        Self::new(source)
    }
}
