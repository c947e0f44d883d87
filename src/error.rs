use crate::value::Kind;
use thiserror::Error;

/// Errors returned by the strict `require_*` accessors
///
/// The two variants separate a usage error at the call site from a bundle
/// whose contents disagree with what the caller expects.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequireError {
    /// The requested key does not exist in the bundle
    #[error("Bundle has no key {key}")]
    Argument { key: String },
    /// The key exists but holds a value of a different kind
    #[error("Wrong type found in Bundle for key {key}: expected {expected}, found {found}")]
    State {
        key: String,
        expected: Kind,
        found: Kind,
    },
}

impl RequireError {
    /// Returns true for the missing-key case
    pub fn is_argument(&self) -> bool {
        matches!(self, RequireError::Argument { .. })
    }

    /// Returns true for the wrong-kind case
    pub fn is_state(&self) -> bool {
        matches!(self, RequireError::State { .. })
    }

    /// The key the failed lookup was made with
    pub fn key(&self) -> &str {
        match self {
            RequireError::Argument { key } | RequireError::State { key, .. } => key,
        }
    }
}

/// Result alias for strict accessors
pub type RequireResult<T> = Result<T, RequireError>;
