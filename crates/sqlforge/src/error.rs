//! Error types for sqlforge

use thiserror::Error;

/// Result type alias for builder operations
pub type BuilderResult<T> = Result<T, BuilderError>;

/// Error types for statement construction
///
/// Errors surface synchronously from the facet call that detected them.
/// A failed call may leave the buffer and parameter map partially mutated,
/// so a builder must be discarded after the first error.
#[derive(Debug, Error)]
pub enum BuilderError {
    /// A parameter was registered twice under the same formatted name
    #[error("duplicate parameter name: {0}")]
    DuplicateParameter(String),

    /// An insert supplied fewer values than the active column list
    #[error("number of insert values ({provided}) does not match number of insert columns ({expected})")]
    InsertArityMismatch { expected: usize, provided: usize },

    /// A placeholder in the statement text has no bound parameter
    #[error("placeholder {0} has no bound parameter")]
    UnboundPlaceholder(String),

    /// A bound parameter is never referenced in the statement text
    #[error("parameter {0} is never referenced in the statement text")]
    UnusedParameter(String),
}

impl BuilderError {
    /// Check if this is a duplicate parameter error
    pub fn is_duplicate_parameter(&self) -> bool {
        matches!(self, Self::DuplicateParameter(_))
    }

    /// Check if this is an insert arity mismatch
    pub fn is_arity_mismatch(&self) -> bool {
        matches!(self, Self::InsertArityMismatch { .. })
    }
}
