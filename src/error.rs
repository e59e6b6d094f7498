use thiserror::Error;

/// Engine error types.
///
/// Short series are not errors: indicators answer those with [`crate::types::Computed`]
/// or a neutral sentinel. Everything here is either a caller bug (malformed input) or a
/// numeric failure inside a computation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    #[error("Series is empty")]
    EmptySeries,

    #[error("Non-finite {field} at index {index}")]
    NonFinite { field: &'static str, index: usize },

    #[error("Timestamps not strictly ascending at index {index}")]
    NonMonotonic { index: usize },

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Computation error: {0}")]
    Computation(String),
}

impl EngineError {
    /// Whether this error was caused by malformed caller input.
    pub fn is_validation(&self) -> bool {
        !matches!(self, EngineError::Computation(_))
    }
}

pub type Result<T> = std::result::Result<T, EngineError>;
