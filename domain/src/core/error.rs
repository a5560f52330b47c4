//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid input: {0} is not an integer")]
    InvalidInput(String),

    #[error("Out of range: {0} does not fit in a 64-bit signed integer")]
    OutOfRange(String),

    #[error("Inexact input: float {0} is beyond 2^53 and may not be the integer written; give it as an integer or string")]
    InexactFloat(String),

    #[error("No candidates to evaluate")]
    EmptySuite,

    #[error("Iteration count must be at least 1")]
    InvalidIterations,

    #[error("Operation cancelled")]
    Cancelled,
}

impl DomainError {
    /// Check if this error represents a cancellation
    pub fn is_cancelled(&self) -> bool {
        matches!(self, DomainError::Cancelled)
    }

    /// Check if this error was caused by a candidate that could not be
    /// turned into an integer value.
    pub fn is_invalid_candidate(&self) -> bool {
        matches!(
            self,
            DomainError::InvalidInput(_)
                | DomainError::OutOfRange(_)
                | DomainError::InexactFloat(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cancelled_error_display() {
        let error = DomainError::Cancelled;
        assert_eq!(error.to_string(), "Operation cancelled");
    }

    #[test]
    fn test_invalid_input_display() {
        let error = DomainError::InvalidInput("\"abc\"".to_string());
        assert_eq!(error.to_string(), "Invalid input: \"abc\" is not an integer");
    }

    #[test]
    fn test_is_cancelled_check() {
        assert!(DomainError::Cancelled.is_cancelled());
        assert!(!DomainError::EmptySuite.is_cancelled());
        assert!(!DomainError::InvalidInput("x".to_string()).is_cancelled());
    }

    #[test]
    fn test_is_invalid_candidate() {
        assert!(DomainError::InvalidInput("x".to_string()).is_invalid_candidate());
        assert!(DomainError::OutOfRange("1e30".to_string()).is_invalid_candidate());
        assert!(DomainError::InexactFloat("1e17".to_string()).is_invalid_candidate());
        assert!(!DomainError::InvalidIterations.is_invalid_candidate());
    }
}
