//! Error types for srs-core.

use thiserror::Error;

/// Result type alias using SrsError.
pub type Result<T> = std::result::Result<T, SrsError>;

/// Errors raised before any scheduling computation takes place.
#[derive(Debug, Error, PartialEq)]
pub enum SrsError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("invalid state: {0}")]
    InvalidState(String),
}

impl SrsError {
    pub(crate) fn rating_out_of_range(value: impl std::fmt::Display) -> Self {
        Self::Validation(format!("rating must be an integer in [0, 5], got {value}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_validation() {
        let error = SrsError::rating_out_of_range(7);
        assert_eq!(
            error.to_string(),
            "validation error: rating must be an integer in [0, 5], got 7"
        );
    }

    #[test]
    fn test_error_display_invalid_state() {
        let error = SrsError::InvalidState("interval -1 is negative".to_string());
        assert_eq!(error.to_string(), "invalid state: interval -1 is negative");
    }
}
