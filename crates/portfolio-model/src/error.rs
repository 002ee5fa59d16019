//! Error types for the record models.

use thiserror::Error;

/// A specialized Result type for model operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when building model values from text.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Error {
    /// The value is not one of the known project statuses.
    #[error("unknown project status '{value}' (expected one of: {expected})")]
    UnknownStatus {
        /// The rejected input.
        value: String,
        /// Comma-separated list of accepted values.
        expected: String,
    },
}

impl Error {
    /// Creates an unknown status error listing every accepted status.
    pub fn unknown_status(value: impl Into<String>) -> Self {
        let expected = crate::models::ProjectStatus::ALL
            .iter()
            .map(|s| s.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        Error::UnknownStatus {
            value: value.into(),
            expected,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_status_lists_expected_values() {
        let err = Error::unknown_status("Paused");
        assert_eq!(
            err.to_string(),
            "unknown project status 'Paused' (expected one of: Planning, Active, On Hold, Done, Cancelled)"
        );
    }
}
