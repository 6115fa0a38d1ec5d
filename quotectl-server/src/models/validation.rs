//! Validation error types
//!
//! `Display` output is shown to the user as-is on the manage page.

use std::fmt;

/// Validation error for form input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Create submission with neither a phrase nor a joke
    EmptyEntry,

    /// Required field was absent or blank
    Missing { field: &'static str },

    /// Identifier is not a positive integer
    InvalidId { value: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyEntry => f.write_str("Please enter either a phrase or a joke."),
            Self::Missing { field } => write!(f, "Missing entry {}.", field),
            Self::InvalidId { .. } => f.write_str("Invalid entry id."),
        }
    }
}

impl std::error::Error for ValidationError {}
