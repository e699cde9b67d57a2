//! Error types for interest registration and storage.

use crate::interest::types::SelectionField;
use thiserror::Error;

/// Errors that can occur while registering or persisting an interest.
///
/// The matching resolvers themselves never fail: an interest with no matching
/// slot is a normal outcome, not an error.
#[derive(Debug, Error)]
pub enum InterestError {
    /// The form was submitted with an empty selection category
    #[error("No {field} selected")]
    EmptySelection { field: SelectionField },

    /// A selection value is not part of the reference list
    #[error("Unknown {field} value: {value}")]
    UnknownValue { field: SelectionField, value: String },

    /// The persistence collaborator failed
    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),
}

impl InterestError {
    /// Returns true if this error comes from form validation rather than the
    /// storage layer.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            InterestError::EmptySelection { .. } | InterestError::UnknownValue { .. }
        )
    }
}
