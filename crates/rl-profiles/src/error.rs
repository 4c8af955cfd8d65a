//! Error types for profile catalog operations.

use thiserror::Error;

/// Result type for profile catalog operations.
pub type ProfileResult<T> = Result<T, ProfileError>;

/// Errors raised while building or querying the profile catalog.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ProfileError {
    /// Requested id is not in the catalog and is not the "all" sentinel.
    #[error("Unknown profile: {id}")]
    UnknownProfile { id: String },

    /// Curve data failed validation at load. Fatal at startup.
    #[error("Invalid profile data for '{id}': {what}")]
    InvalidProfileData { id: String, what: String },
}

impl ProfileError {
    pub(crate) fn invalid(id: &str, what: impl Into<String>) -> Self {
        ProfileError::InvalidProfileData {
            id: id.to_string(),
            what: what.into(),
        }
    }
}
