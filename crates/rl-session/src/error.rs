//! Error types for session operations.

use rl_profiles::ProfileError;
use thiserror::Error;

/// Errors encountered while acquiring samples or driving a session.
#[derive(Error, Debug)]
pub enum SessionError {
    /// A sensor line could not be parsed as a temperature. The sample is
    /// skipped; the session continues.
    #[error("Malformed reading: {raw:?}")]
    MalformedReading { raw: String },

    /// The sensor transport could not be opened. Triggers demo fallback.
    #[error("Could not open transport {port}: {message}")]
    ConnectFailure { port: String, message: String },

    /// The transport failed after it was opened.
    #[error("Transport error: {message}")]
    Transport { message: String },

    #[error(transparent)]
    Profile(#[from] ProfileError),

    #[error("Invalid configuration: {what}")]
    Config { what: String },

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type SessionResult<T> = Result<T, SessionError>;

impl SessionError {
    /// True for errors the session loop reports and then keeps running through.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            SessionError::MalformedReading { .. }
                | SessionError::Transport { .. }
                | SessionError::Profile(ProfileError::UnknownProfile { .. })
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_is_recoverable() {
        let err = SessionError::MalformedReading { raw: "abc".into() };
        assert!(err.is_recoverable());
        assert_eq!(err.to_string(), "Malformed reading: \"abc\"");
    }

    #[test]
    fn invalid_profile_data_is_fatal() {
        let err = SessionError::from(ProfileError::InvalidProfileData {
            id: "x".into(),
            what: "curve has no points".into(),
        });
        assert!(!err.is_recoverable());
    }
}
