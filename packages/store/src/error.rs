//! Error types for the account registry and the user data store.
//!
//! [`ValidationError`] and [`AuthError`] are user-facing: their `Display` text is
//! shown verbatim under the sign-in form. [`StoreError`] covers writes that the
//! backing key-value store refused. Reads never fail; see [`crate::kv`].

use thiserror::Error;

/// Rejected registration input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter a valid email")]
    InvalidEmail,

    #[error("Password must be at least {min} characters")]
    PasswordTooShort { min: usize },

    #[error("This email is already registered")]
    EmailTaken,
}

/// Failed sign-in. Does not say which field was wrong.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("Incorrect email or password")]
    IncorrectCredentials,
}

/// A write to the key-value store did not go through.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to encode value for {key}: {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to write {key}: {message}")]
    Write { key: String, message: String },

    #[error("storage is not available")]
    Unavailable,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Umbrella error returned by [`crate::Accounts`] and [`crate::UserDataStore`].
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl Error {
    /// Whether the error came from user input (and should be shown inline)
    /// rather than from the storage backend.
    pub fn is_user_facing(&self) -> bool {
        matches!(self, Error::Validation(_) | Error::Auth(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_facing_messages() {
        let err: Error = ValidationError::PasswordTooShort { min: 6 }.into();
        assert!(err.is_user_facing());
        assert_eq!(err.to_string(), "Password must be at least 6 characters");

        let err: Error = AuthError::IncorrectCredentials.into();
        assert!(err.is_user_facing());
        assert_eq!(err.to_string(), "Incorrect email or password");

        let err: Error = StoreError::Unavailable.into();
        assert!(!err.is_user_facing());
    }
}
