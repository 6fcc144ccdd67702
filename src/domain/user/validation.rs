//! User payload constraint checks

use thiserror::Error;

/// Errors that can occur during user validation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum UserValidationError {
    #[error("Username cannot be empty")]
    EmptyUsername,

    #[error("Username exceeds maximum length of {0} characters")]
    UsernameTooLong(usize),

    #[error("Username must start with a capital letter")]
    UsernameNotCapitalized,
}

const MAX_USERNAME_LENGTH: usize = 20;

/// Validate a username
///
/// Rules:
/// - Cannot be empty
/// - Maximum 20 characters
/// - Must start with an uppercase letter
///
/// The first violated rule is returned; callers surface that single
/// message to the client.
pub fn validate_username(username: &str) -> Result<(), UserValidationError> {
    if username.is_empty() {
        return Err(UserValidationError::EmptyUsername);
    }

    if username.chars().count() > MAX_USERNAME_LENGTH {
        return Err(UserValidationError::UsernameTooLong(MAX_USERNAME_LENGTH));
    }

    let first = username.chars().next().unwrap_or_default();

    if !first.is_uppercase() {
        return Err(UserValidationError::UsernameNotCapitalized);
    }

    Ok(())
}
