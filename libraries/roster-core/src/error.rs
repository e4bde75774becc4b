/// Core error types for Roster
use crate::types::UserId;
use thiserror::Error;

/// Result type alias using `RosterError`
pub type Result<T> = std::result::Result<T, RosterError>;

/// Rejected request payload
///
/// The display string of each variant is the message returned to clients.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Create payload without a usable name
    #[error("Name is required and must be a non-empty string")]
    NameRequired,

    /// Create payload without a string email
    #[error("Email is required and must be a string")]
    EmailRequired,

    /// Email present but not shaped like `local@domain.tld`
    #[error("Invalid email format")]
    InvalidEmailFormat,

    /// Update payload with nothing to change
    #[error("At least one field (name or email) must be provided")]
    NoFieldsProvided,

    /// Update payload with a blank or non-string name
    #[error("Name must be a non-empty string")]
    InvalidName,

    /// Update payload with a non-string email
    #[error("Email must be a string")]
    EmailNotString,
}

/// Core error type for Roster
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RosterError {
    /// Malformed or missing input
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Another user already owns this email
    #[error("Email already exists")]
    EmailTaken(String),

    /// No user with this id
    #[error("User not found")]
    UserNotFound(UserId),
}

impl RosterError {
    /// Create a not found error
    pub fn not_found(id: &UserId) -> Self {
        Self::UserNotFound(id.clone())
    }

    /// Create an email conflict error
    pub fn email_taken(email: impl Into<String>) -> Self {
        Self::EmailTaken(email.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_are_client_facing() {
        assert_eq!(
            RosterError::from(ValidationError::NoFieldsProvided).to_string(),
            "At least one field (name or email) must be provided"
        );
        assert_eq!(
            RosterError::email_taken("ann@x.com").to_string(),
            "Email already exists"
        );
        assert_eq!(
            RosterError::not_found(&UserId::new("zzz")).to_string(),
            "User not found"
        );
    }
}
