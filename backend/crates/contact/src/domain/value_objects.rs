//! Domain Value Objects
//!
//! Validated wrappers for contact-form input. Basic validation only -
//! the limits mirror what the frontend form enforces.

use crate::error::{ContactError, ContactResult};

/// Maximum email length (per RFC 5321)
const EMAIL_MAX_LENGTH: usize = 254;

/// Sender name, trimmed, 2-100 characters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactName(String);

impl ContactName {
    pub fn new(name: impl Into<String>) -> ContactResult<Self> {
        let name = name.into().trim().to_string();

        if name.chars().count() < 2 {
            return Err(ContactError::Validation(
                "Name must be at least 2 characters".to_string(),
            ));
        }
        if name.chars().count() > 100 {
            return Err(ContactError::Validation(
                "Name must be at most 100 characters".to_string(),
            ));
        }

        Ok(Self(name))
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_db(self) -> String {
        self.0
    }
}

impl std::fmt::Display for ContactName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Email address value object, trimmed and lowercased
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new email with validation
    pub fn new(email: impl Into<String>) -> ContactResult<Self> {
        let email = email.into().trim().to_lowercase();

        if email.is_empty() {
            return Err(ContactError::Validation("Email cannot be empty".to_string()));
        }

        if email.len() > EMAIL_MAX_LENGTH {
            return Err(ContactError::Validation(format!(
                "Email must be at most {} characters",
                EMAIL_MAX_LENGTH
            )));
        }

        if !Self::is_valid_format(&email) {
            return Err(ContactError::Validation("Invalid email format".to_string()));
        }

        Ok(Self(email))
    }

    /// Basic email format validation
    fn is_valid_format(email: &str) -> bool {
        // Must contain exactly one @
        let parts: Vec<&str> = email.split('@').collect();
        if parts.len() != 2 {
            return false;
        }

        let local = parts[0];
        let domain = parts[1];

        if local.is_empty() || local.len() > 64 {
            return false;
        }

        if domain.is_empty() || !domain.contains('.') {
            return false;
        }

        if !domain
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-')
        {
            return false;
        }

        if domain.starts_with('.') || domain.ends_with('.') {
            return false;
        }
        if domain.starts_with('-') || domain.ends_with('-') {
            return false;
        }

        true
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(email: impl Into<String>) -> Self {
        Self(email.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_db(self) -> String {
        self.0
    }
}

impl std::fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Message body, trimmed, 10-1000 characters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageBody(String);

impl MessageBody {
    pub fn new(body: impl Into<String>) -> ContactResult<Self> {
        let body = body.into().trim().to_string();

        if body.chars().count() < 10 {
            return Err(ContactError::Validation(
                "Message must be at least 10 characters".to_string(),
            ));
        }
        if body.chars().count() > 1000 {
            return Err(ContactError::Validation(
                "Message must be at most 1000 characters".to_string(),
            ));
        }

        Ok(Self(body))
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(body: impl Into<String>) -> Self {
        Self(body.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_db(self) -> String {
        self.0
    }
}

impl std::fmt::Display for MessageBody {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Processing status of a contact message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStatus {
    New,
    Read,
    Replied,
}

impl MessageStatus {
    pub const fn as_str(&self) -> &'static str {
        match self {
            MessageStatus::New => "new",
            MessageStatus::Read => "read",
            MessageStatus::Replied => "replied",
        }
    }
}

impl std::str::FromStr for MessageStatus {
    type Err = ContactError;

    fn from_str(s: &str) -> ContactResult<Self> {
        match s {
            "new" => Ok(MessageStatus::New),
            "read" => Ok(MessageStatus::Read),
            "replied" => Ok(MessageStatus::Replied),
            other => Err(ContactError::Validation(format!(
                "Unknown message status: {}",
                other
            ))),
        }
    }
}

impl std::fmt::Display for MessageStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_valid() {
        assert!(ContactName::new("Jo").is_ok());
        assert!(ContactName::new("  Sidra Hussain  ").is_ok());
        assert_eq!(ContactName::new(" Ada ").unwrap().as_str(), "Ada");
    }

    #[test]
    fn test_name_invalid() {
        assert!(ContactName::new("").is_err());
        assert!(ContactName::new("A").is_err());
        assert!(ContactName::new(" a ").is_err());
        assert!(ContactName::new("x".repeat(101)).is_err());
    }

    #[test]
    fn test_email_valid() {
        assert!(EmailAddress::new("user@example.com").is_ok());
        assert!(EmailAddress::new("user.name@example.co.jp").is_ok());
        assert!(EmailAddress::new("user+tag@example.com").is_ok());
    }

    #[test]
    fn test_email_invalid() {
        assert!(EmailAddress::new("").is_err());
        assert!(EmailAddress::new("userexample.com").is_err());
        assert!(EmailAddress::new("user@").is_err());
        assert!(EmailAddress::new("@example.com").is_err());
        assert!(EmailAddress::new("user@@example.com").is_err());
        assert!(EmailAddress::new("user@example").is_err());
    }

    #[test]
    fn test_email_normalization() {
        let email = EmailAddress::new("  User@Example.COM ").unwrap();
        assert_eq!(email.as_str(), "user@example.com");
    }

    #[test]
    fn test_message_body_bounds() {
        assert!(MessageBody::new("hello there").is_ok());
        assert!(MessageBody::new("too short").is_err());
        assert!(MessageBody::new("x".repeat(1001)).is_err());
        assert!(MessageBody::new(format!("  {}  ", "x".repeat(10))).is_ok());
    }

    #[test]
    fn test_message_status_roundtrip() {
        for status in [MessageStatus::New, MessageStatus::Read, MessageStatus::Replied] {
            assert_eq!(status.as_str().parse::<MessageStatus>().unwrap(), status);
        }
        assert!("archived".parse::<MessageStatus>().is_err());
    }
}
