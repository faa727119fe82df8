//! Email address value object
//!
//! Contact email of a client. Input is trimmed, lowercased and checked for a
//! valid format before the value is accepted.
//!
//! # Examples
//!
//! ```
//! use domain::EmailAddress;
//!
//! let email = EmailAddress::new("Anna@Example.COM").unwrap();
//! assert_eq!(email.as_str(), "anna@example.com");
//! assert!(EmailAddress::new("not-an-address").is_err());
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::errors::DomainError;

/// A validated, normalized email address
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Validate)]
#[serde(transparent)]
pub struct EmailAddress {
    #[validate(email)]
    value: String,
}

impl EmailAddress {
    /// Create a new email address, validating the format
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidEmailAddress`] when the input is not a
    /// well-formed address.
    pub fn new(email: impl Into<String>) -> Result<Self, DomainError> {
        let raw = email.into();
        let candidate = Self {
            value: raw.trim().to_lowercase(),
        };

        if candidate.validate().is_err() {
            return Err(DomainError::InvalidEmailAddress(raw));
        }

        Ok(candidate)
    }

    /// Get the email address as a string slice
    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl TryFrom<String> for EmailAddress {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for EmailAddress {
    type Error = DomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_address_is_accepted() {
        let email = EmailAddress::new("kunde@provider.net").unwrap();
        assert_eq!(email.as_str(), "kunde@provider.net");
    }

    #[test]
    fn address_is_trimmed_and_lowercased() {
        let email = EmailAddress::new("  Kunde@Provider.NET ").unwrap();
        assert_eq!(email.as_str(), "kunde@provider.net");
    }

    #[test]
    fn malformed_addresses_are_rejected() {
        for input in ["", "plainword", "@no-local.net", "no-at.net"] {
            let result = EmailAddress::new(input);
            assert!(matches!(
                result,
                Err(DomainError::InvalidEmailAddress(_))
            ));
        }
    }

    #[test]
    fn rejection_reports_original_input() {
        let err = EmailAddress::new("BROKEN").unwrap_err();
        assert_eq!(err.to_string(), "Invalid email address: BROKEN");
    }

    #[test]
    fn display_matches_as_str() {
        let email = EmailAddress::new("a@b.example").unwrap();
        assert_eq!(email.to_string(), email.as_str());
    }

    #[test]
    fn try_from_conversions() {
        let from_str: EmailAddress = "x@y.example".try_into().unwrap();
        let from_string: EmailAddress = "x@y.example".to_string().try_into().unwrap();
        assert_eq!(from_str, from_string);
    }

    #[test]
    fn serde_is_transparent() {
        let email = EmailAddress::new("x@y.example").unwrap();
        let json = serde_json::to_string(&email).unwrap();
        assert_eq!(json, "\"x@y.example\"");
        let parsed: EmailAddress = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, email);
    }
}
