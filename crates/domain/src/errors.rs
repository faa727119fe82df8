//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// A required text field was empty or whitespace-only
    #[error("Required field is blank: {0}")]
    BlankField(&'static str),

    /// Invalid email address format
    #[error("Invalid email address: {0}")]
    InvalidEmailAddress(String),

    /// A service or tariff quantity was negative
    #[error("Quantity must be non-negative, got {value}")]
    NegativeQuantity { value: i64 },

    /// Service removal was attempted on a client with no services
    #[error("Client has no services to remove")]
    NoServices,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_field_message() {
        let err = DomainError::BlankField("name");
        assert_eq!(err.to_string(), "Required field is blank: name");
    }

    #[test]
    fn invalid_email_message() {
        let err = DomainError::InvalidEmailAddress("nope".to_string());
        assert_eq!(err.to_string(), "Invalid email address: nope");
    }

    #[test]
    fn negative_quantity_message() {
        let err = DomainError::NegativeQuantity { value: -3 };
        assert_eq!(err.to_string(), "Quantity must be non-negative, got -3");
    }

    #[test]
    fn no_services_message() {
        let err = DomainError::NoServices;
        assert_eq!(err.to_string(), "Client has no services to remove");
    }
}
