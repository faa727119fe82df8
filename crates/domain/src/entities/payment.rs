//! Payment record entity

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single booked payment
///
/// Records are appended to a client's payment history and never mutated or
/// removed afterwards. The amount is signed; a negative amount books a
/// charge-back and decreases the balance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentRecord {
    /// Booked amount, positive for payments, negative for corrections
    pub amount: Decimal,
    /// When the payment was booked
    pub recorded_at: DateTime<Utc>,
    /// Free-form booking text shown in the payment history
    pub description: String,
}

impl PaymentRecord {
    /// Create a payment record booked now
    #[must_use]
    pub fn new(amount: Decimal, description: impl Into<String>) -> Self {
        Self {
            amount,
            recorded_at: Utc::now(),
            description: description.into(),
        }
    }
}
