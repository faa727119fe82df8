//! Tariff entity - named pricing rules
//!
//! A tariff prices a quantity independently of any particular client's
//! services. The hourly tariff is built in; fixed tariffs are created at
//! runtime and appended to the catalog.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// Price per hour of the built-in hourly tariff
pub const HOURLY_RATE: Decimal = dec!(15);

/// A named pricing rule
///
/// Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Tariff {
    /// Pay-per-hour access, priced at [`HOURLY_RATE`] per hour
    Hourly,
    /// Flat monthly subscription under a runtime-chosen name
    Fixed { name: String, monthly_price: Decimal },
}

impl Tariff {
    /// Create a fixed tariff with a flat monthly price
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::BlankField`] when `name` is empty or
    /// whitespace-only.
    pub fn fixed(name: impl Into<String>, monthly_price: Decimal) -> Result<Self, DomainError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::BlankField("tariff name"));
        }
        Ok(Self::Fixed {
            name,
            monthly_price,
        })
    }

    /// Get the display name of the tariff
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Hourly => "Hourly",
            Self::Fixed { name, .. } => name,
        }
    }

    /// Price the given quantity under this tariff
    ///
    /// For [`Tariff::Hourly`] the quantity is an hour count and the result is
    /// `quantity * 15`. [`Tariff::Fixed`] is constant in its argument: the
    /// flat monthly price is returned unchanged, and per-item call sites
    /// conventionally pass a quantity of `1`.
    #[must_use]
    pub fn calculate_price(&self, quantity: i64) -> Decimal {
        match self {
            Self::Hourly => Decimal::from(quantity) * HOURLY_RATE,
            Self::Fixed { monthly_price, .. } => *monthly_price,
        }
    }
}

impl std::fmt::Display for Tariff {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hourly_price_is_hours_times_rate() {
        assert_eq!(Tariff::Hourly.calculate_price(0), Decimal::ZERO);
        assert_eq!(Tariff::Hourly.calculate_price(1), dec!(15));
        assert_eq!(Tariff::Hourly.calculate_price(24), dec!(360));
    }

    #[test]
    fn fixed_price_ignores_quantity() {
        let tariff = Tariff::fixed("Family Flat", dec!(49.90)).unwrap();
        assert_eq!(tariff.calculate_price(1), dec!(49.90));
        assert_eq!(tariff.calculate_price(0), dec!(49.90));
        assert_eq!(tariff.calculate_price(1000), dec!(49.90));
    }

    #[test]
    fn blank_fixed_tariff_name_is_rejected() {
        assert!(matches!(
            Tariff::fixed("   ", dec!(10)),
            Err(DomainError::BlankField("tariff name"))
        ));
    }

    #[test]
    fn names_are_exposed_for_display() {
        assert_eq!(Tariff::Hourly.name(), "Hourly");
        let tariff = Tariff::fixed("Student", dec!(19.90)).unwrap();
        assert_eq!(tariff.name(), "Student");
        assert_eq!(tariff.to_string(), "Student");
    }

    #[test]
    fn serde_roundtrip_keeps_price() {
        let tariff = Tariff::fixed("Office", dec!(99)).unwrap();
        let json = serde_json::to_string(&tariff).unwrap();
        let parsed: Tariff = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, tariff);
    }
}
