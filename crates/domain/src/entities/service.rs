//! Subscribed service entity - Internet, TV and phone offerings
//!
//! A service is priced from a single construction-time quantity (connection
//! speed, channel count, included minutes) times a fixed per-unit rate.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// Monthly rate per Mbit/s of connection speed
pub const INTERNET_RATE_PER_MBPS: Decimal = dec!(2.5);

/// Monthly rate per TV channel
pub const TV_RATE_PER_CHANNEL: Decimal = dec!(1.5);

/// Monthly rate per included phone minute
pub const PHONE_RATE_PER_MINUTE: Decimal = dec!(0.8);

/// Service category, used as a statistics key and for display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceKind {
    Internet,
    Tv,
    Phone,
}

impl ServiceKind {
    /// Get a human-readable label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Internet => "Internet",
            Self::Tv => "TV",
            Self::Phone => "Phone",
        }
    }
}

impl std::fmt::Display for ServiceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A purchasable offering with a quantity-based monthly price
///
/// Immutable once constructed; the constructors reject negative quantities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Service {
    /// Internet access at a given downstream speed
    Internet { speed_mbps: i64 },
    /// Television package with a number of channels
    Tv { channels: i64 },
    /// Telephony with a block of included minutes
    Phone { minutes: i64 },
}

impl Service {
    /// Create an internet service
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::NegativeQuantity`] when `speed_mbps` is negative.
    pub fn internet(speed_mbps: i64) -> Result<Self, DomainError> {
        check_quantity(speed_mbps)?;
        Ok(Self::Internet { speed_mbps })
    }

    /// Create a TV service
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::NegativeQuantity`] when `channels` is negative.
    pub fn tv(channels: i64) -> Result<Self, DomainError> {
        check_quantity(channels)?;
        Ok(Self::Tv { channels })
    }

    /// Create a phone service
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::NegativeQuantity`] when `minutes` is negative.
    pub fn phone(minutes: i64) -> Result<Self, DomainError> {
        check_quantity(minutes)?;
        Ok(Self::Phone { minutes })
    }

    /// Get the display name of the service
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.kind().label()
    }

    /// Get the service category
    #[must_use]
    pub const fn kind(&self) -> ServiceKind {
        match self {
            Self::Internet { .. } => ServiceKind::Internet,
            Self::Tv { .. } => ServiceKind::Tv,
            Self::Phone { .. } => ServiceKind::Phone,
        }
    }

    /// Describe the service including its quantity
    #[must_use]
    pub fn description(&self) -> String {
        match self {
            Self::Internet { speed_mbps } => {
                format!("Internet access at {speed_mbps} Mbit/s")
            },
            Self::Tv { channels } => format!("TV package with {channels} channels"),
            Self::Phone { minutes } => format!("Phone plan with {minutes} included minutes"),
        }
    }

    /// Monthly price: quantity times the per-unit rate of the category
    #[must_use]
    pub fn price(&self) -> Decimal {
        match self {
            Self::Internet { speed_mbps } => Decimal::from(*speed_mbps) * INTERNET_RATE_PER_MBPS,
            Self::Tv { channels } => Decimal::from(*channels) * TV_RATE_PER_CHANNEL,
            Self::Phone { minutes } => Decimal::from(*minutes) * PHONE_RATE_PER_MINUTE,
        }
    }
}

fn check_quantity(value: i64) -> Result<(), DomainError> {
    if value < 0 {
        return Err(DomainError::NegativeQuantity { value });
    }
    Ok(())
}
