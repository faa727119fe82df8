//! Domain entities - Objects with identity and lifecycle

mod client;
mod payment;
mod service;
mod tariff;

pub use client::{Client, ClientKind};
pub use payment::PaymentRecord;
pub use service::{
    INTERNET_RATE_PER_MBPS, PHONE_RATE_PER_MINUTE, Service, ServiceKind, TV_RATE_PER_CHANNEL,
};
pub use tariff::{HOURLY_RATE, Tariff};
