//! Client aggregate - a subscriber with services, payments and a balance

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{
    entities::{PaymentRecord, Service},
    errors::DomainError,
    value_objects::EmailAddress,
};

/// Discount class of a client
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClientKind {
    /// Private household connection
    Home,
    /// Company connection
    Business,
    /// Premium connection
    Vip,
}

impl ClientKind {
    /// Fixed discount percentage of the class
    #[must_use]
    pub const fn discount_percent(&self) -> u8 {
        match self {
            Self::Home => 5,
            Self::Business => 15,
            Self::Vip => 25,
        }
    }

    /// Get a human-readable label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Business => "Business",
            Self::Vip => "VIP",
        }
    }
}

impl std::fmt::Display for ClientKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A subscriber with contact data, subscribed services, payment history and
/// a running balance
///
/// The balance always equals the sum of all booked payment amounts. It is
/// accumulated when a payment is appended, never recomputed, so every append
/// path runs through [`Client::add_payment`]. Fields are private to keep that
/// invariant out of reach of callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    name: String,
    email: EmailAddress,
    services: Vec<Service>,
    payments: Vec<PaymentRecord>,
    balance: Decimal,
    active: bool,
    kind: ClientKind,
}

impl Client {
    /// Create an active client without services or payments
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::BlankField`] when `name` is empty or
    /// whitespace-only.
    pub fn new(
        name: impl Into<String>,
        email: EmailAddress,
        kind: ClientKind,
    ) -> Result<Self, DomainError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::BlankField("client name"));
        }

        Ok(Self {
            name,
            email,
            services: Vec::new(),
            payments: Vec::new(),
            balance: Decimal::ZERO,
            active: true,
            kind,
        })
    }

    /// Get the client name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the contact email address
    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Get the subscribed services in subscription order
    pub fn services(&self) -> &[Service] {
        &self.services
    }

    /// Get the payment history in booking order
    pub fn payments(&self) -> &[PaymentRecord] {
        &self.payments
    }

    /// Get the running balance
    pub fn balance(&self) -> Decimal {
        self.balance
    }

    /// Whether the connection is currently active
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Get the discount class
    pub fn kind(&self) -> ClientKind {
        self.kind
    }

    /// Fixed discount percentage of the client's class
    ///
    /// Pure function of the class, independent of any mutation.
    pub fn discount_percent(&self) -> u8 {
        self.kind.discount_percent()
    }

    /// Subscribe an additional service
    pub fn add_service(&mut self, service: Service) {
        self.services.push(service);
    }

    /// Unsubscribe the oldest service and return it
    ///
    /// Removes the first entry of the service list, not a caller-selected
    /// one.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::NoServices`] when no service is subscribed;
    /// the client is left unchanged.
    pub fn remove_first_service(&mut self) -> Result<Service, DomainError> {
        if self.services.is_empty() {
            return Err(DomainError::NoServices);
        }
        Ok(self.services.remove(0))
    }

    /// Append a payment record and add its amount to the balance
    pub fn add_payment(&mut self, payment: PaymentRecord) {
        self.balance += payment.amount;
        self.payments.push(payment);
    }

    /// Book a payment of `amount` and return the new balance
    ///
    /// A negative amount is accepted and decreases the balance.
    pub fn record_payment(&mut self, amount: Decimal, description: impl Into<String>) -> Decimal {
        self.add_payment(PaymentRecord::new(amount, description));
        self.balance
    }

    /// Switch the connection on or off
    ///
    /// No transition restrictions; the flag toggles freely.
    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    /// Change the client name
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::BlankField`] when `name` is empty or
    /// whitespace-only; the client is left unchanged.
    pub fn rename(&mut self, name: impl Into<String>) -> Result<(), DomainError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::BlankField("client name"));
        }
        self.name = name;
        Ok(())
    }

    /// Change the contact email address
    pub fn change_email(&mut self, email: EmailAddress) {
        self.email = email;
    }

    /// Sum of the monthly prices of all subscribed services
    ///
    /// Derived on demand, never stored.
    pub fn monthly_service_total(&self) -> Decimal {
        self.services.iter().map(Service::price).sum()
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    fn client(kind: ClientKind) -> Client {
        let email = EmailAddress::new("subscriber@example.net").unwrap();
        Client::new("Jo Lindner", email, kind).unwrap()
    }

    #[test]
    fn new_client_starts_active_and_empty() {
        let c = client(ClientKind::Home);
        assert!(c.is_active());
        assert!(c.services().is_empty());
        assert!(c.payments().is_empty());
        assert_eq!(c.balance(), Decimal::ZERO);
    }

    #[test]
    fn blank_name_is_rejected() {
        let email = EmailAddress::new("subscriber@example.net").unwrap();
        assert!(matches!(
            Client::new("  ", email, ClientKind::Home),
            Err(DomainError::BlankField("client name"))
        ));
    }

    #[test]
    fn discounts_are_fixed_per_class() {
        assert_eq!(client(ClientKind::Home).discount_percent(), 5);
        assert_eq!(client(ClientKind::Business).discount_percent(), 15);
        assert_eq!(client(ClientKind::Vip).discount_percent(), 25);
    }

    #[test]
    fn discount_is_unaffected_by_mutation() {
        let mut c = client(ClientKind::Business);
        c.add_service(Service::internet(100).unwrap());
        c.record_payment(dec!(42), "Top-up");
        c.set_active(false);
        c.rename("New Name").unwrap();
        assert_eq!(c.discount_percent(), 15);
    }

    #[test]
    fn payments_accumulate_into_balance() {
        let mut c = client(ClientKind::Home);
        assert_eq!(c.record_payment(dec!(100), "first"), dec!(100));
        assert_eq!(c.record_payment(dec!(23.45), "second"), dec!(123.45));
        assert_eq!(c.payments().len(), 2);
        assert_eq!(c.balance(), dec!(123.45));
    }

    #[test]
    fn negative_payment_decreases_balance() {
        let mut c = client(ClientKind::Home);
        c.record_payment(dec!(50), "Top-up");
        assert_eq!(c.record_payment(dec!(-20), "Charge-back"), dec!(30));
    }

    #[test]
    fn remove_first_service_takes_the_oldest() {
        let mut c = client(ClientKind::Home);
        c.add_service(Service::internet(100).unwrap());
        c.add_service(Service::tv(40).unwrap());
        let removed = c.remove_first_service().unwrap();
        assert_eq!(removed, Service::internet(100).unwrap());
        assert_eq!(c.services(), &[Service::tv(40).unwrap()]);
    }

    #[test]
    fn removing_without_services_fails_and_changes_nothing() {
        let mut c = client(ClientKind::Vip);
        c.record_payment(dec!(10), "Top-up");
        let before = c.clone();
        assert!(matches!(
            c.remove_first_service(),
            Err(DomainError::NoServices)
        ));
        assert_eq!(c, before);
    }

    #[test]
    fn failed_rename_changes_nothing() {
        let mut c = client(ClientKind::Home);
        assert!(c.rename("").is_err());
        assert_eq!(c.name(), "Jo Lindner");
    }

    #[test]
    fn active_flag_toggles_freely() {
        let mut c = client(ClientKind::Home);
        c.set_active(false);
        assert!(!c.is_active());
        c.set_active(true);
        assert!(c.is_active());
        c.set_active(true);
        assert!(c.is_active());
    }

    #[test]
    fn email_can_be_changed() {
        let mut c = client(ClientKind::Home);
        c.change_email(EmailAddress::new("new@example.net").unwrap());
        assert_eq!(c.email().as_str(), "new@example.net");
    }

    #[test]
    fn monthly_service_total_sums_prices() {
        let mut c = client(ClientKind::Home);
        c.add_service(Service::internet(100).unwrap());
        c.add_service(Service::tv(40).unwrap());
        assert_eq!(c.monthly_service_total(), dec!(310.0));
    }
}
