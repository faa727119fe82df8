//! Client service - the facade the presentation layer calls
//!
//! All operations are synchronous, positional and atomic: inputs are
//! validated through the domain constructors before any state changes, so an
//! error never leaves a half-applied mutation behind.

use std::sync::Arc;

use domain::{Client, ClientKind, EmailAddress, Service};
use rust_decimal::Decimal;
use tracing::{info, instrument};

use crate::{error::ApplicationError, services::registry::ClientRegistry};

/// Use-case facade over the client registry
pub struct ClientService {
    registry: Arc<ClientRegistry>,
}

impl std::fmt::Debug for ClientService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientService").finish_non_exhaustive()
    }
}

impl ClientService {
    /// Create a new client service over the given registry
    pub fn new(registry: Arc<ClientRegistry>) -> Self {
        Self { registry }
    }

    /// Create a client and register it, returning its position
    ///
    /// # Errors
    ///
    /// Returns a domain error when the name is blank or the email address is
    /// malformed; nothing is registered in that case.
    #[instrument(skip(self))]
    pub fn create_client(
        &self,
        name: &str,
        email: &str,
        kind: ClientKind,
    ) -> Result<usize, ApplicationError> {
        let email = EmailAddress::new(email)?;
        let client = Client::new(name, email, kind)?;
        let index = self.registry.add(client);

        info!(index, kind = %kind, "Client registered");
        Ok(index)
    }

    /// Remove the client at `index` and return it
    #[instrument(skip(self))]
    pub fn remove_client(&self, index: usize) -> Result<Client, ApplicationError> {
        let removed = self.registry.remove_at(index)?;
        info!(index, name = removed.name(), "Client deregistered");
        Ok(removed)
    }

    /// Subscribe `service` for the client at `index`
    #[instrument(skip(self, service))]
    pub fn add_service(&self, index: usize, service: Service) -> Result<(), ApplicationError> {
        let name = service.name();
        self.registry
            .with_client_mut(index, |client| client.add_service(service))?;
        info!(index, service = name, "Service subscribed");
        Ok(())
    }

    /// Unsubscribe the oldest service of the client at `index`
    ///
    /// # Errors
    ///
    /// Out-of-range positions and clients without services are rejected; the
    /// client is left unchanged.
    #[instrument(skip(self))]
    pub fn remove_first_service(&self, index: usize) -> Result<Service, ApplicationError> {
        let removed = self
            .registry
            .with_client_mut(index, Client::remove_first_service)??;
        info!(index, service = removed.name(), "Service unsubscribed");
        Ok(removed)
    }

    /// Book a payment for the client at `index` and return the new balance
    ///
    /// Negative amounts are accepted and decrease the balance.
    #[instrument(skip(self, description))]
    pub fn record_payment(
        &self,
        index: usize,
        amount: Decimal,
        description: impl Into<String>,
    ) -> Result<Decimal, ApplicationError> {
        let balance = self
            .registry
            .with_client_mut(index, |client| client.record_payment(amount, description))?;
        info!(index, amount = %amount, balance = %balance, "Payment booked");
        Ok(balance)
    }

    /// Switch the connection of the client at `index` on or off
    #[instrument(skip(self))]
    pub fn set_active(&self, index: usize, active: bool) -> Result<(), ApplicationError> {
        self.registry
            .with_client_mut(index, |client| client.set_active(active))?;
        info!(index, active, "Client connection toggled");
        Ok(())
    }

    /// Rename the client at `index`
    #[instrument(skip(self, name))]
    pub fn rename(&self, index: usize, name: &str) -> Result<(), ApplicationError> {
        self.registry
            .with_client_mut(index, |client| client.rename(name))??;
        info!(index, "Client renamed");
        Ok(())
    }

    /// Change the email address of the client at `index`
    #[instrument(skip(self, email))]
    pub fn change_email(&self, index: usize, email: &str) -> Result<(), ApplicationError> {
        let email = EmailAddress::new(email)?;
        self.registry
            .with_client_mut(index, |client| client.change_email(email))?;
        info!(index, "Client email changed");
        Ok(())
    }
}
