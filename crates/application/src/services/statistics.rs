//! Registry statistics - derived, point-in-time aggregation
//!
//! The snapshot is recomputed from scratch on every call by folding over all
//! clients under a single read lock; no incremental counters are maintained
//! anywhere. Cost is O(total services + total payments).

use std::sync::Arc;

use chrono::{DateTime, Utc};
use domain::{ClientKind, ServiceKind};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::services::registry::ClientRegistry;

/// Point-in-time aggregate summary of the client registry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatisticsSnapshot {
    /// Number of registered clients
    pub total_clients: usize,
    /// Clients in the Home discount class
    pub home_clients: usize,
    /// Clients in the Business discount class
    pub business_clients: usize,
    /// Clients in the VIP discount class
    pub vip_clients: usize,
    /// Clients with an active connection
    pub active_clients: usize,
    /// Clients with a switched-off connection
    pub inactive_clients: usize,
    /// Subscribed internet services across all clients
    pub internet_subscriptions: usize,
    /// Subscribed TV services across all clients
    pub tv_subscriptions: usize,
    /// Subscribed phone services across all clients
    pub phone_subscriptions: usize,
    /// Sum of all booked payment amounts across all clients
    pub total_revenue: Decimal,
    /// Mean client balance, zero for an empty registry
    pub average_balance: Decimal,
    /// When this snapshot was taken
    pub generated_at: DateTime<Utc>,
}

/// Read-only statistics aggregation over a client registry
pub struct StatisticsService {
    registry: Arc<ClientRegistry>,
}

impl std::fmt::Debug for StatisticsService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StatisticsService").finish_non_exhaustive()
    }
}

impl StatisticsService {
    /// Create a statistics service over the given registry
    pub fn new(registry: Arc<ClientRegistry>) -> Self {
        Self { registry }
    }

    /// Compute a fresh snapshot of the registry
    ///
    /// Holds the registry read lock for the duration of the fold and never
    /// mutates the domain.
    pub fn snapshot(&self) -> StatisticsSnapshot {
        let clients = self.registry.read();

        let mut snapshot = StatisticsSnapshot {
            total_clients: clients.len(),
            home_clients: 0,
            business_clients: 0,
            vip_clients: 0,
            active_clients: 0,
            inactive_clients: 0,
            internet_subscriptions: 0,
            tv_subscriptions: 0,
            phone_subscriptions: 0,
            total_revenue: Decimal::ZERO,
            average_balance: Decimal::ZERO,
            generated_at: Utc::now(),
        };

        let mut balance_sum = Decimal::ZERO;

        for client in clients.iter() {
            match client.kind() {
                ClientKind::Home => snapshot.home_clients += 1,
                ClientKind::Business => snapshot.business_clients += 1,
                ClientKind::Vip => snapshot.vip_clients += 1,
            }

            if client.is_active() {
                snapshot.active_clients += 1;
            } else {
                snapshot.inactive_clients += 1;
            }

            for service in client.services() {
                match service.kind() {
                    ServiceKind::Internet => snapshot.internet_subscriptions += 1,
                    ServiceKind::Tv => snapshot.tv_subscriptions += 1,
                    ServiceKind::Phone => snapshot.phone_subscriptions += 1,
                }
            }

            for payment in client.payments() {
                snapshot.total_revenue += payment.amount;
            }

            balance_sum += client.balance();
        }

        if snapshot.total_clients > 0 {
            snapshot.average_balance = balance_sum / Decimal::from(snapshot.total_clients);
        }

        debug!(
            total_clients = snapshot.total_clients,
            active_clients = snapshot.active_clients,
            total_revenue = %snapshot.total_revenue,
            "Computed registry statistics"
        );

        snapshot
    }
}

#[cfg(test)]
mod tests {
    use domain::{Client, EmailAddress, Service};
    use rust_decimal_macros::dec;

    use super::*;

    fn client(kind: ClientKind) -> Client {
        let email = EmailAddress::new("stats@example.net").unwrap();
        Client::new("Stats Client", email, kind).unwrap()
    }

    fn service_over(registry: &Arc<ClientRegistry>) -> StatisticsService {
        StatisticsService::new(Arc::clone(registry))
    }

    #[test]
    fn empty_registry_yields_zeroed_snapshot() {
        let registry = Arc::new(ClientRegistry::new());
        let snapshot = service_over(&registry).snapshot();

        assert_eq!(snapshot.total_clients, 0);
        assert_eq!(snapshot.total_revenue, Decimal::ZERO);
        assert_eq!(snapshot.average_balance, Decimal::ZERO);
    }

    #[test]
    fn revenue_active_count_and_average_match_the_fold() {
        let registry = Arc::new(ClientRegistry::new());

        let mut home = client(ClientKind::Home);
        home.record_payment(dec!(100), "Top-up");
        registry.add(home);

        let mut business = client(ClientKind::Business);
        business.record_payment(dec!(50), "Top-up");
        business.record_payment(dec!(50), "Top-up");
        business.set_active(false);
        registry.add(business);

        let snapshot = service_over(&registry).snapshot();

        assert_eq!(snapshot.total_clients, 2);
        assert_eq!(snapshot.home_clients, 1);
        assert_eq!(snapshot.business_clients, 1);
        assert_eq!(snapshot.vip_clients, 0);
        assert_eq!(snapshot.active_clients, 1);
        assert_eq!(snapshot.inactive_clients, 1);
        assert_eq!(snapshot.total_revenue, dec!(200));
        assert_eq!(snapshot.average_balance, dec!(100));
    }

    #[test]
    fn subscriptions_are_counted_per_category() {
        let registry = Arc::new(ClientRegistry::new());

        let mut first = client(ClientKind::Home);
        first.add_service(Service::internet(100).unwrap());
        first.add_service(Service::tv(40).unwrap());
        registry.add(first);

        let mut second = client(ClientKind::Vip);
        second.add_service(Service::internet(500).unwrap());
        second.add_service(Service::phone(120).unwrap());
        registry.add(second);

        let snapshot = service_over(&registry).snapshot();

        assert_eq!(snapshot.internet_subscriptions, 2);
        assert_eq!(snapshot.tv_subscriptions, 1);
        assert_eq!(snapshot.phone_subscriptions, 1);
    }

    #[test]
    fn snapshot_reflects_mutations_made_after_a_previous_snapshot() {
        let registry = Arc::new(ClientRegistry::new());
        let stats = service_over(&registry);

        registry.add(client(ClientKind::Home));
        let before = stats.snapshot();

        registry
            .with_client_mut(0, |c| {
                c.record_payment(dec!(75), "Top-up");
            })
            .unwrap();
        let after = stats.snapshot();

        assert_eq!(before.total_revenue, Decimal::ZERO);
        assert_eq!(after.total_revenue, dec!(75));
        assert_eq!(after.average_balance, dec!(75));
    }

    #[test]
    fn negative_payments_reduce_revenue() {
        let registry = Arc::new(ClientRegistry::new());

        let mut c = client(ClientKind::Home);
        c.record_payment(dec!(100), "Top-up");
        c.record_payment(dec!(-40), "Charge-back");
        registry.add(c);

        let snapshot = service_over(&registry).snapshot();
        assert_eq!(snapshot.total_revenue, dec!(60));
    }

    #[test]
    fn snapshot_serializes_for_display_layers() {
        let registry = Arc::new(ClientRegistry::new());
        registry.add(client(ClientKind::Business));

        let snapshot = service_over(&registry).snapshot();
        let json = serde_json::to_string(&snapshot).unwrap();
        let parsed: StatisticsSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, snapshot);
    }
}
