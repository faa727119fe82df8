//! Client registry - the ordered collection of all known clients
//!
//! The only process-wide state. Insertion order is preserved and clients are
//! addressed positionally; every mutation or snapshot pass holds the single
//! registry lock for its whole duration.

use domain::Client;
use parking_lot::{RwLock, RwLockReadGuard};
use tracing::debug;

use crate::error::ApplicationError;

const COLLECTION: &str = "client registry";

/// Ordered, positionally addressed collection of clients
#[derive(Default)]
pub struct ClientRegistry {
    clients: RwLock<Vec<Client>>,
}

impl std::fmt::Debug for ClientRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientRegistry")
            .field("len", &self.len())
            .finish_non_exhaustive()
    }
}

impl ClientRegistry {
    /// Create an empty registry
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a client and return its position
    pub fn add(&self, client: Client) -> usize {
        let mut clients = self.clients.write();
        clients.push(client);
        let index = clients.len() - 1;
        debug!(index, "Client added to registry");
        index
    }

    /// Remove and return the client at `index`
    ///
    /// # Errors
    ///
    /// Returns [`ApplicationError::OutOfRange`] when `index` is outside the
    /// registry bounds; the registry is left unchanged.
    pub fn remove_at(&self, index: usize) -> Result<Client, ApplicationError> {
        let mut clients = self.clients.write();
        if index >= clients.len() {
            return Err(ApplicationError::out_of_range(
                COLLECTION,
                index,
                clients.len(),
            ));
        }
        let removed = clients.remove(index);
        debug!(index, name = removed.name(), "Client removed from registry");
        Ok(removed)
    }

    /// Get a cloned snapshot of the client at `index`
    ///
    /// # Errors
    ///
    /// Returns [`ApplicationError::OutOfRange`] when `index` is outside the
    /// registry bounds.
    pub fn get(&self, index: usize) -> Result<Client, ApplicationError> {
        let clients = self.clients.read();
        clients
            .get(index)
            .cloned()
            .ok_or_else(|| ApplicationError::out_of_range(COLLECTION, index, clients.len()))
    }

    /// Number of registered clients
    pub fn len(&self) -> usize {
        self.clients.read().len()
    }

    /// Whether the registry holds no clients
    pub fn is_empty(&self) -> bool {
        self.clients.read().is_empty()
    }

    /// Cloned snapshot of all clients in insertion order
    ///
    /// A derived projection for display purposes, never a second source of
    /// truth.
    pub fn clients(&self) -> Vec<Client> {
        self.clients.read().clone()
    }

    /// Run a mutation against the client at `index` under the write lock
    ///
    /// # Errors
    ///
    /// Returns [`ApplicationError::OutOfRange`] when `index` is outside the
    /// registry bounds; `f` is not called in that case.
    pub fn with_client_mut<R>(
        &self,
        index: usize,
        f: impl FnOnce(&mut Client) -> R,
    ) -> Result<R, ApplicationError> {
        let mut clients = self.clients.write();
        let len = clients.len();
        let client = clients
            .get_mut(index)
            .ok_or_else(|| ApplicationError::out_of_range(COLLECTION, index, len))?;
        Ok(f(client))
    }

    /// Read lock over the underlying client list, for whole-registry folds
    pub(crate) fn read(&self) -> RwLockReadGuard<'_, Vec<Client>> {
        self.clients.read()
    }
}
