//! Tariff catalog - the ordered set of known tariffs
//!
//! Starts with the built-in hourly tariff; fixed tariffs are appended at
//! runtime. Tariffs are addressed positionally, like clients in the registry.

use domain::Tariff;
use parking_lot::RwLock;
use rust_decimal::Decimal;
use tracing::info;

use crate::error::ApplicationError;

const COLLECTION: &str = "tariff catalog";

/// Ordered, positionally addressed set of tariffs
pub struct TariffCatalog {
    tariffs: RwLock<Vec<Tariff>>,
}

impl std::fmt::Debug for TariffCatalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TariffCatalog")
            .field("len", &self.len())
            .finish_non_exhaustive()
    }
}

impl Default for TariffCatalog {
    fn default() -> Self {
        Self {
            tariffs: RwLock::new(vec![Tariff::Hourly]),
        }
    }
}

impl TariffCatalog {
    /// Create a catalog seeded with the built-in hourly tariff
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a runtime-created fixed tariff and return its position
    ///
    /// # Errors
    ///
    /// Returns [`domain::DomainError::BlankField`] when `name` is blank;
    /// the catalog is left unchanged.
    pub fn add_fixed(
        &self,
        name: impl Into<String>,
        monthly_price: Decimal,
    ) -> Result<usize, ApplicationError> {
        let tariff = Tariff::fixed(name, monthly_price)?;
        let name = tariff.name().to_string();

        let mut tariffs = self.tariffs.write();
        tariffs.push(tariff);
        let index = tariffs.len() - 1;

        info!(index, name, monthly_price = %monthly_price, "Fixed tariff added");
        Ok(index)
    }

    /// Price `quantity` under the tariff at `index`
    ///
    /// Fixed tariffs ignore the quantity; call sites pricing "one item"
    /// conventionally pass `1`.
    ///
    /// # Errors
    ///
    /// Returns [`ApplicationError::OutOfRange`] when `index` is outside the
    /// catalog bounds.
    pub fn calculate_price(&self, index: usize, quantity: i64) -> Result<Decimal, ApplicationError> {
        let tariffs = self.tariffs.read();
        let tariff = tariffs
            .get(index)
            .ok_or_else(|| ApplicationError::out_of_range(COLLECTION, index, tariffs.len()))?;
        Ok(tariff.calculate_price(quantity))
    }

    /// Get a cloned snapshot of the tariff at `index`
    ///
    /// # Errors
    ///
    /// Returns [`ApplicationError::OutOfRange`] when `index` is outside the
    /// catalog bounds.
    pub fn get(&self, index: usize) -> Result<Tariff, ApplicationError> {
        let tariffs = self.tariffs.read();
        tariffs
            .get(index)
            .cloned()
            .ok_or_else(|| ApplicationError::out_of_range(COLLECTION, index, tariffs.len()))
    }

    /// Number of known tariffs
    pub fn len(&self) -> usize {
        self.tariffs.read().len()
    }

    /// Whether the catalog is empty (never the case after construction)
    pub fn is_empty(&self) -> bool {
        self.tariffs.read().is_empty()
    }

    /// Cloned snapshot of all tariffs in catalog order
    pub fn tariffs(&self) -> Vec<Tariff> {
        self.tariffs.read().clone()
    }
}
