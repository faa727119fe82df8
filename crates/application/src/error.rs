//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
///
/// Every error is local to the single operation that raised it; nothing is
/// retried and no partial mutation is left behind.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Positional access outside the current bounds of a collection
    #[error("Index {index} is out of range for {what} of length {len}")]
    OutOfRange {
        what: &'static str,
        index: usize,
        len: usize,
    },
}

impl ApplicationError {
    /// Create an out-of-range error
    pub fn out_of_range(what: &'static str, index: usize, len: usize) -> Self {
        Self::OutOfRange { what, index, len }
    }
}
