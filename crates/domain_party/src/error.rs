//! Person domain errors

use thiserror::Error;

/// Errors raised by person operations. Conditions the store adapters
/// detect (missing records, linked invoices) travel as `PortError`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PartyError {
    #[error("invalid person: {0}")]
    Validation(String),
}
