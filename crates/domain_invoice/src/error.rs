//! Invoice domain errors

use core_kernel::InvoiceId;
use thiserror::Error;

use crate::draft::FieldError;

/// Errors raised by invoice operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvoiceError {
    #[error("invoice {0} is not archived")]
    NotArchived(InvoiceId),

    #[error("invoice {0} is posted; issue a credit note before editing")]
    EditLocked(InvoiceId),

    #[error("a credit note can only be requested for a saved invoice")]
    CreditNoteOnUnsaved,

    #[error("invalid invoice: {}", format_fields(.0))]
    Validation(Vec<FieldError>),
}

fn format_fields(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| format!("{}: {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join("; ")
}
