//! Edit-permission state machine
//!
//! "You must issue a credit note before changing a posted invoice's terms."
//! The rule is modeled as an explicit tagged state rather than a boolean
//! side channel, so an invoice that is both unsaved and credit-gated cannot
//! be represented.
//!
//! ```text
//! New ──────────────(save)──────────────▶ PostedLocked
//! PostedLocked ──(request credit note)──▶ PostedEditable
//! PostedEditable ──────(save edit)──────▶ PostedLocked
//! ```

use serde::{Deserialize, Serialize};

use core_kernel::InvoiceId;

use crate::error::InvoiceError;

/// Editability of one invoice within an editing session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EditSession {
    /// Draft that has never been persisted; always editable
    New,
    /// Persisted invoice, no credit note issued; every field read-only
    PostedLocked,
    /// Persisted invoice with a credit note issued; editable until saved
    PostedEditable,
}

impl EditSession {
    /// Session for a brand-new draft
    pub fn for_new_draft() -> Self {
        EditSession::New
    }

    /// Session for an already-persisted invoice
    pub fn for_posted() -> Self {
        EditSession::PostedLocked
    }

    /// Whether financial and identity fields accept changes
    pub fn can_edit(&self) -> bool {
        matches!(self, EditSession::New | EditSession::PostedEditable)
    }

    /// Unlocks editing after a credit note was issued
    ///
    /// Only persisted invoices can be gated; requesting a credit note for
    /// an unsaved draft is a programming error surfaced as a conflict.
    /// Idempotent on an already-unlocked session.
    pub fn credit_note_issued(&mut self) -> Result<(), InvoiceError> {
        match self {
            EditSession::New => Err(InvoiceError::CreditNoteOnUnsaved),
            EditSession::PostedLocked | EditSession::PostedEditable => {
                *self = EditSession::PostedEditable;
                Ok(())
            }
        }
    }

    /// Guard called before applying an edit to a persisted invoice
    pub fn ensure_editable(&self, id: InvoiceId) -> Result<(), InvoiceError> {
        if self.can_edit() {
            Ok(())
        } else {
            Err(InvoiceError::EditLocked(id))
        }
    }

    /// Transition after a successful save; posted invoices lock again
    pub fn saved(&mut self) {
        *self = EditSession::PostedLocked;
    }
}
