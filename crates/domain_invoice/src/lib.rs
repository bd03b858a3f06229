//! Invoice domain
//!
//! Governs the invoice lifecycle: creation, soft-delete archiving with
//! restore, and the credit-note gate that posted invoices must pass before
//! their terms may change. Also owns draft validation (date and amount
//! normalization happen here, before anything reaches a store) and the
//! pure listing filter.
//!
//! # Lifecycle
//!
//! Storage state is `Active | Archived`. Editability is a separate,
//! explicit state machine ([`lifecycle::EditSession`]): a draft that has
//! never been persisted is always editable, a posted invoice is locked
//! until a credit note has been issued for it.

pub mod credit;
pub mod draft;
pub mod error;
pub mod filter;
pub mod invoice;
pub mod lifecycle;
pub mod ports;

pub use credit::credit_note_for;
pub use draft::{FieldError, InvoiceDraft};
pub use error::InvoiceError;
pub use filter::InvoiceFilter;
pub use invoice::{Invoice, InvoiceFields};
pub use lifecycle::EditSession;
pub use ports::InvoiceStore;
