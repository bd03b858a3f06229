//! Invoice store port
//!
//! Covers every operation the invoice side of the system needs from the
//! record store, including the statistics break-downs the dashboard
//! consumes. Adapters live in `infra_store`.
//!
//! Atomicity of each operation is the store's concern: callers never hold
//! a lock or transaction across calls, and a failed call leaves prior state
//! unchanged.

use async_trait::async_trait;

use core_kernel::{InvoiceId, PortError};
use domain_statistics::{CompanyFigures, GlobalSummary};

use crate::filter::InvoiceFilter;
use crate::invoice::{Invoice, InvoiceFields};

/// Store operations on invoices
#[async_trait]
pub trait InvoiceStore: Send + Sync {
    /// Lists non-archived invoices matching the filter, in identifier order
    async fn list_invoices(&self, filter: &InvoiceFilter) -> Result<Vec<Invoice>, PortError>;

    /// Lists archived invoices in identifier order
    async fn list_archived(&self) -> Result<Vec<Invoice>, PortError>;

    /// Fetches a single invoice, archived or not
    async fn get_invoice(&self, id: InvoiceId) -> Result<Invoice, PortError>;

    /// Creates an active invoice; seller and buyer must resolve and the
    /// number must be unique within the active set
    async fn create_invoice(&self, fields: InvoiceFields) -> Result<Invoice, PortError>;

    /// Full-replace update at an existing identifier
    ///
    /// Rejected with a conflict while the invoice is posted and no credit
    /// note has been issued for it since the last save.
    async fn update_invoice(
        &self,
        id: InvoiceId,
        fields: InvoiceFields,
    ) -> Result<Invoice, PortError>;

    /// Soft delete
    async fn archive_invoice(&self, id: InvoiceId) -> Result<(), PortError>;

    /// Returns an archived invoice to the active set
    async fn restore_invoice(&self, id: InvoiceId) -> Result<Invoice, PortError>;

    /// Creates the corrective record for an invoice and unlocks editing of
    /// the source; returns the new credit note
    async fn issue_credit_note(&self, id: InvoiceId) -> Result<Invoice, PortError>;

    /// Distinct product names over the active set, sorted
    async fn product_names(&self) -> Result<Vec<String>, PortError>;

    /// Non-archived invoices sold by persons with the identification number
    async fn sales_by_identification(&self, identification: &str)
        -> Result<Vec<Invoice>, PortError>;

    /// Non-archived invoices bought by persons with the identification
    /// number
    async fn purchases_by_identification(
        &self,
        identification: &str,
    ) -> Result<Vec<Invoice>, PortError>;

    /// Global count and sums, optionally counting archived invoices
    async fn global_summary(&self, include_archived: bool) -> Result<GlobalSummary, PortError>;

    /// Per-person yearly revenue/expense break-down over non-archived
    /// invoices, in person order
    async fn company_figures(&self) -> Result<Vec<CompanyFigures>, PortError>;
}
