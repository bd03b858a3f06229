//! Person store port
//!
//! Defines the operations the person domain needs from the record store.
//! Adapters live in `infra_store`; handlers and services receive the trait
//! object and never know which adapter backs it.

use async_trait::async_trait;

use core_kernel::{PersonId, PortError};

use crate::person::{Person, PersonDraft};

/// Store operations on persons
///
/// `delete` carries the linkage guard: a person referenced by any
/// non-archived invoice, as seller or buyer, must be rejected atomically,
/// with no partial effect on either the person or the invoices.
#[async_trait]
pub trait PartyStore: Send + Sync {
    /// Lists all persons in identifier order
    async fn list_persons(&self) -> Result<Vec<Person>, PortError>;

    /// Fetches a single person
    async fn get_person(&self, id: PersonId) -> Result<Person, PortError>;

    /// Creates a person, assigning a fresh identifier
    async fn create_person(&self, draft: PersonDraft) -> Result<Person, PortError>;

    /// Full-replace update at an existing identifier
    async fn update_person(&self, id: PersonId, draft: PersonDraft) -> Result<Person, PortError>;

    /// Deletes a person unless non-archived invoices still reference it
    async fn delete_person(&self, id: PersonId) -> Result<(), PortError>;
}
