//! In-memory store adapter
//!
//! One `RwLock` over the whole state keeps every operation atomic, which
//! is exactly the guarantee the ports promise: the linked-invoice check on
//! person deletion and the deletion itself happen under the same write
//! lock, so no partial effect is observable.

use std::collections::{BTreeMap, HashMap};

use async_trait::async_trait;
use chrono::{Datelike, Utc};
use rust_decimal::Decimal;
use tokio::sync::RwLock;

use core_kernel::{InvoiceId, PersonId, PortError};
use domain_invoice::{
    credit_note_for, EditSession, Invoice, InvoiceFields, InvoiceFilter, InvoiceStore,
};
use domain_party::{PartyStore, Person, PersonDraft};
use domain_statistics::{CompanyFigures, GlobalSummary};

#[derive(Default)]
struct State {
    persons: BTreeMap<i64, Person>,
    invoices: BTreeMap<i64, Invoice>,
    /// Edit gate per posted invoice; absent means locked
    sessions: HashMap<i64, EditSession>,
    next_person_id: i64,
    next_invoice_id: i64,
}

impl State {
    fn next_person_id(&mut self) -> PersonId {
        self.next_person_id += 1;
        PersonId::new(self.next_person_id)
    }

    fn next_invoice_id(&mut self) -> InvoiceId {
        self.next_invoice_id += 1;
        InvoiceId::new(self.next_invoice_id)
    }

    fn identification_of(&self, id: PersonId) -> &str {
        self.persons
            .get(&id.value())
            .map(|p| p.identification_number.as_str())
            .unwrap_or("")
    }

    fn require_person(&self, id: PersonId) -> Result<&Person, PortError> {
        self.persons
            .get(&id.value())
            .ok_or_else(|| PortError::not_found("person", id))
    }

    fn check_parties(&self, fields: &InvoiceFields) -> Result<(), PortError> {
        if !self.persons.contains_key(&fields.seller.value()) {
            return Err(PortError::validation(format!(
                "seller {} does not resolve to a person",
                fields.seller
            )));
        }
        if !self.persons.contains_key(&fields.buyer.value()) {
            return Err(PortError::validation(format!(
                "buyer {} does not resolve to a person",
                fields.buyer
            )));
        }
        Ok(())
    }

    fn active_number_taken(&self, number: &str) -> bool {
        self.invoices
            .values()
            .any(|i| !i.archived && i.invoice_number == number)
    }
}

/// In-memory record store for tests and demo mode
#[derive(Default)]
pub struct MemoryStore {
    state: RwLock<State>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PartyStore for MemoryStore {
    async fn list_persons(&self) -> Result<Vec<Person>, PortError> {
        let state = self.state.read().await;
        Ok(state.persons.values().cloned().collect())
    }

    async fn get_person(&self, id: PersonId) -> Result<Person, PortError> {
        let state = self.state.read().await;
        state.require_person(id).cloned()
    }

    async fn create_person(&self, draft: PersonDraft) -> Result<Person, PortError> {
        let mut state = self.state.write().await;
        let id = state.next_person_id();
        let person = Person::from_draft(id, draft);
        state.persons.insert(id.value(), person.clone());
        tracing::debug!(%id, "person created");
        Ok(person)
    }

    async fn update_person(&self, id: PersonId, draft: PersonDraft) -> Result<Person, PortError> {
        let mut state = self.state.write().await;
        let person = state
            .persons
            .get_mut(&id.value())
            .ok_or_else(|| PortError::not_found("person", id))?;
        person.apply(draft);
        Ok(person.clone())
    }

    async fn delete_person(&self, id: PersonId) -> Result<(), PortError> {
        let mut state = self.state.write().await;
        state.require_person(id)?;

        let linked = state
            .invoices
            .values()
            .filter(|i| !i.archived && (i.seller == id || i.buyer == id))
            .count();
        if linked > 0 {
            return Err(PortError::conflict(format!(
                "person {id} has {linked} linked invoice(s) and cannot be deleted"
            )));
        }

        state.persons.remove(&id.value());
        tracing::debug!(%id, "person deleted");
        Ok(())
    }
}

#[async_trait]
impl InvoiceStore for MemoryStore {
    async fn list_invoices(&self, filter: &InvoiceFilter) -> Result<Vec<Invoice>, PortError> {
        let state = self.state.read().await;
        let matching: Vec<Invoice> = state
            .invoices
            .values()
            .filter(|i| !i.archived)
            .filter(|i| {
                filter.matches(
                    i,
                    state.identification_of(i.seller),
                    state.identification_of(i.buyer),
                )
            })
            .cloned()
            .collect();
        Ok(filter.clamp(matching))
    }

    async fn list_archived(&self) -> Result<Vec<Invoice>, PortError> {
        let state = self.state.read().await;
        Ok(state
            .invoices
            .values()
            .filter(|i| i.archived)
            .cloned()
            .collect())
    }

    async fn get_invoice(&self, id: InvoiceId) -> Result<Invoice, PortError> {
        let state = self.state.read().await;
        state
            .invoices
            .get(&id.value())
            .cloned()
            .ok_or_else(|| PortError::not_found("invoice", id))
    }

    async fn create_invoice(&self, fields: InvoiceFields) -> Result<Invoice, PortError> {
        let mut state = self.state.write().await;
        state.check_parties(&fields)?;
        if state.active_number_taken(&fields.invoice_number) {
            return Err(PortError::conflict(format!(
                "invoice number '{}' already exists in the active set",
                fields.invoice_number
            )));
        }

        let id = state.next_invoice_id();
        let invoice = Invoice::from_fields(id, fields);
        state.invoices.insert(id.value(), invoice.clone());
        state.sessions.insert(id.value(), EditSession::for_posted());
        tracing::debug!(%id, number = %invoice.invoice_number, "invoice created");
        Ok(invoice)
    }

    async fn update_invoice(
        &self,
        id: InvoiceId,
        fields: InvoiceFields,
    ) -> Result<Invoice, PortError> {
        let mut state = self.state.write().await;
        if !state.invoices.contains_key(&id.value()) {
            return Err(PortError::not_found("invoice", id));
        }
        state.check_parties(&fields)?;

        let session = state
            .sessions
            .get(&id.value())
            .copied()
            .unwrap_or_else(EditSession::for_posted);
        session
            .ensure_editable(id)
            .map_err(|e| PortError::conflict(e.to_string()))?;

        let invoice = state
            .invoices
            .get_mut(&id.value())
            .ok_or_else(|| PortError::not_found("invoice", id))?;
        invoice.apply(fields);
        let updated = invoice.clone();
        state.sessions.insert(id.value(), EditSession::for_posted());
        Ok(updated)
    }

    async fn archive_invoice(&self, id: InvoiceId) -> Result<(), PortError> {
        let mut state = self.state.write().await;
        let invoice = state
            .invoices
            .get_mut(&id.value())
            .ok_or_else(|| PortError::not_found("invoice", id))?;
        invoice.archive();
        tracing::debug!(%id, "invoice archived");
        Ok(())
    }

    async fn restore_invoice(&self, id: InvoiceId) -> Result<Invoice, PortError> {
        let mut state = self.state.write().await;
        let invoice = state
            .invoices
            .get_mut(&id.value())
            .filter(|i| i.archived)
            .ok_or_else(|| PortError::not_found("archived invoice", id))?;
        invoice
            .restore()
            .map_err(|e| PortError::conflict(e.to_string()))?;
        Ok(invoice.clone())
    }

    async fn issue_credit_note(&self, id: InvoiceId) -> Result<Invoice, PortError> {
        let mut state = self.state.write().await;
        let source = state
            .invoices
            .get(&id.value())
            .cloned()
            .ok_or_else(|| PortError::not_found("invoice", id))?;

        let fields = credit_note_for(&source, Utc::now().date_naive());

        // Re-issuing only re-unlocks the source; the corrective record is
        // created once.
        let existing = state
            .invoices
            .values()
            .find(|i| !i.archived && i.invoice_number == fields.invoice_number)
            .cloned();
        let note = match existing {
            Some(note) => note,
            None => {
                let note_id = state.next_invoice_id();
                let note = Invoice::from_fields(note_id, fields);
                state.invoices.insert(note_id.value(), note.clone());
                state
                    .sessions
                    .insert(note_id.value(), EditSession::for_posted());
                note
            }
        };

        let mut session = state
            .sessions
            .get(&id.value())
            .copied()
            .unwrap_or_else(EditSession::for_posted);
        session
            .credit_note_issued()
            .map_err(|e| PortError::conflict(e.to_string()))?;
        state.sessions.insert(id.value(), session);

        tracing::debug!(source = %id, note = %note.id, "credit note issued");
        Ok(note)
    }

    async fn product_names(&self) -> Result<Vec<String>, PortError> {
        let state = self.state.read().await;
        let mut products: Vec<String> = state
            .invoices
            .values()
            .filter(|i| !i.archived)
            .map(|i| i.product.clone())
            .collect();
        products.sort();
        products.dedup();
        Ok(products)
    }

    async fn sales_by_identification(
        &self,
        identification: &str,
    ) -> Result<Vec<Invoice>, PortError> {
        let state = self.state.read().await;
        let sellers = persons_with_identification(&state, identification)?;
        Ok(state
            .invoices
            .values()
            .filter(|i| !i.archived && sellers.contains(&i.seller))
            .cloned()
            .collect())
    }

    async fn purchases_by_identification(
        &self,
        identification: &str,
    ) -> Result<Vec<Invoice>, PortError> {
        let state = self.state.read().await;
        let buyers = persons_with_identification(&state, identification)?;
        Ok(state
            .invoices
            .values()
            .filter(|i| !i.archived && buyers.contains(&i.buyer))
            .cloned()
            .collect())
    }

    async fn global_summary(&self, include_archived: bool) -> Result<GlobalSummary, PortError> {
        let state = self.state.read().await;
        let current_year = Utc::now().date_naive().year();

        let mut invoices_count = 0u64;
        let mut current_year_sum = Decimal::ZERO;
        let mut all_time_sum = Decimal::ZERO;
        for invoice in state.invoices.values() {
            if invoice.archived && !include_archived {
                continue;
            }
            invoices_count += 1;
            all_time_sum += invoice.price;
            if invoice.issued.year() == current_year {
                current_year_sum += invoice.price;
            }
        }

        Ok(GlobalSummary {
            invoices_count,
            current_year_sum,
            all_time_sum,
        })
    }

    async fn company_figures(&self) -> Result<Vec<CompanyFigures>, PortError> {
        let state = self.state.read().await;
        let figures = state
            .persons
            .values()
            .map(|person| {
                let mut revenue = Decimal::ZERO;
                let mut revenue_per_year = std::collections::BTreeMap::new();
                let mut expenses_per_year = std::collections::BTreeMap::new();

                for invoice in state.invoices.values().filter(|i| !i.archived) {
                    let year = invoice.issued.year();
                    if invoice.seller == person.id {
                        revenue += invoice.price;
                        *revenue_per_year.entry(year).or_insert(Decimal::ZERO) += invoice.price;
                    }
                    if invoice.buyer == person.id {
                        *expenses_per_year.entry(year).or_insert(Decimal::ZERO) += invoice.price;
                    }
                }

                CompanyFigures {
                    person_id: person.id,
                    person_name: person.name.clone(),
                    revenue,
                    revenue_per_year,
                    expenses_per_year,
                }
            })
            .collect();
        Ok(figures)
    }
}

fn persons_with_identification(
    state: &State,
    identification: &str,
) -> Result<Vec<PersonId>, PortError> {
    let matches: Vec<PersonId> = state
        .persons
        .values()
        .filter(|p| p.identification_number == identification)
        .map(|p| p.id)
        .collect();
    if matches.is_empty() {
        return Err(PortError::not_found("person", identification));
    }
    Ok(matches)
}
