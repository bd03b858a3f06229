//! Invoice handlers
//!
//! Responses embed the full seller and buyer records, so every handler
//! resolves the referenced persons before serializing.

use std::collections::HashMap;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use core_kernel::{InvoiceId, PersonId};
use domain_invoice::{Invoice, InvoiceDraft, InvoiceFilter};
use domain_party::Person;

use crate::dto::invoice::{FilterQuery, InvoiceDto, InvoicePayload};
use crate::error::ApiError;
use crate::AppState;

/// Lists active invoices, optionally filtered
pub async fn list_invoices(
    State(state): State<AppState>,
    Query(query): Query<FilterQuery>,
) -> Result<Json<Vec<InvoiceDto>>, ApiError> {
    let filter = InvoiceFilter::from(query);
    let invoices = state.invoices.list_invoices(&filter).await?;
    Ok(Json(embed_parties(&state, invoices).await?))
}

/// Lists archived invoices
pub async fn list_archived(
    State(state): State<AppState>,
) -> Result<Json<Vec<InvoiceDto>>, ApiError> {
    let invoices = state.invoices.list_archived().await?;
    Ok(Json(embed_parties(&state, invoices).await?))
}

/// Gets an invoice by identifier
pub async fn get_invoice(
    State(state): State<AppState>,
    Path(id): Path<InvoiceId>,
) -> Result<Json<InvoiceDto>, ApiError> {
    let invoice = state.invoices.get_invoice(id).await?;
    Ok(Json(embed_one(&state, invoice).await?))
}

/// Creates a new invoice
pub async fn create_invoice(
    State(state): State<AppState>,
    Json(payload): Json<InvoicePayload>,
) -> Result<(StatusCode, Json<InvoiceDto>), ApiError> {
    let fields = checked_fields(payload)?;
    let invoice = state.invoices.create_invoice(fields).await?;
    tracing::info!(id = %invoice.id, number = %invoice.invoice_number, "invoice created");
    Ok((StatusCode::CREATED, Json(embed_one(&state, invoice).await?)))
}

/// Full-replace update; rejected with a conflict while the invoice is
/// posted and no credit note has been issued
pub async fn update_invoice(
    State(state): State<AppState>,
    Path(id): Path<InvoiceId>,
    Json(payload): Json<InvoicePayload>,
) -> Result<Json<InvoiceDto>, ApiError> {
    let fields = checked_fields(payload)?;
    let invoice = state.invoices.update_invoice(id, fields).await?;
    Ok(Json(embed_one(&state, invoice).await?))
}

/// Soft-deletes an invoice into the archive
pub async fn archive_invoice(
    State(state): State<AppState>,
    Path(id): Path<InvoiceId>,
) -> Result<StatusCode, ApiError> {
    state.invoices.archive_invoice(id).await?;
    tracing::info!(%id, "invoice archived");
    Ok(StatusCode::NO_CONTENT)
}

/// Returns an archived invoice to the active set
pub async fn restore_invoice(
    State(state): State<AppState>,
    Path(id): Path<InvoiceId>,
) -> Result<Json<InvoiceDto>, ApiError> {
    let invoice = state.invoices.restore_invoice(id).await?;
    tracing::info!(%id, "invoice restored");
    Ok(Json(embed_one(&state, invoice).await?))
}

/// Issues a credit note for a posted invoice and unlocks it for editing
pub async fn issue_credit_note(
    State(state): State<AppState>,
    Path(id): Path<InvoiceId>,
) -> Result<(StatusCode, Json<InvoiceDto>), ApiError> {
    let note = state.invoices.issue_credit_note(id).await?;
    tracing::info!(source = %id, note = %note.invoice_number, "credit note issued");
    Ok((StatusCode::CREATED, Json(embed_one(&state, note).await?)))
}

/// Lists distinct product names of active invoices
pub async fn list_products(State(state): State<AppState>) -> Result<Json<Vec<String>>, ApiError> {
    Ok(Json(state.invoices.product_names().await?))
}

fn checked_fields(
    payload: InvoicePayload,
) -> Result<domain_invoice::InvoiceFields, ApiError> {
    payload
        .validate()
        .map_err(|e| ApiError::Validation(e.to_string()))?;
    let fields = InvoiceDraft::from(payload).validate()?;
    Ok(fields)
}

async fn embed_one(state: &AppState, invoice: Invoice) -> Result<InvoiceDto, ApiError> {
    let seller = state.parties.get_person(invoice.seller).await?;
    let buyer = state.parties.get_person(invoice.buyer).await?;
    Ok(InvoiceDto::new(invoice, seller, buyer))
}

pub(crate) async fn embed_parties(
    state: &AppState,
    invoices: Vec<Invoice>,
) -> Result<Vec<InvoiceDto>, ApiError> {
    let persons: HashMap<PersonId, Person> = state
        .parties
        .list_persons()
        .await?
        .into_iter()
        .map(|p| (p.id, p))
        .collect();

    invoices
        .into_iter()
        .map(|invoice| {
            let seller = persons.get(&invoice.seller).cloned().ok_or_else(|| {
                ApiError::Internal(format!("invoice {} references a missing seller", invoice.id))
            })?;
            let buyer = persons.get(&invoice.buyer).cloned().ok_or_else(|| {
                ApiError::Internal(format!("invoice {} references a missing buyer", invoice.id))
            })?;
            Ok(InvoiceDto::new(invoice, seller, buyer))
        })
        .collect()
}
