//! Invoice DTOs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use core_kernel::{InvoiceId, PersonId};
use domain_invoice::{Invoice, InvoiceDraft, InvoiceFilter};
use domain_party::Person;

use super::person::PersonDto;

/// Seller/buyer reference in a request body
///
/// The client sends either the bare identifier or the embedded object it
/// previously received; only the identifier matters.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(untagged)]
pub enum PersonRef {
    Id(PersonId),
    Object {
        #[serde(rename = "_id")]
        id: PersonId,
    },
}

impl PersonRef {
    pub fn id(self) -> PersonId {
        match self {
            PersonRef::Id(id) => id,
            PersonRef::Object { id } => id,
        }
    }
}

/// Invoice create/update payload
///
/// Dates and amounts arrive as form text; normalization and per-field
/// validation happen in the draft.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct InvoicePayload {
    #[validate(length(max = 50, message = "is too long"))]
    pub invoice_number: String,
    pub seller: Option<PersonRef>,
    pub buyer: Option<PersonRef>,
    pub issued: String,
    pub due_date: String,
    pub product: String,
    pub price: String,
    pub vat: String,
    pub note: String,
}

impl From<InvoicePayload> for InvoiceDraft {
    fn from(payload: InvoicePayload) -> Self {
        InvoiceDraft {
            invoice_number: payload.invoice_number,
            seller: payload.seller.map(PersonRef::id),
            buyer: payload.buyer.map(PersonRef::id),
            issued: payload.issued,
            due_date: payload.due_date,
            product: payload.product,
            price: payload.price,
            vat: payload.vat,
            note: payload.note,
        }
    }
}

/// Invoice representation on the wire, parties embedded
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceDto {
    #[serde(rename = "_id")]
    pub id: InvoiceId,
    pub invoice_number: String,
    pub seller: PersonDto,
    pub buyer: PersonDto,
    pub issued: NaiveDate,
    pub due_date: NaiveDate,
    pub product: String,
    pub price: Decimal,
    pub vat: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    pub archived: bool,
}

impl InvoiceDto {
    pub fn new(invoice: Invoice, seller: Person, buyer: Person) -> Self {
        InvoiceDto {
            id: invoice.id,
            invoice_number: invoice.invoice_number,
            seller: seller.into(),
            buyer: buyer.into(),
            issued: invoice.issued,
            due_date: invoice.due_date,
            product: invoice.product,
            price: invoice.price,
            vat: invoice.vat,
            note: invoice.note,
            archived: invoice.archived,
        }
    }
}

/// Listing filter as it appears in the query string
///
/// Every value arrives as text; empty and unparseable values are ignored,
/// matching the tolerant behavior of the original listing endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FilterQuery {
    #[serde(rename = "buyerID")]
    pub buyer_id: Option<String>,
    #[serde(rename = "sellerID")]
    pub seller_id: Option<String>,
    #[serde(rename = "buyerIC")]
    pub buyer_ic: Option<String>,
    #[serde(rename = "sellerIC")]
    pub seller_ic: Option<String>,
    pub product: Option<String>,
    #[serde(rename = "productSearch")]
    pub product_search: Option<String>,
    #[serde(rename = "minPrice")]
    pub min_price: Option<String>,
    #[serde(rename = "maxPrice")]
    pub max_price: Option<String>,
    pub limit: Option<String>,
}

impl From<FilterQuery> for InvoiceFilter {
    fn from(query: FilterQuery) -> Self {
        InvoiceFilter {
            buyer_id: parse_param(query.buyer_id),
            seller_id: parse_param(query.seller_id),
            buyer_ic: text_param(query.buyer_ic),
            seller_ic: text_param(query.seller_ic),
            product: text_param(query.product),
            product_search: text_param(query.product_search),
            min_price: parse_param(query.min_price),
            max_price: parse_param(query.max_price),
            limit: parse_param(query.limit),
        }
    }
}

fn parse_param<T: std::str::FromStr>(value: Option<String>) -> Option<T> {
    value.and_then(|v| v.trim().parse().ok())
}

fn text_param(value: Option<String>) -> Option<String> {
    value.and_then(|v| {
        let trimmed = v.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}
