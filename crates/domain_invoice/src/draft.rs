//! Draft validation
//!
//! An [`InvoiceDraft`] carries the raw text a form submits: dates in either
//! accepted format, amounts with `.` or `,` separators, possibly missing
//! seller/buyer selections. Validation normalizes everything into typed
//! [`InvoiceFields`], collecting one error per offending field so the form
//! can report them inline. Nothing invalid reaches a store.

use serde::{Deserialize, Serialize};

use core_kernel::{dates, numeric, PersonId};

use crate::error::InvoiceError;
use crate::invoice::InvoiceFields;

/// A field-level validation failure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

/// Raw invoice form input
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InvoiceDraft {
    pub invoice_number: String,
    pub seller: Option<PersonId>,
    pub buyer: Option<PersonId>,
    pub issued: String,
    pub due_date: String,
    pub product: String,
    pub price: String,
    pub vat: String,
    pub note: String,
}

impl InvoiceDraft {
    /// Validates and normalizes the draft into typed fields
    pub fn validate(self) -> Result<InvoiceFields, InvoiceError> {
        let mut errors = Vec::new();

        if self.invoice_number.trim().is_empty() {
            errors.push(FieldError::new("invoiceNumber", "is required"));
        }
        if self.product.trim().is_empty() {
            errors.push(FieldError::new("product", "is required"));
        }

        let seller = match self.seller {
            Some(id) => Some(id),
            None => {
                errors.push(FieldError::new("seller", "select a seller"));
                None
            }
        };
        let buyer = match self.buyer {
            Some(id) => Some(id),
            None => {
                errors.push(FieldError::new("buyer", "select a buyer"));
                None
            }
        };

        let issued = match dates::parse_date(&self.issued) {
            Ok(date) => Some(date),
            Err(e) => {
                errors.push(FieldError::new("issued", e.to_string()));
                None
            }
        };
        let due_date = match dates::parse_date(&self.due_date) {
            Ok(date) => Some(date),
            Err(e) => {
                errors.push(FieldError::new("dueDate", e.to_string()));
                None
            }
        };

        let price = match numeric::parse_amount(&self.price) {
            Ok(amount) => Some(amount),
            Err(e) => {
                errors.push(FieldError::new("price", e.to_string()));
                None
            }
        };
        let vat = match numeric::parse_amount(&self.vat) {
            Ok(amount) => Some(amount),
            Err(e) => {
                errors.push(FieldError::new("vat", e.to_string()));
                None
            }
        };

        let (Some(seller), Some(buyer), Some(issued), Some(due_date), Some(price), Some(vat)) =
            (seller, buyer, issued, due_date, price, vat)
        else {
            return Err(InvoiceError::Validation(errors));
        };
        if !errors.is_empty() {
            return Err(InvoiceError::Validation(errors));
        }

        let note = self.note.trim();
        Ok(InvoiceFields {
            invoice_number: self.invoice_number.trim().to_string(),
            seller,
            buyer,
            issued,
            due_date,
            product: self.product.trim().to_string(),
            price,
            vat,
            note: if note.is_empty() {
                None
            } else {
                Some(note.to_string())
            },
        })
    }
}
