//! Invoice aggregate

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{InvoiceId, PersonId};

use crate::error::InvoiceError;

/// A billing record between a seller and a buyer person
///
/// The invoice number is human-assigned, unique within the active set, and
/// immutable once the invoice is created. Archiving is a soft delete: the
/// record keeps every field and can be restored unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invoice {
    /// Store-assigned identifier
    pub id: InvoiceId,
    /// Human-assigned invoice number
    pub invoice_number: String,
    /// Seller reference; must resolve at creation time
    pub seller: PersonId,
    /// Buyer reference; must resolve at creation time
    pub buyer: PersonId,
    /// Issue date
    pub issued: NaiveDate,
    /// Due date
    pub due_date: NaiveDate,
    /// Product or service description
    pub product: String,
    /// Price; non-negative for user-submitted invoices, negative only on
    /// store-derived credit notes
    pub price: Decimal,
    /// VAT rate in percent
    pub vat: Decimal,
    /// Free-text note
    pub note: Option<String>,
    /// Soft-delete flag; archived invoices leave default listings and
    /// statistics
    pub archived: bool,
}

impl Invoice {
    /// Materializes a new active invoice from validated fields
    pub fn from_fields(id: InvoiceId, fields: InvoiceFields) -> Self {
        Self {
            id,
            invoice_number: fields.invoice_number,
            seller: fields.seller,
            buyer: fields.buyer,
            issued: fields.issued,
            due_date: fields.due_date,
            product: fields.product,
            price: fields.price,
            vat: fields.vat,
            note: fields.note,
            archived: false,
        }
    }

    /// Full-replace edit at the same identifier
    ///
    /// The invoice number is immutable once created and is not taken from
    /// the replacement fields.
    pub fn apply(&mut self, fields: InvoiceFields) {
        self.seller = fields.seller;
        self.buyer = fields.buyer;
        self.issued = fields.issued;
        self.due_date = fields.due_date;
        self.product = fields.product;
        self.price = fields.price;
        self.vat = fields.vat;
        self.note = fields.note;
    }

    /// Soft delete; always permitted, idempotent
    pub fn archive(&mut self) {
        self.archived = true;
    }

    /// Returns an archived invoice to the active set
    pub fn restore(&mut self) -> Result<(), InvoiceError> {
        if !self.archived {
            return Err(InvoiceError::NotArchived(self.id));
        }
        self.archived = false;
        Ok(())
    }

    /// Price including VAT
    pub fn price_with_vat(&self) -> Decimal {
        self.price + self.price * self.vat / Decimal::from(100)
    }

    /// True for invoices derived as credit notes
    pub fn is_credit_note(&self) -> bool {
        self.price.is_sign_negative() && !self.price.is_zero()
    }
}

/// Validated invoice fields, without identity or archive state
///
/// Produced by draft validation or by credit-note derivation; the store
/// attaches the identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceFields {
    pub invoice_number: String,
    pub seller: PersonId,
    pub buyer: PersonId,
    pub issued: NaiveDate,
    pub due_date: NaiveDate,
    pub product: String,
    pub price: Decimal,
    pub vat: Decimal,
    pub note: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn fields() -> InvoiceFields {
        InvoiceFields {
            invoice_number: "2024001".to_string(),
            seller: PersonId::new(1),
            buyer: PersonId::new(2),
            issued: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            due_date: NaiveDate::from_ymd_opt(2024, 6, 15).unwrap(),
            product: "konzultace".to_string(),
            price: dec!(1000),
            vat: dec!(21),
            note: None,
        }
    }

    #[test]
    fn test_archive_then_restore_round_trips() {
        let mut invoice = Invoice::from_fields(InvoiceId::new(1), fields());
        let before = invoice.clone();

        invoice.archive();
        assert!(invoice.archived);
        invoice.restore().unwrap();
        assert_eq!(invoice, before);
    }

    #[test]
    fn test_restore_requires_archived() {
        let mut invoice = Invoice::from_fields(InvoiceId::new(1), fields());
        assert_eq!(
            invoice.restore(),
            Err(InvoiceError::NotArchived(InvoiceId::new(1)))
        );
    }

    #[test]
    fn test_apply_keeps_id_and_number() {
        let mut invoice = Invoice::from_fields(InvoiceId::new(1), fields());
        let mut edited = fields();
        edited.invoice_number = "totally-different".to_string();
        edited.price = dec!(2500);
        invoice.apply(edited);

        assert_eq!(invoice.id, InvoiceId::new(1));
        assert_eq!(invoice.invoice_number, "2024001");
        assert_eq!(invoice.price, dec!(2500));
    }

    #[test]
    fn test_price_with_vat() {
        let invoice = Invoice::from_fields(InvoiceId::new(1), fields());
        assert_eq!(invoice.price_with_vat(), dec!(1210));
    }
}
