//! Credit-note derivation
//!
//! Issuing a credit note creates a corrective invoice that reverses the
//! source invoice's amount; the source record itself stays untouched. The
//! derived record carries the source number with a `-CN` suffix, the
//! negated price at the same VAT rate, and a 14-day due term from the day
//! of issue.

use chrono::{Days, NaiveDate};

use crate::invoice::{Invoice, InvoiceFields};

/// Payment term granted on credit notes, in days
pub const CREDIT_NOTE_TERM_DAYS: u64 = 14;

/// Derives the corrective record for an invoice
pub fn credit_note_for(source: &Invoice, today: NaiveDate) -> InvoiceFields {
    InvoiceFields {
        invoice_number: format!("{}-CN", source.invoice_number),
        seller: source.seller,
        buyer: source.buyer,
        issued: today,
        due_date: today + Days::new(CREDIT_NOTE_TERM_DAYS),
        product: format!("Credit note for: {}", source.product),
        price: -source.price,
        vat: source.vat,
        note: Some(format!(
            "Credit note for invoice no. {}",
            source.invoice_number
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::{InvoiceId, PersonId};
    use rust_decimal_macros::dec;

    fn source() -> Invoice {
        Invoice::from_fields(
            InvoiceId::new(1),
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
            },
        )
    }

    #[test]
    fn test_credit_note_reverses_price() {
        let today = NaiveDate::from_ymd_opt(2024, 7, 1).unwrap();
        let note = credit_note_for(&source(), today);

        assert_eq!(note.invoice_number, "2024001-CN");
        assert_eq!(note.price, dec!(-1000));
        assert_eq!(note.vat, dec!(21));
        assert_eq!(note.issued, today);
        assert_eq!(note.due_date, NaiveDate::from_ymd_opt(2024, 7, 15).unwrap());
    }

    #[test]
    fn test_credit_note_keeps_parties() {
        let note = credit_note_for(&source(), NaiveDate::from_ymd_opt(2024, 7, 1).unwrap());
        assert_eq!(note.seller, PersonId::new(1));
        assert_eq!(note.buyer, PersonId::new(2));
    }

    #[test]
    fn test_source_is_untouched() {
        let invoice = source();
        let before = invoice.clone();
        let _ = credit_note_for(&invoice, NaiveDate::from_ymd_opt(2024, 7, 1).unwrap());
        assert_eq!(invoice, before);
    }
}
