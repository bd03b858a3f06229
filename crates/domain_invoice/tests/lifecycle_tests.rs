//! Editing-session scenarios across the invoice lifecycle

use chrono::NaiveDate;
use rust_decimal_macros::dec;

use core_kernel::{InvoiceId, PersonId};
use domain_invoice::{credit_note_for, EditSession, Invoice, InvoiceDraft, InvoiceError, InvoiceFields};

fn posted_invoice() -> Invoice {
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

fn edit_draft(price: &str) -> InvoiceDraft {
    InvoiceDraft {
        invoice_number: "2024001".to_string(),
        seller: Some(PersonId::new(1)),
        buyer: Some(PersonId::new(2)),
        issued: "01.06.2024".to_string(),
        due_date: "15.06.2024".to_string(),
        product: "konzultace".to_string(),
        price: price.to_string(),
        vat: "21".to_string(),
        note: String::new(),
    }
}

#[test]
fn edit_without_credit_note_is_rejected() {
    let invoice = posted_invoice();
    let session = EditSession::for_posted();

    assert!(!session.can_edit());
    assert_eq!(
        session.ensure_editable(invoice.id),
        Err(InvoiceError::EditLocked(invoice.id))
    );
}

#[test]
fn credit_note_then_edit_updates_in_place() {
    let mut invoice = posted_invoice();
    let mut session = EditSession::for_posted();

    // Issue the credit note: the corrective record reverses the amount
    // and the session unlocks.
    let today = NaiveDate::from_ymd_opt(2024, 7, 1).unwrap();
    let correction = credit_note_for(&invoice, today);
    assert_eq!(correction.price, dec!(-1000));
    session.credit_note_issued().unwrap();
    assert!(session.can_edit());

    // Save the edit: same identifier, new field values, locked again.
    session.ensure_editable(invoice.id).unwrap();
    let fields = edit_draft("1500").validate().unwrap();
    invoice.apply(fields);
    session.saved();

    assert_eq!(invoice.id, InvoiceId::new(1));
    assert_eq!(invoice.price, dec!(1500));
    assert!(!session.can_edit());
}

#[test]
fn new_draft_saves_without_any_gate() {
    let session = EditSession::for_new_draft();
    session.ensure_editable(InvoiceId::new(0)).unwrap();

    let fields = edit_draft("1000").validate().unwrap();
    let invoice = Invoice::from_fields(InvoiceId::new(5), fields);
    assert!(!invoice.archived);
}

#[test]
fn archive_and_restore_do_not_touch_the_edit_gate() {
    let mut invoice = posted_invoice();
    let session = EditSession::for_posted();

    invoice.archive();
    invoice.restore().unwrap();

    assert!(!session.can_edit());
    assert_eq!(invoice, posted_invoice());
}
