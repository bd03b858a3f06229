//! Port-contract tests against the in-memory adapter

use chrono::{Datelike, Days, NaiveDate, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use core_kernel::{InvoiceId, PersonId, PortError};
use domain_invoice::{Invoice, InvoiceFields, InvoiceFilter, InvoiceStore};
use domain_party::{Address, Country, PartyStore, Person, PersonDraft};
use infra_store::MemoryStore;

fn person_draft(name: &str, identification: &str) -> PersonDraft {
    PersonDraft {
        name: name.to_string(),
        identification_number: identification.to_string(),
        tax_number: None,
        account_number: "123456789".to_string(),
        bank_code: "0100".to_string(),
        iban: None,
        telephone: "+420123456789".to_string(),
        mail: "info@example.cz".to_string(),
        address: Address {
            street: "Dlouhá 12".to_string(),
            zip: "11000".to_string(),
            city: "Praha".to_string(),
            country: Country::Czechia,
        },
        note: None,
    }
}

fn fields(number: &str, seller: PersonId, buyer: PersonId, year: i32) -> InvoiceFields {
    InvoiceFields {
        invoice_number: number.to_string(),
        seller,
        buyer,
        issued: NaiveDate::from_ymd_opt(year, 6, 1).unwrap(),
        due_date: NaiveDate::from_ymd_opt(year, 6, 15).unwrap(),
        product: "konzultace".to_string(),
        price: dec!(1000),
        vat: dec!(21),
        note: None,
    }
}

async fn two_persons(store: &MemoryStore) -> (Person, Person) {
    let alfa = store
        .create_person(person_draft("Alfa s.r.o.", "11111111"))
        .await
        .unwrap();
    let beta = store
        .create_person(person_draft("Beta a.s.", "22222222"))
        .await
        .unwrap();
    (alfa, beta)
}

#[tokio::test]
async fn delete_guard_rejects_atomically() {
    let store = MemoryStore::new();
    let (alfa, beta) = two_persons(&store).await;
    let invoice = store
        .create_invoice(fields("2024001", alfa.id, beta.id, 2024))
        .await
        .unwrap();

    // Both parties are blocked, on the selling and the buying side
    for person in [alfa.id, beta.id] {
        let err = store.delete_person(person).await.unwrap_err();
        assert!(matches!(err, PortError::Conflict(_)));
        assert!(store.get_person(person).await.is_ok());
    }
    assert!(store.get_invoice(invoice.id).await.is_ok());

    // Archiving the linked invoice releases the guard
    store.archive_invoice(invoice.id).await.unwrap();
    store.delete_person(alfa.id).await.unwrap();
    assert!(store.get_person(alfa.id).await.is_err());
}

#[tokio::test]
async fn archive_and_restore_keep_the_record_equal() {
    let store = MemoryStore::new();
    let (alfa, beta) = two_persons(&store).await;
    let original = store
        .create_invoice(fields("2024001", alfa.id, beta.id, 2024))
        .await
        .unwrap();

    store.archive_invoice(original.id).await.unwrap();
    assert!(store
        .list_invoices(&InvoiceFilter::default())
        .await
        .unwrap()
        .is_empty());
    assert_eq!(store.list_archived().await.unwrap().len(), 1);

    let restored = store.restore_invoice(original.id).await.unwrap();
    assert_eq!(restored, original);

    // Restore needs an archived invoice
    let err = store.restore_invoice(original.id).await.unwrap_err();
    assert!(matches!(err, PortError::NotFound { .. }));
}

#[tokio::test]
async fn archiving_frees_the_invoice_number() {
    let store = MemoryStore::new();
    let (alfa, beta) = two_persons(&store).await;
    let first = store
        .create_invoice(fields("2024001", alfa.id, beta.id, 2024))
        .await
        .unwrap();

    let err = store
        .create_invoice(fields("2024001", alfa.id, beta.id, 2024))
        .await
        .unwrap_err();
    assert!(matches!(err, PortError::Conflict(_)));

    store.archive_invoice(first.id).await.unwrap();
    store
        .create_invoice(fields("2024001", alfa.id, beta.id, 2024))
        .await
        .unwrap();
}

#[tokio::test]
async fn invoice_creation_requires_resolvable_parties() {
    let store = MemoryStore::new();
    let (alfa, _) = two_persons(&store).await;
    let err = store
        .create_invoice(fields("2024001", alfa.id, PersonId::new(99), 2024))
        .await
        .unwrap_err();
    assert!(matches!(err, PortError::Validation(_)));
}

#[tokio::test]
async fn updating_unknown_invoice_is_not_found() {
    let store = MemoryStore::new();
    let (alfa, beta) = two_persons(&store).await;

    // The missing record wins over the edit gate
    let err = store
        .update_invoice(InvoiceId::new(999), fields("2024001", alfa.id, beta.id, 2024))
        .await
        .unwrap_err();
    assert!(matches!(err, PortError::NotFound { .. }), "got: {err:?}");

    // And over party resolution
    let err = store
        .update_invoice(
            InvoiceId::new(999),
            fields("2024001", PersonId::new(98), PersonId::new(99), 2024),
        )
        .await
        .unwrap_err();
    assert!(matches!(err, PortError::NotFound { .. }), "got: {err:?}");
}

#[tokio::test]
async fn credit_note_unlocks_one_edit() {
    let store = MemoryStore::new();
    let (alfa, beta) = two_persons(&store).await;
    let invoice = store
        .create_invoice(fields("2024001", alfa.id, beta.id, 2024))
        .await
        .unwrap();

    let mut edit = fields("ignored", alfa.id, beta.id, 2024);
    edit.price = dec!(1200);

    let err = store
        .update_invoice(invoice.id, edit.clone())
        .await
        .unwrap_err();
    assert!(matches!(err, PortError::Conflict(_)));

    let note = store.issue_credit_note(invoice.id).await.unwrap();
    assert_eq!(note.invoice_number, "2024001-CN");
    assert_eq!(note.price, dec!(-1000));
    assert_eq!(note.vat, invoice.vat);
    let today = Utc::now().date_naive();
    assert_eq!(note.issued, today);
    assert_eq!(note.due_date, today.checked_add_days(Days::new(14)).unwrap());

    // The source itself is untouched
    assert_eq!(store.get_invoice(invoice.id).await.unwrap(), invoice);

    // Re-issuing reuses the corrective record
    let again = store.issue_credit_note(invoice.id).await.unwrap();
    assert_eq!(again.id, note.id);

    let updated = store.update_invoice(invoice.id, edit.clone()).await.unwrap();
    assert_eq!(updated.id, invoice.id);
    assert_eq!(updated.price, dec!(1200));
    // The number never changes on update
    assert_eq!(updated.invoice_number, "2024001");

    // Saving locked it again
    let err = store.update_invoice(invoice.id, edit).await.unwrap_err();
    assert!(matches!(err, PortError::Conflict(_)));
}

#[tokio::test]
async fn filters_compose_and_fold_diacritics() {
    let store = MemoryStore::new();
    let (alfa, beta) = two_persons(&store).await;

    let mut software = fields("2024001", alfa.id, beta.id, 2024);
    software.product = "vývoj software".to_string();
    software.price = dec!(5000);
    store.create_invoice(software).await.unwrap();

    let mut consulting = fields("2024002", beta.id, alfa.id, 2024);
    consulting.price = dec!(800);
    store.create_invoice(consulting).await.unwrap();

    let by_search = store
        .list_invoices(&InvoiceFilter {
            product_search: Some("VYVOJ".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(by_search.len(), 1);
    assert_eq!(by_search[0].product, "vývoj software");

    let by_seller_ic = store
        .list_invoices(&InvoiceFilter {
            seller_ic: Some("1111".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(by_seller_ic.len(), 1);
    assert_eq!(by_seller_ic[0].seller, alfa.id);

    let by_price = store
        .list_invoices(&InvoiceFilter {
            min_price: Some(dec!(500)),
            max_price: Some(dec!(1000)),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(by_price.len(), 1);
    assert_eq!(by_price[0].price, dec!(800));

    let limited = store
        .list_invoices(&InvoiceFilter {
            limit: Some(1),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(limited.len(), 1);
}

#[tokio::test]
async fn identification_lookups_cover_both_roles() {
    let store = MemoryStore::new();
    let (alfa, beta) = two_persons(&store).await;
    store
        .create_invoice(fields("2024001", alfa.id, beta.id, 2024))
        .await
        .unwrap();
    store
        .create_invoice(fields("2024002", beta.id, alfa.id, 2024))
        .await
        .unwrap();

    let sales = store.sales_by_identification("11111111").await.unwrap();
    assert_eq!(sales.len(), 1);
    assert_eq!(sales[0].seller, alfa.id);

    let purchases = store.purchases_by_identification("11111111").await.unwrap();
    assert_eq!(purchases.len(), 1);
    assert_eq!(purchases[0].buyer, alfa.id);

    let err = store.sales_by_identification("99999999").await.unwrap_err();
    assert!(matches!(err, PortError::NotFound { .. }));
}

#[tokio::test]
async fn summary_toggles_archived_invoices() {
    let store = MemoryStore::new();
    let (alfa, beta) = two_persons(&store).await;
    let current_year = Utc::now().date_naive().year();

    let kept = store
        .create_invoice(fields("A", alfa.id, beta.id, current_year))
        .await
        .unwrap();
    let archived: Invoice = store
        .create_invoice(fields("B", alfa.id, beta.id, 2020))
        .await
        .unwrap();
    store.archive_invoice(archived.id).await.unwrap();

    let summary = store.global_summary(false).await.unwrap();
    assert_eq!(summary.invoices_count, 1);
    assert_eq!(summary.all_time_sum, kept.price);
    assert_eq!(summary.current_year_sum, kept.price);

    let summary = store.global_summary(true).await.unwrap();
    assert_eq!(summary.invoices_count, 2);
    assert_eq!(summary.all_time_sum, dec!(2000));
    assert_eq!(summary.current_year_sum, kept.price);
}

#[tokio::test]
async fn company_figures_split_revenue_and_expenses_by_year() {
    let store = MemoryStore::new();
    let (alfa, beta) = two_persons(&store).await;

    let mut sale_2022 = fields("2022001", alfa.id, beta.id, 2022);
    sale_2022.price = dec!(3000);
    store.create_invoice(sale_2022).await.unwrap();
    let mut purchase_2023 = fields("2023001", beta.id, alfa.id, 2023);
    purchase_2023.price = dec!(400);
    store.create_invoice(purchase_2023).await.unwrap();

    let figures = store.company_figures().await.unwrap();
    assert_eq!(figures.len(), 2);

    // Rows come back in identifier order
    assert_eq!(figures[0].person_id, alfa.id);
    assert_eq!(figures[0].revenue, dec!(3000));
    assert_eq!(figures[0].revenue_per_year.get(&2022), Some(&dec!(3000)));
    assert_eq!(figures[0].expenses_per_year.get(&2023), Some(&dec!(400)));

    assert_eq!(figures[1].person_id, beta.id);
    assert_eq!(figures[1].revenue, dec!(400));
    assert_eq!(figures[1].expenses_per_year.get(&2022), Some(&dec!(3000)));
    assert_eq!(
        figures[1].revenue_per_year.values().copied().sum::<Decimal>(),
        dec!(400)
    );
}
