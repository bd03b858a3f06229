//! Seeded store fixtures

use rust_decimal_macros::dec;

use domain_invoice::{Invoice, InvoiceStore};
use domain_party::{PartyStore, Person};
use infra_store::MemoryStore;

use crate::builders::{InvoiceBuilder, PersonBuilder};

/// Two persons and two invoices between them
///
/// Alfa sells both invoices to Beta: one from 2023 for 2000, one from 2024
/// for 1000. Returns the store together with the created records.
pub async fn seeded_store() -> (MemoryStore, Vec<Person>, Vec<Invoice>) {
    let store = MemoryStore::new();

    let alfa = store
        .create_person(
            PersonBuilder::new("Alfa s.r.o.")
                .identification("11111111")
                .build(),
        )
        .await
        .unwrap();
    let beta = store
        .create_person(
            PersonBuilder::new("Beta a.s.")
                .identification("22222222")
                .mail("office@beta.cz")
                .build(),
        )
        .await
        .unwrap();

    let older = store
        .create_invoice(
            InvoiceBuilder::new("2023001", alfa.id, beta.id)
                .issued_in(2023)
                .price(dec!(2000))
                .product("vývoj software")
                .build(),
        )
        .await
        .unwrap();
    let newer = store
        .create_invoice(
            InvoiceBuilder::new("2024001", alfa.id, beta.id)
                .issued_in(2024)
                .price(dec!(1000))
                .build(),
        )
        .await
        .unwrap();

    (store, vec![alfa, beta], vec![older, newer])
}
