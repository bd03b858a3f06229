//! PostgreSQL store adapter
//!
//! Runtime SQLx queries against the schema in `migrations/`. Every
//! multi-step operation (person deletion, invoice update, credit-note
//! issue) runs inside one transaction so the port-level atomicity
//! guarantees hold.

mod invoices;
mod persons;

use rust_decimal::Decimal;
use sqlx::PgPool;

use core_kernel::{InvoiceId, PersonId};
use domain_invoice::Invoice;
use domain_party::{Address, Person};

/// PostgreSQL-backed record store
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub(crate) fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[derive(sqlx::FromRow)]
pub(crate) struct PersonRow {
    pub id: i64,
    pub name: String,
    pub identification_number: String,
    pub tax_number: Option<String>,
    pub account_number: String,
    pub bank_code: String,
    pub iban: Option<String>,
    pub telephone: String,
    pub mail: String,
    pub street: String,
    pub zip: String,
    pub city: String,
    pub country: String,
    pub note: Option<String>,
}

impl From<PersonRow> for Person {
    fn from(row: PersonRow) -> Self {
        Person {
            id: PersonId::new(row.id),
            name: row.name,
            identification_number: row.identification_number,
            tax_number: row.tax_number,
            account_number: row.account_number,
            bank_code: row.bank_code,
            iban: row.iban,
            telephone: row.telephone,
            mail: row.mail,
            address: Address {
                street: row.street,
                zip: row.zip,
                city: row.city,
                country: row.country.into(),
            },
            note: row.note,
        }
    }
}

#[derive(sqlx::FromRow)]
pub(crate) struct InvoiceRow {
    pub id: i64,
    pub invoice_number: String,
    pub seller_id: i64,
    pub buyer_id: i64,
    pub issued: chrono::NaiveDate,
    pub due_date: chrono::NaiveDate,
    pub product: String,
    pub price: Decimal,
    pub vat: Decimal,
    pub note: Option<String>,
    pub archived: bool,
}

impl From<InvoiceRow> for Invoice {
    fn from(row: InvoiceRow) -> Self {
        Invoice {
            id: InvoiceId::new(row.id),
            invoice_number: row.invoice_number,
            seller: PersonId::new(row.seller_id),
            buyer: PersonId::new(row.buyer_id),
            issued: row.issued,
            due_date: row.due_date,
            product: row.product,
            price: row.price,
            vat: row.vat,
            note: row.note,
            archived: row.archived,
        }
    }
}

pub(crate) const INVOICE_COLUMNS: &str =
    "id, invoice_number, seller_id, buyer_id, issued, due_date, product, price, vat, note, archived";

pub(crate) const PERSON_COLUMNS: &str =
    "id, name, identification_number, tax_number, account_number, bank_code, iban, \
     telephone, mail, street, zip, city, country, note";
