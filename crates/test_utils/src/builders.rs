//! Draft builders

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use core_kernel::PersonId;
use domain_invoice::InvoiceFields;
use domain_party::{Address, Country, PersonDraft};

/// Builds a valid [`PersonDraft`], field by field
#[derive(Debug, Clone)]
pub struct PersonBuilder {
    draft: PersonDraft,
}

impl PersonBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            draft: PersonDraft {
                name: name.to_string(),
                identification_number: "12345678".to_string(),
                tax_number: Some("CZ12345678".to_string()),
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
            },
        }
    }

    pub fn identification(mut self, number: &str) -> Self {
        self.draft.identification_number = number.to_string();
        self
    }

    pub fn mail(mut self, mail: &str) -> Self {
        self.draft.mail = mail.to_string();
        self
    }

    pub fn country(mut self, country: Country) -> Self {
        self.draft.address.country = country;
        self
    }

    pub fn build(self) -> PersonDraft {
        self.draft
    }
}

/// Builds valid [`InvoiceFields`] between two persons
#[derive(Debug, Clone)]
pub struct InvoiceBuilder {
    fields: InvoiceFields,
}

impl InvoiceBuilder {
    pub fn new(number: &str, seller: PersonId, buyer: PersonId) -> Self {
        Self {
            fields: InvoiceFields {
                invoice_number: number.to_string(),
                seller,
                buyer,
                issued: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
                due_date: NaiveDate::from_ymd_opt(2024, 6, 15).unwrap(),
                product: "konzultace".to_string(),
                price: dec!(1000),
                vat: dec!(21),
                note: None,
            },
        }
    }

    pub fn issued(mut self, date: NaiveDate) -> Self {
        self.fields.issued = date;
        self
    }

    pub fn issued_in(mut self, year: i32) -> Self {
        self.fields.issued = NaiveDate::from_ymd_opt(year, 6, 1).unwrap();
        self.fields.due_date = NaiveDate::from_ymd_opt(year, 6, 15).unwrap();
        self
    }

    pub fn product(mut self, product: &str) -> Self {
        self.fields.product = product.to_string();
        self
    }

    pub fn price(mut self, price: Decimal) -> Self {
        self.fields.price = price;
        self
    }

    pub fn build(self) -> InvoiceFields {
        self.fields
    }
}
