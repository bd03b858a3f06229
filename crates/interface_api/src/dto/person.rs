//! Person DTOs

use serde::{Deserialize, Serialize};
use validator::Validate;

use core_kernel::PersonId;
use domain_party::{Address, Country, Person, PersonDraft};

/// Person create/update payload
///
/// Optional string fields arrive as empty strings from the form; empty
/// means absent.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonPayload {
    #[validate(length(max = 200, message = "is too long"))]
    pub name: String,
    pub identification_number: String,
    pub tax_number: String,
    pub account_number: String,
    pub bank_code: String,
    pub iban: String,
    pub telephone: String,
    pub mail: String,
    pub street: String,
    pub zip: String,
    pub city: String,
    pub country: String,
    pub note: String,
}

impl From<PersonPayload> for PersonDraft {
    fn from(payload: PersonPayload) -> Self {
        PersonDraft {
            name: payload.name.trim().to_string(),
            identification_number: payload.identification_number.trim().to_string(),
            tax_number: optional(payload.tax_number),
            account_number: payload.account_number.trim().to_string(),
            bank_code: payload.bank_code.trim().to_string(),
            iban: optional(payload.iban),
            telephone: payload.telephone.trim().to_string(),
            mail: payload.mail.trim().to_string(),
            address: Address {
                street: payload.street.trim().to_string(),
                zip: payload.zip.trim().to_string(),
                city: payload.city.trim().to_string(),
                country: if payload.country.trim().is_empty() {
                    Country::default()
                } else {
                    Country::from(payload.country.trim().to_string())
                },
            },
            note: optional(payload.note),
        }
    }
}

fn optional(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Person representation on the wire
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonDto {
    #[serde(rename = "_id")]
    pub id: PersonId,
    pub name: String,
    pub identification_number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_number: Option<String>,
    pub account_number: String,
    pub bank_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iban: Option<String>,
    pub telephone: String,
    pub mail: String,
    pub street: String,
    pub zip: String,
    pub city: String,
    pub country: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl From<Person> for PersonDto {
    fn from(person: Person) -> Self {
        PersonDto {
            id: person.id,
            name: person.name,
            identification_number: person.identification_number,
            tax_number: person.tax_number,
            account_number: person.account_number,
            bank_code: person.bank_code,
            iban: person.iban,
            telephone: person.telephone,
            mail: person.mail,
            street: person.address.street,
            zip: person.address.zip,
            city: person.address.city,
            country: person.address.country.code().to_string(),
            note: person.note,
        }
    }
}
