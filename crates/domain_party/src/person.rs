//! Person entity
//!
//! Represents a business entity that sells or buys under invoices. The
//! identification number (IČ) and tax number (DIČ) follow the Czech
//! conventions of the original register but are carried as opaque strings.

use serde::{Deserialize, Serialize};

use core_kernel::PersonId;

use crate::address::Address;

/// A buyer or seller business entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    /// Store-assigned identifier, immutable for the lifetime of the record
    pub id: PersonId,
    /// Display name
    pub name: String,
    /// National identification number (IČ)
    pub identification_number: String,
    /// Tax number (DIČ)
    pub tax_number: Option<String>,
    /// Domestic bank account number
    pub account_number: String,
    /// Bank code
    pub bank_code: String,
    /// International bank account number
    pub iban: Option<String>,
    /// Contact phone
    pub telephone: String,
    /// Contact e-mail
    pub mail: String,
    /// Postal address
    pub address: Address,
    /// Free-text note
    pub note: Option<String>,
}

impl Person {
    /// Materializes a person from a draft and a store-assigned identifier
    pub fn from_draft(id: PersonId, draft: PersonDraft) -> Self {
        Self {
            id,
            name: draft.name,
            identification_number: draft.identification_number,
            tax_number: draft.tax_number,
            account_number: draft.account_number,
            bank_code: draft.bank_code,
            iban: draft.iban,
            telephone: draft.telephone,
            mail: draft.mail,
            address: draft.address,
            note: draft.note,
        }
    }

    /// Applies a full-replace edit, keeping the identifier
    pub fn apply(&mut self, draft: PersonDraft) {
        *self = Person::from_draft(self.id, draft);
    }
}

/// Person attributes as submitted by a create or edit form
///
/// Carries everything a [`Person`] has except the identifier, which the
/// store assigns on create and which never changes on update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonDraft {
    pub name: String,
    pub identification_number: String,
    pub tax_number: Option<String>,
    pub account_number: String,
    pub bank_code: String,
    pub iban: Option<String>,
    pub telephone: String,
    pub mail: String,
    pub address: Address,
    pub note: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::address::Country;

    fn draft(name: &str) -> PersonDraft {
        PersonDraft {
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
        }
    }

    #[test]
    fn test_from_draft_keeps_fields() {
        let person = Person::from_draft(PersonId::new(1), draft("Alfa s.r.o."));
        assert_eq!(person.id, PersonId::new(1));
        assert_eq!(person.name, "Alfa s.r.o.");
        assert_eq!(person.identification_number, "12345678");
    }

    #[test]
    fn test_apply_is_full_replace_at_same_id() {
        let mut person = Person::from_draft(PersonId::new(1), draft("Alfa s.r.o."));
        let mut edited = draft("Beta a.s.");
        edited.tax_number = None;
        person.apply(edited);

        assert_eq!(person.id, PersonId::new(1));
        assert_eq!(person.name, "Beta a.s.");
        assert_eq!(person.tax_number, None);
    }
}
