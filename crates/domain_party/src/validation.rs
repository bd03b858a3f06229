//! Person validation rules
//!
//! Validation runs before any store call; errors are collected per field so
//! the editing surface can report them inline.
//!
//! # Rules
//!
//! - Name, identification number, account number, bank code, telephone,
//!   mail, street, zip, and city are required
//! - Mail must contain an `@` with a non-empty local and domain part
//! - A missing tax number only produces a warning; sole traders without VAT
//!   registration legitimately have none

use crate::error::PartyError;
use crate::person::PersonDraft;

/// Result of person validation
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    /// List of validation errors, `field: message`
    pub errors: Vec<String>,
    /// List of non-fatal issues
    pub warnings: Vec<String>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_error(&mut self, field: &str, message: &str) {
        self.errors.push(format!("{field}: {message}"));
    }

    pub fn add_warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    /// Converts into a domain error when any rule failed
    pub fn into_result(self) -> Result<(), PartyError> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(PartyError::Validation(self.errors.join("; ")))
        }
    }
}

/// Validator for person drafts
pub struct PersonValidator;

impl PersonValidator {
    /// Validates a draft, collecting every violated rule
    pub fn validate(draft: &PersonDraft) -> ValidationResult {
        let mut result = ValidationResult::default();

        let required = [
            ("name", &draft.name),
            ("identificationNumber", &draft.identification_number),
            ("accountNumber", &draft.account_number),
            ("bankCode", &draft.bank_code),
            ("telephone", &draft.telephone),
            ("mail", &draft.mail),
            ("street", &draft.address.street),
            ("zip", &draft.address.zip),
            ("city", &draft.address.city),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                result.add_error(field, "is required");
            }
        }

        if !draft.mail.trim().is_empty() && !is_mail_shaped(&draft.mail) {
            result.add_error("mail", "is not a valid e-mail address");
        }

        if draft.tax_number.as_deref().map_or(true, |t| t.trim().is_empty()) {
            result.add_warning("tax number not set");
        }

        result
    }

    /// Validates and converts straight into a domain result
    pub fn check(draft: &PersonDraft) -> Result<(), PartyError> {
        Self::validate(draft).into_result()
    }
}

fn is_mail_shaped(mail: &str) -> bool {
    match mail.split_once('@') {
        Some((local, domain)) => !local.is_empty() && domain.contains('.'),
        None => false,
    }
}
