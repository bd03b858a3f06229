//! Person domain - buyer and seller business entities
//!
//! A Person is any entity that can appear on an invoice, as the seller or
//! the buyer. Persons have immutable identity and mutable attributes; edits
//! are full replacements at the same identifier. There is no archive state:
//! a person is either present or deleted, and deletion is rejected while
//! any non-archived invoice still references it.

pub mod address;
pub mod error;
pub mod person;
pub mod ports;
pub mod validation;

pub use address::{Address, Country};
pub use error::PartyError;
pub use person::{Person, PersonDraft};
pub use ports::PartyStore;
pub use validation::{PersonValidator, ValidationResult};
