//! Request/response data transfer objects
//!
//! The wire contract is camelCase with `_id` for identifiers. Responses
//! flatten the address into top-level fields and embed the full seller and
//! buyer records on invoices; requests accept seller/buyer as a bare
//! identifier or as an `{"_id": n}` object.

pub mod invoice;
pub mod person;
pub mod statistics;
