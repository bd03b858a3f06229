//! Shared test support
//!
//! Builders produce valid drafts with every field filled in, so a test only
//! spells out what it actually cares about. Fixtures seed an in-memory
//! store with a small, known data set.

pub mod builders;
pub mod fixtures;

pub use builders::{InvoiceBuilder, PersonBuilder};
pub use fixtures::seeded_store;
