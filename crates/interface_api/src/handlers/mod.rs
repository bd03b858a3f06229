//! Request handlers

pub mod health;
pub mod identification;
pub mod invoice;
pub mod person;
pub mod statistics;
