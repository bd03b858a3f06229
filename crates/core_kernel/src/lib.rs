//! Core Kernel - Foundational types and utilities for the invoice system
//!
//! This crate provides the fundamental building blocks used across all domain modules:
//! - Strongly-typed entity identifiers
//! - Date conversion between the display format and the ISO wire format
//! - Amount normalization with precise decimal arithmetic
//! - Diacritic-insensitive text search

pub mod dates;
pub mod identifiers;
pub mod numeric;
pub mod ports;
pub mod text;

pub use dates::{display_to_iso, iso_to_display, parse_date, DateError};
pub use identifiers::{InvoiceId, PersonId};
pub use numeric::{parse_amount, AmountError};
pub use ports::PortError;
pub use text::{contains_folded, fold_diacritics};
