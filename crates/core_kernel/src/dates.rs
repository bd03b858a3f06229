//! Date conversion between the display format and the ISO wire format
//!
//! User-facing date fields carry `dd.mm.yyyy` text; the record store carries
//! ISO `yyyy-mm-dd`. The two conversions are total for valid calendar dates
//! and inverses of each other on the canonical forms. A string already in
//! the target format passes through unchanged.
//!
//! Parsing accepts unpadded day and month (`1.2.2024`); the canonical
//! display form is always zero-padded (`01.02.2024`).

use chrono::NaiveDate;
use thiserror::Error;

/// Display format used in forms and tables
pub const DISPLAY_FORMAT: &str = "%d.%m.%Y";

/// ISO format used on the wire and in storage
pub const ISO_FORMAT: &str = "%Y-%m-%d";

/// Errors raised by date conversion
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateError {
    #[error("empty date")]
    Empty,

    #[error("'{0}' is not a valid date")]
    Unparseable(String),
}

/// Parses a date in either accepted form.
///
/// Dotted input is read as `dd.mm.yyyy`, dashed input as ISO `yyyy-mm-dd`.
pub fn parse_date(input: &str) -> Result<NaiveDate, DateError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(DateError::Empty);
    }

    let format = if trimmed.contains('.') {
        DISPLAY_FORMAT
    } else {
        ISO_FORMAT
    };

    NaiveDate::parse_from_str(trimmed, format)
        .map_err(|_| DateError::Unparseable(trimmed.to_string()))
}

/// Converts a display-format date to ISO form.
///
/// Input already in ISO form is validated and returned as-is.
pub fn display_to_iso(input: &str) -> Result<String, DateError> {
    Ok(parse_date(input)?.format(ISO_FORMAT).to_string())
}

/// Converts an ISO date to the display form.
///
/// Input already in display form is validated and returned canonically
/// padded.
pub fn iso_to_display(input: &str) -> Result<String, DateError> {
    Ok(parse_date(input)?.format(DISPLAY_FORMAT).to_string())
}
