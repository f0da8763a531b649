//! Core business logic - framework-agnostic menu, catalog and procurement operations.
//!
//! Every function takes a database connection and returns [`crate::errors::Result`].
//! Nothing in here logs or formats for display; that is left to
//! [`crate::actions`] and the binary.

/// Per-day menu status counts for calendar views
pub mod calendar;
/// Ingredient and supplier reference data
pub mod catalog;
/// Menu persistence: save, submit, load, delete
pub mod menu;
/// Ingredient aggregation, assignment tracking and purchase orders
pub mod procurement;
/// Seeding the catalog from configuration
pub mod seed;

use crate::errors::{Error, Result};
use chrono::NaiveDate;

/// Storage and wire format of calendar dates
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses a `YYYY-MM-DD` date supplied by a caller.
///
/// Leading and trailing whitespace is ignored.
///
/// # Errors
/// - [`Error::Validation`] if the input is empty
/// - [`Error::InvalidDate`] if it is not a valid calendar date
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(Error::validation("date is required"));
    }
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT).map_err(|_| Error::InvalidDate {
        value: input.to_string(),
    })
}

/// Formats a date the way it is stored and exchanged.
#[must_use]
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Rejects quantities that are negative, NaN or infinite.
pub(crate) fn validate_quantity(quantity: f64) -> Result<()> {
    if !quantity.is_finite() || quantity < 0.0 {
        return Err(Error::InvalidQuantity { quantity });
    }
    Ok(())
}

/// Trims `value` and rejects it when nothing is left.
pub(crate) fn require_text(value: &str, what: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(Error::validation(format!("{what} cannot be empty")));
    }
    Ok(trimmed.to_string())
}

/// Trims an optional note, mapping blank text to `None`.
pub(crate) fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
