//! Core business logic - framework-agnostic record management and aggregation.
//!
//! All functions here take a database handle explicitly and return `Result`;
//! nothing in this layer knows about HTTP. Aggregations are pure reads that
//! rescan the relevant rows on every call.

/// Trailing-window and twelve-month summaries
pub mod analytics;
/// Category provisioning with deterministic palette cycling
pub mod category;
/// Committee and committee-payment recording with the mirrored expense
pub mod committee;
/// Expense recording and listing
pub mod expense;
/// Monthly income recording
pub mod income;
/// Loan recording, per-person grouping, and the cumulative timeline
pub mod loan;
/// Dashboard overview, status totals, and per-month net values
pub mod overview;
/// Payment method listing
pub mod payment_method;
/// Person provisioning for loan counterparties
pub mod person;

use crate::errors::{Error, Result};
use chrono::NaiveDate;

/// Parses an ISO `YYYY-MM-DD` date string.
pub(crate) fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| Error::Validation {
        message: format!("invalid date format: {value}"),
    })
}

/// Parses an optional ISO date string, defaulting to today.
pub(crate) fn parse_date_or_today(value: Option<&str>) -> Result<NaiveDate> {
    match value {
        Some(v) => parse_date(v),
        None => Ok(chrono::Utc::now().date_naive()),
    }
}

/// Formats the `YYYY-MM` bucket key for a date.
pub(crate) fn month_key(date: NaiveDate) -> String {
    date.format("%Y-%m").to_string()
}

/// Rejects negative or non-finite monetary amounts.
pub(crate) fn validate_amount(amount: f64) -> Result<()> {
    if !amount.is_finite() || amount < 0.0 {
        return Err(Error::InvalidAmount { amount });
    }
    Ok(())
}
