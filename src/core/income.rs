//! Monthly income recording.

use crate::{
    entities::monthly_income,
    errors::{Error, Result},
};
use sea_orm::{Set, prelude::*};
use serde::Deserialize;

/// Request payload for recording a month's income.
#[derive(Debug, Clone, Deserialize)]
pub struct NewIncome {
    /// Monetary amount, non-negative
    pub amount: f64,
    /// `YYYY-MM` month the income belongs to
    pub month_year: String,
    /// Optional source label (salary, freelance, ...)
    pub source: Option<String>,
}

/// Records an income entry for a month.
///
/// Months are not unique: several entries for the same `month_year` are
/// allowed and summed by the reporting queries.
pub async fn add_income(db: &DatabaseConnection, new: NewIncome) -> Result<monthly_income::Model> {
    crate::core::validate_amount(new.amount)?;
    if new.month_year.trim().is_empty() {
        return Err(Error::Validation {
            message: "month_year cannot be empty".to_string(),
        });
    }

    let model = monthly_income::ActiveModel {
        amount: Set(new.amount),
        month_year: Set(new.month_year),
        source: Set(new.source),
        created_at: Set(chrono::Utc::now()),
        ..Default::default()
    };

    let result = model.insert(db).await?;
    tracing::info!(
        "Recorded income {} of {:.2} for {}",
        result.id,
        result.amount,
        result.month_year
    );
    Ok(result)
}
