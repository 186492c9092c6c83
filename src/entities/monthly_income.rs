//! MonthlyIncome entity - Income recorded against a month bucket.
//!
//! Several rows may share the same `month_year`; aggregation sums them.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Monthly income database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "monthly_income")]
pub struct Model {
    /// Unique identifier for the income row
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Monetary amount, non-negative
    pub amount: f64,
    /// Month bucket key in `YYYY-MM` form
    pub month_year: String,
    /// Optional income source label
    pub source: Option<String>,
    /// When the row was created
    pub created_at: DateTimeUtc,
}

/// Defines relationships between MonthlyIncome and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
