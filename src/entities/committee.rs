//! Committee entity - A rotating pooled-savings arrangement.
//!
//! Fixed monthly contributions accumulate toward one expected lump-sum
//! receipt on an expected date.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Committee database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "committees")]
pub struct Model {
    /// Unique identifier for the committee
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Display name of the committee
    pub name: String,
    /// First month of the arrangement
    pub start_date: Date,
    /// Last month of the arrangement
    pub end_date: Date,
    /// Fixed contribution due each month
    pub monthly_amount: f64,
    /// Lump sum expected back
    pub expected_receiving_amount: f64,
    /// Day the lump sum is expected
    pub expected_receiving_date: Date,
    /// Lifecycle status: "active", "completed", or "paused"
    pub status: String,
    /// When the row was created
    pub created_at: DateTimeUtc,
}

/// Defines relationships between Committee and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One committee has many payments
    #[sea_orm(has_many = "super::committee_payment::Entity")]
    Payments,
}

impl Related<super::committee_payment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Payments.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
