//! CommitteePayment entity - One monthly contribution toward a committee.
//!
//! Every payment is mirrored by an Expense row (category "Committee") in
//! the same database transaction; the pair commits or rolls back together.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Committee payment database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "committee_payments")]
pub struct Model {
    /// Unique identifier for the payment
    #[sea_orm(primary_key)]
    pub id: i64,
    /// ID of the committee this payment belongs to
    pub committee_id: i64,
    /// Monetary amount, non-negative
    pub amount: f64,
    /// Day the payment was made (defaults to creation day)
    pub payment_date: Date,
    /// Month bucket key in `YYYY-MM` form
    pub month_year: String,
    /// Payment status, "paid" on creation
    pub status: String,
    /// When the row was created
    pub created_at: DateTimeUtc,
}

/// Defines relationships between CommitteePayment and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each payment belongs to one committee
    #[sea_orm(
        belongs_to = "super::committee::Entity",
        from = "Column::CommitteeId",
        to = "super::committee::Column::Id"
    )]
    Committee,
}

impl Related<super::committee::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Committee.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
