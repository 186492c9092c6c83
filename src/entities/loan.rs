//! Loan entity - Money lent to or borrowed from a person.
//!
//! `loan_type` is one of `"given"`, `"taken"`, or `"received_back"`; the
//! three kinds partition a loan's signed contribution to net balances.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Loan database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "loans")]
pub struct Model {
    /// Unique identifier for the loan
    #[sea_orm(primary_key)]
    pub id: i64,
    /// ID of the person this loan is tracked against
    pub person_id: i64,
    /// Transaction kind: `"given"`, `"taken"`, or `"received_back"`
    pub loan_type: String,
    /// Monetary amount, non-negative
    pub amount: f64,
    /// Optional description
    pub description: Option<String>,
    /// Day the loan transaction happened (defaults to creation day)
    pub date: Date,
    /// Optional repayment due date
    pub due_date: Option<Date>,
    /// Annual interest rate in percent, 0 when interest-free
    pub interest_rate: f64,
    /// Lifecycle status: "active", "paid", or "partial"
    pub status: String,
    /// Optional free-form notes
    pub notes: Option<String>,
    /// When the row was created
    pub created_at: DateTimeUtc,
}

/// Defines relationships between Loan and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each loan belongs to one person
    #[sea_orm(
        belongs_to = "super::person::Entity",
        from = "Column::PersonId",
        to = "super::person::Column::Id"
    )]
    Person,
}

impl Related<super::person::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Person.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
