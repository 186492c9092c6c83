//! Expense entity - Individual spending records.
//!
//! Committee payments mirror themselves into this table under the
//! "Committee" category so committee spend shows up in expense analytics.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Expense database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "expenses")]
pub struct Model {
    /// Unique identifier for the expense
    #[sea_orm(primary_key)]
    pub id: i64,
    /// ID of the category this expense belongs to
    pub category_id: i64,
    /// Monetary amount, non-negative
    pub amount: f64,
    /// Human-readable description of the expense
    pub description: String,
    /// Day the expense occurred (defaults to creation day)
    pub date: Date,
    /// Optional location
    pub location: Option<String>,
    /// Optional free-form notes
    pub notes: Option<String>,
    /// Optional comma-separated tags
    pub tags: Option<String>,
    /// When the row was created
    pub created_at: DateTimeUtc,
    /// When the row was last modified
    pub updated_at: DateTimeUtc,
}

/// Defines relationships between Expense and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each expense belongs to one category
    #[sea_orm(
        belongs_to = "super::category::Entity",
        from = "Column::CategoryId",
        to = "super::category::Column::Id"
    )]
    Category,
}

impl Related<super::category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Category.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
