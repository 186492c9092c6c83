//! Category entity - Expense categories with display metadata.
//!
//! Categories are provisioned on demand: unknown names are created with a
//! color and icon assigned by cycling fixed palettes, indexed by the total
//! category count at creation time. Colors therefore repeat once more
//! categories exist than palette entries.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Category database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "categories")]
pub struct Model {
    /// Unique identifier for the category
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Unique category name (e.g., "Food", "Committee")
    #[sea_orm(unique)]
    pub name: String,
    /// Optional free-form description
    pub description: Option<String>,
    /// Display color as a hex string (e.g., "#e74c3c")
    pub color: String,
    /// Display icon class (e.g., "fas fa-utensils")
    pub icon: String,
    /// When the category was created
    pub created_at: DateTimeUtc,
}

/// Defines relationships between Category and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One category has many expenses
    #[sea_orm(has_many = "super::expense::Entity")]
    Expenses,
}

impl Related<super::expense::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Expenses.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
