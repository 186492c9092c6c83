//! Person entity - Counterparties that loans are tracked against.
//!
//! A person is identified by an exact, case-sensitive unique name and is
//! provisioned on first use by the find-or-create path in loan recording.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Person database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "persons")]
pub struct Model {
    /// Unique identifier for the person
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Display name, unique and matched exactly on lookup
    #[sea_orm(unique)]
    pub name: String,
    /// Optional contact number
    pub contact: Option<String>,
    /// Optional email address
    pub email: Option<String>,
    /// When the person was first recorded
    pub created_at: DateTimeUtc,
}

/// Defines relationships between Person and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One person has many loans
    #[sea_orm(has_many = "super::loan::Entity")]
    Loans,
}

impl Related<super::loan::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Loans.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
