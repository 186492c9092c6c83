//! PaymentMethod entity - Ways to pay, with an active flag.
//!
//! Inactive methods are excluded from listing endpoints.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Payment method database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "payment_methods")]
pub struct Model {
    /// Unique identifier for the payment method
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Display name (e.g., "Credit Card", "UPI")
    pub name: String,
    /// Coarse kind: "cash", "card", "transfer", "digital", "cheque", "other"
    #[sea_orm(column_name = "type")]
    pub method_type: String,
    /// Optional free-form details
    pub details: Option<String>,
    /// Whether the method appears in listings
    pub is_active: bool,
}

/// Defines relationships between PaymentMethod and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
