//! Payment method listing.

use crate::{
    entities::{PaymentMethod, payment_method},
    errors::Result,
};
use sea_orm::{QueryOrder, prelude::*};
use serde::Serialize;

/// A payment method as listed over the wire.
#[derive(Debug, Clone, Serialize)]
pub struct PaymentMethodRecord {
    /// Row id
    pub id: i64,
    /// Display name
    pub name: String,
    /// Kind of instrument (cash, card, transfer, ...)
    #[serde(rename = "type")]
    pub method_type: String,
    /// Optional free-form details
    pub details: Option<String>,
}

/// Lists active payment methods in creation order. Inactive ones are
/// retired, not deleted, so old expenses can keep referring to them.
pub async fn list_payment_methods(db: &DatabaseConnection) -> Result<Vec<PaymentMethodRecord>> {
    let methods = PaymentMethod::find()
        .filter(payment_method::Column::IsActive.eq(true))
        .order_by_asc(payment_method::Column::Id)
        .all(db)
        .await?;

    Ok(methods
        .into_iter()
        .map(|m| PaymentMethodRecord {
            id: m.id,
            name: m.name,
            method_type: m.method_type,
            details: m.details,
        })
        .collect())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::setup_test_db;
    use sea_orm::Set;

    #[tokio::test]
    async fn test_lists_only_active_methods() -> Result<()> {
        let db = setup_test_db().await?;

        for (name, active) in [("Cash", true), ("Old Card", false)] {
            payment_method::ActiveModel {
                name: Set(name.to_string()),
                method_type: Set("cash".to_string()),
                details: Set(None),
                is_active: Set(active),
                ..Default::default()
            }
            .insert(&db)
            .await?;
        }

        let listed = list_payment_methods(&db).await?;
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].name, "Cash");

        Ok(())
    }
}
