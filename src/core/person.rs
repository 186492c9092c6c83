//! Person provisioning for loan counterparties.

use crate::{
    entities::{Person, person},
    errors::Result,
};
use sea_orm::{Set, prelude::*};

/// Resolves a person by exact, case-sensitive name, creating them if absent.
///
/// Newly created people start with no contact details; those can only come
/// from a later enrichment path. Runs against any connection so the caller
/// can wrap the lookup-and-insert in its own transaction.
pub async fn get_or_create_person<C>(db: &C, name: &str) -> Result<person::Model>
where
    C: ConnectionTrait,
{
    if let Some(existing) = Person::find()
        .filter(person::Column::Name.eq(name))
        .one(db)
        .await?
    {
        return Ok(existing);
    }

    let model = person::ActiveModel {
        name: Set(name.to_string()),
        contact: Set(None),
        email: Set(None),
        created_at: Set(chrono::Utc::now()),
        ..Default::default()
    };

    let result = model.insert(db).await?;
    Ok(result)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::setup_test_db;

    #[tokio::test]
    async fn test_get_or_create_person_idempotent() -> Result<()> {
        let db = setup_test_db().await?;

        let first = get_or_create_person(&db, "Alice").await?;
        let second = get_or_create_person(&db, "Alice").await?;
        assert_eq!(first.id, second.id);

        let count = Person::find().count(&db).await?;
        assert_eq!(count, 1);

        Ok(())
    }

    #[tokio::test]
    async fn test_exact_name_match() -> Result<()> {
        let db = setup_test_db().await?;

        let alice = get_or_create_person(&db, "Alice").await?;
        let alice_lower = get_or_create_person(&db, "alice").await?;
        assert_ne!(alice.id, alice_lower.id);

        Ok(())
    }
}
