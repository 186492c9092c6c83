//! `SQLite` connection and schema management using `SeaORM`.
//!
//! Tables are generated from the entity definitions with
//! `Schema::create_table_from_entity`, so the database schema always
//! matches the Rust structs without hand-written SQL. Startup also seeds
//! the default categories and payment methods a fresh install expects.

use crate::entities::{
    Category, Committee, CommitteePayment, Expense, Loan, MonthlyIncome, PaymentMethod, Person,
    category, payment_method,
};
use crate::errors::Result;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, Database, DatabaseConnection, EntityTrait,
    QueryFilter, Schema, Set,
};

/// Default categories seeded on first start: name, color, icon.
const DEFAULT_CATEGORIES: [(&str, &str, &str); 9] = [
    ("Food", "#e74c3c", "fas fa-utensils"),
    ("Shopping", "#f39c12", "fas fa-shopping-bag"),
    ("Home", "#27ae60", "fas fa-home"),
    ("Sports", "#9b59b6", "fas fa-dumbbell"),
    ("Commute", "#34495e", "fas fa-bus"),
    ("Education", "#e67e22", "fas fa-graduation-cap"),
    ("Trip", "#1abc9c", "fas fa-plane"),
    ("Committee", "#8e44ad", "fas fa-users"),
    ("Others", "#95a5a6", "fas fa-circle"),
];

/// Default payment methods seeded on first start: name, type, details.
const DEFAULT_PAYMENT_METHODS: [(&str, &str, &str); 8] = [
    ("Cash", "cash", "Physical cash payments"),
    ("Credit Card", "card", "Credit card payments"),
    ("Debit Card", "card", "Debit card payments"),
    ("Bank Transfer", "transfer", "Online bank transfers"),
    ("Mobile Wallet", "digital", "Mobile wallet payments"),
    ("UPI", "digital", "UPI payments"),
    ("Cheque", "cheque", "Cheque payments"),
    ("Other", "other", "Other payment methods"),
];

/// Connects to the database named by `database_url`.
pub async fn create_connection(database_url: &str) -> Result<DatabaseConnection> {
    Database::connect(database_url).await.map_err(Into::into)
}

/// Creates all tables from the entity definitions, skipping ones that
/// already exist so startup is rerunnable against a populated store.
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    let mut statements = vec![
        schema.create_table_from_entity(Person),
        schema.create_table_from_entity(Category),
        schema.create_table_from_entity(PaymentMethod),
        schema.create_table_from_entity(Expense),
        schema.create_table_from_entity(Loan),
        schema.create_table_from_entity(Committee),
        schema.create_table_from_entity(CommitteePayment),
        schema.create_table_from_entity(MonthlyIncome),
    ];

    for statement in &mut statements {
        statement.if_not_exists();
        db.execute(builder.build(&*statement)).await?;
    }

    Ok(())
}

/// Seeds the default categories and payment methods, keyed by name so a
/// second start leaves existing rows untouched.
pub async fn seed_default_data(db: &DatabaseConnection) -> Result<()> {
    for (name, color, icon) in DEFAULT_CATEGORIES {
        let exists = Category::find()
            .filter(category::Column::Name.eq(name))
            .one(db)
            .await?
            .is_some();
        if !exists {
            category::ActiveModel {
                name: Set(name.to_string()),
                color: Set(color.to_string()),
                icon: Set(icon.to_string()),
                created_at: Set(chrono::Utc::now()),
                ..Default::default()
            }
            .insert(db)
            .await?;
        }
    }

    for (name, method_type, details) in DEFAULT_PAYMENT_METHODS {
        let exists = PaymentMethod::find()
            .filter(payment_method::Column::Name.eq(name))
            .one(db)
            .await?
            .is_some();
        if !exists {
            payment_method::ActiveModel {
                name: Set(name.to_string()),
                method_type: Set(method_type.to_string()),
                details: Set(Some(details.to_string())),
                is_active: Set(true),
                ..Default::default()
            }
            .insert(db)
            .await?;
        }
    }

    tracing::debug!("Default categories and payment methods seeded");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{PaginatorTrait, QuerySelect};

    #[tokio::test]
    async fn test_create_tables_is_rerunnable() -> Result<()> {
        let db = Database::connect("sqlite::memory:").await?;
        create_tables(&db).await?;
        create_tables(&db).await?;

        let _ = Expense::find().limit(1).all(&db).await?;
        let _ = Committee::find().limit(1).all(&db).await?;

        Ok(())
    }

    #[tokio::test]
    async fn test_seeding_is_idempotent() -> Result<()> {
        let db = Database::connect("sqlite::memory:").await?;
        create_tables(&db).await?;

        seed_default_data(&db).await?;
        seed_default_data(&db).await?;

        assert_eq!(Category::find().count(&db).await?, 9);
        assert_eq!(PaymentMethod::find().count(&db).await?, 8);

        Ok(())
    }

    #[tokio::test]
    async fn test_seeded_committee_category_keeps_its_color() -> Result<()> {
        let db = Database::connect("sqlite::memory:").await?;
        create_tables(&db).await?;
        seed_default_data(&db).await?;

        let committee = crate::core::category::get_or_create_category(&db, "Committee").await?;
        assert_eq!(committee.color, "#8e44ad");
        assert_eq!(committee.icon, "fas fa-users");

        Ok(())
    }
}
