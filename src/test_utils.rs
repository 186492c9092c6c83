//! Shared test helpers.
//!
//! Provides an in-memory database with the full schema plus constructors
//! for the common entities with sensible defaults.

use crate::{
    core::{committee, expense, income, loan},
    entities,
    errors::Result,
};
use sea_orm::DatabaseConnection;

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all tests. Nothing is seeded; tests
/// that need the default categories call `seed_default_data` themselves.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Records an expense with the default category and no optional fields.
pub async fn create_test_expense(
    db: &DatabaseConnection,
    amount: f64,
    date: &str,
) -> Result<entities::expense::Model> {
    expense::add_expense(
        db,
        expense::NewExpense {
            amount,
            description: "test expense".to_string(),
            category: None,
            date: Some(date.to_string()),
            location: None,
            notes: None,
            tags: None,
        },
    )
    .await
}

/// Records a loan transaction against `person`, creating them if needed.
pub async fn create_test_loan(
    db: &DatabaseConnection,
    person: &str,
    loan_type: loan::LoanType,
    amount: f64,
    date: &str,
) -> Result<entities::loan::Model> {
    loan::add_loan(
        db,
        loan::NewLoan {
            person_name: person.to_string(),
            loan_type,
            amount,
            description: None,
            date: Some(date.to_string()),
            due_date: None,
            interest_rate: None,
            notes: None,
        },
    )
    .await
}

/// Creates a committee running through 2024 with fixed amounts.
pub async fn create_test_committee(
    db: &DatabaseConnection,
    name: &str,
) -> Result<entities::committee::Model> {
    committee::add_committee(
        db,
        committee::NewCommittee {
            name: name.to_string(),
            start_date: "2024-01-01".to_string(),
            end_date: "2024-12-01".to_string(),
            monthly_amount: 100.0,
            expected_receiving_amount: 1200.0,
            expected_receiving_date: "2024-12-15".to_string(),
        },
    )
    .await
}

/// Records an income entry for `month_year` with no source.
pub async fn create_test_income(
    db: &DatabaseConnection,
    amount: f64,
    month_year: &str,
) -> Result<entities::monthly_income::Model> {
    income::add_income(
        db,
        income::NewIncome {
            amount,
            month_year: month_year.to_string(),
            source: None,
        },
    )
    .await
}
