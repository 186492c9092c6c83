//! Expense recording and listing.

use crate::{
    entities::{Category, Expense, expense},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, Set, TransactionTrait, prelude::*};
use serde::{Deserialize, Serialize};

/// Request payload for recording an expense.
#[derive(Debug, Clone, Deserialize)]
pub struct NewExpense {
    /// Monetary amount, non-negative
    pub amount: f64,
    /// Description of the expense
    pub description: String,
    /// Category name; resolved or created, defaults to "Others"
    pub category: Option<String>,
    /// ISO `YYYY-MM-DD` date; defaults to today
    pub date: Option<String>,
    /// Optional location
    pub location: Option<String>,
    /// Optional notes
    pub notes: Option<String>,
    /// Optional comma-separated tags
    pub tags: Option<String>,
}

/// An expense as listed over the wire, joined with its category metadata.
#[derive(Debug, Clone, Serialize)]
pub struct ExpenseRecord {
    /// Row id
    pub id: i64,
    /// Monetary amount
    pub amount: f64,
    /// Description
    pub description: String,
    /// Category name
    pub category: String,
    /// Category display color
    pub category_color: String,
    /// Category display icon
    pub category_icon: String,
    /// Day the expense occurred
    pub date: chrono::NaiveDate,
    /// Optional location
    pub location: Option<String>,
    /// Optional notes
    pub notes: Option<String>,
    /// Optional tags
    pub tags: Option<String>,
    /// Creation timestamp
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// Records an expense, resolving or creating its category.
///
/// Category resolution and the expense insert run inside one database
/// transaction so a half-provisioned category never outlives a failed
/// expense insert.
pub async fn add_expense(db: &DatabaseConnection, new: NewExpense) -> Result<expense::Model> {
    crate::core::validate_amount(new.amount)?;
    if new.description.trim().is_empty() {
        return Err(Error::Validation {
            message: "description cannot be empty".to_string(),
        });
    }
    let date = crate::core::parse_date_or_today(new.date.as_deref())?;

    let txn = db.begin().await?;

    let category_name = new.category.as_deref().unwrap_or("Others");
    let category = crate::core::category::get_or_create_category(&txn, category_name).await?;

    let now = chrono::Utc::now();
    let model = expense::ActiveModel {
        category_id: Set(category.id),
        amount: Set(new.amount),
        description: Set(new.description),
        date: Set(date),
        location: Set(new.location),
        notes: Set(new.notes),
        tags: Set(new.tags),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };
    let result = model.insert(&txn).await?;

    txn.commit().await?;

    tracing::info!(
        "Recorded expense {} of {:.2} in category '{}'",
        result.id,
        result.amount,
        category.name
    );
    Ok(result)
}

/// Lists all expenses ordered by date descending, newest first.
pub async fn list_expenses(db: &DatabaseConnection) -> Result<Vec<ExpenseRecord>> {
    let rows = Expense::find()
        .find_also_related(Category)
        .order_by_desc(expense::Column::Date)
        .order_by_desc(expense::Column::Id)
        .all(db)
        .await?;

    Ok(rows
        .into_iter()
        .map(|(e, category)| {
            let (name, color, icon) = category.map_or_else(
                || (String::new(), String::new(), String::new()),
                |c| (c.name, c.color, c.icon),
            );
            ExpenseRecord {
                id: e.id,
                amount: e.amount,
                description: e.description,
                category: name,
                category_color: color,
                category_icon: icon,
                date: e.date,
                location: e.location,
                notes: e.notes,
                tags: e.tags,
                created_at: e.created_at,
            }
        })
        .collect())
}
