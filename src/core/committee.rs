//! Committee and committee-payment recording.
//!
//! Recording a payment also materializes a mirrored Expense row under the
//! "Committee" category so committee spend shows up in expense analytics.
//! The payment and its mirror commit in one database transaction: both
//! persist or neither does.

use crate::{
    entities::{Committee, CommitteePayment, committee, committee_payment, expense},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, Set, TransactionTrait, prelude::*};
use serde::{Deserialize, Serialize};

/// Request payload for creating a committee.
#[derive(Debug, Clone, Deserialize)]
pub struct NewCommittee {
    /// Display name
    pub name: String,
    /// ISO first month date
    pub start_date: String,
    /// ISO last month date
    pub end_date: String,
    /// Fixed monthly contribution
    pub monthly_amount: f64,
    /// Lump sum expected back
    pub expected_receiving_amount: f64,
    /// ISO date the lump sum is expected
    pub expected_receiving_date: String,
}

/// Request payload for recording a committee payment.
#[derive(Debug, Clone, Deserialize)]
pub struct NewCommitteePayment {
    /// Monetary amount, non-negative
    pub amount: f64,
    /// ISO payment date; defaults to today
    pub payment_date: Option<String>,
    /// `YYYY-MM` bucket; defaults to the payment date's month
    pub month_year: Option<String>,
}

/// One payment inside a committee's summary.
#[derive(Debug, Clone, Serialize)]
pub struct CommitteePaymentRecord {
    /// Row id
    pub id: i64,
    /// Monetary amount
    pub amount: f64,
    /// Day the payment was made
    pub payment_date: chrono::NaiveDate,
    /// Month bucket key
    pub month_year: String,
    /// Payment status
    pub status: String,
}

/// A committee with its accumulated payments.
#[derive(Debug, Clone, Serialize)]
pub struct CommitteeSummary {
    /// Row id
    pub id: i64,
    /// Display name
    pub name: String,
    /// First month of the arrangement
    pub start_date: chrono::NaiveDate,
    /// Last month of the arrangement
    pub end_date: chrono::NaiveDate,
    /// Fixed monthly contribution
    pub monthly_amount: f64,
    /// Lump sum expected back
    pub expected_receiving_amount: f64,
    /// Day the lump sum is expected
    pub expected_receiving_date: chrono::NaiveDate,
    /// Lifecycle status
    pub status: String,
    /// Sum of all payment amounts
    pub total_paid: f64,
    /// Individual payments
    pub payments: Vec<CommitteePaymentRecord>,
}

/// Creates a committee.
pub async fn add_committee(db: &DatabaseConnection, new: NewCommittee) -> Result<committee::Model> {
    crate::core::validate_amount(new.monthly_amount)?;
    crate::core::validate_amount(new.expected_receiving_amount)?;
    if new.name.trim().is_empty() {
        return Err(Error::Validation {
            message: "name cannot be empty".to_string(),
        });
    }

    let model = committee::ActiveModel {
        name: Set(new.name),
        start_date: Set(crate::core::parse_date(&new.start_date)?),
        end_date: Set(crate::core::parse_date(&new.end_date)?),
        monthly_amount: Set(new.monthly_amount),
        expected_receiving_amount: Set(new.expected_receiving_amount),
        expected_receiving_date: Set(crate::core::parse_date(&new.expected_receiving_date)?),
        status: Set("active".to_string()),
        created_at: Set(chrono::Utc::now()),
        ..Default::default()
    };

    let result = model.insert(db).await?;
    Ok(result)
}

/// Records a committee payment and its mirrored expense atomically.
///
/// Looks up the committee, inserts the payment, resolves the "Committee"
/// category, and inserts the mirrored Expense - all inside one database
/// transaction. If any step fails the whole operation rolls back.
pub async fn add_committee_payment(
    db: &DatabaseConnection,
    committee_id: i64,
    new: NewCommitteePayment,
) -> Result<committee_payment::Model> {
    crate::core::validate_amount(new.amount)?;
    let payment_date = crate::core::parse_date_or_today(new.payment_date.as_deref())?;
    let month_year = new
        .month_year
        .unwrap_or_else(|| crate::core::month_key(payment_date));

    let txn = db.begin().await?;

    let target = Committee::find_by_id(committee_id)
        .one(&txn)
        .await?
        .ok_or(Error::CommitteeNotFound { id: committee_id })?;

    let now = chrono::Utc::now();
    let payment = committee_payment::ActiveModel {
        committee_id: Set(committee_id),
        amount: Set(new.amount),
        payment_date: Set(payment_date),
        month_year: Set(month_year),
        status: Set("paid".to_string()),
        created_at: Set(now),
        ..Default::default()
    };
    let payment = payment.insert(&txn).await?;

    // Mirror into expenses so committee spend appears in expense analytics.
    let category = crate::core::category::get_or_create_category(&txn, "Committee").await?;
    let mirror = expense::ActiveModel {
        category_id: Set(category.id),
        amount: Set(new.amount),
        description: Set(format!("Committee Payment - {}", target.name)),
        date: Set(payment_date),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };
    mirror.insert(&txn).await?;

    txn.commit().await?;

    tracing::info!(
        "Recorded payment {} of {:.2} for committee '{}' ({})",
        payment.id,
        payment.amount,
        target.name,
        payment.month_year
    );
    Ok(payment)
}

/// Lists all committees with their payments and per-committee totals.
pub async fn committees_with_totals(db: &DatabaseConnection) -> Result<Vec<CommitteeSummary>> {
    let rows = Committee::find()
        .find_with_related(CommitteePayment)
        .order_by_asc(committee::Column::Id)
        .all(db)
        .await?;

    Ok(rows
        .into_iter()
        .map(|(c, payments)| {
            let total_paid = payments.iter().map(|p| p.amount).sum();
            CommitteeSummary {
                id: c.id,
                name: c.name,
                start_date: c.start_date,
                end_date: c.end_date,
                monthly_amount: c.monthly_amount,
                expected_receiving_amount: c.expected_receiving_amount,
                expected_receiving_date: c.expected_receiving_date,
                status: c.status,
                total_paid,
                payments: payments
                    .into_iter()
                    .map(|p| CommitteePaymentRecord {
                        id: p.id,
                        amount: p.amount,
                        payment_date: p.payment_date,
                        month_year: p.month_year,
                        status: p.status,
                    })
                    .collect(),
            }
        })
        .collect())
}
