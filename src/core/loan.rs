//! Loan recording, per-person grouping, and the cumulative timeline.

use crate::{
    entities::{Loan, Person, loan},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, Set, TransactionTrait, prelude::*};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The three loan transaction kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoanType {
    /// Money lent out; increases the net position
    Given,
    /// Money borrowed; decreases the net position
    Taken,
    /// Repayment of a previously given loan; decreases the net position
    ReceivedBack,
}

impl LoanType {
    /// Storage form of the kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Given => "given",
            Self::Taken => "taken",
            Self::ReceivedBack => "received_back",
        }
    }
}

/// Request payload for recording a loan transaction.
#[derive(Debug, Clone, Deserialize)]
pub struct NewLoan {
    /// Counterparty name; resolved or created by exact match
    pub person_name: String,
    /// Transaction kind
    pub loan_type: LoanType,
    /// Monetary amount, non-negative
    pub amount: f64,
    /// Optional description
    pub description: Option<String>,
    /// ISO `YYYY-MM-DD` date; defaults to today
    pub date: Option<String>,
    /// Optional ISO due date
    pub due_date: Option<String>,
    /// Annual interest rate in percent; defaults to 0
    pub interest_rate: Option<f64>,
    /// Optional notes
    pub notes: Option<String>,
}

/// One loan transaction inside a person's grouped summary.
#[derive(Debug, Clone, Serialize)]
pub struct LoanTransaction {
    /// Row id
    pub id: i64,
    /// Transaction kind
    #[serde(rename = "type")]
    pub loan_type: String,
    /// Monetary amount
    pub amount: f64,
    /// Day of the transaction
    pub date: chrono::NaiveDate,
    /// Optional description
    pub description: Option<String>,
    /// Lifecycle status
    pub status: String,
    /// Optional due date
    pub due_date: Option<chrono::NaiveDate>,
    /// Interest rate in percent
    pub interest_rate: f64,
}

/// Per-person loan totals plus the person's individual transactions.
#[derive(Debug, Clone, Serialize)]
pub struct PersonLoanSummary {
    /// Row id of the person
    pub person_id: i64,
    /// Sum of given amounts
    pub given: f64,
    /// Sum of taken amounts
    pub taken: f64,
    /// Sum of received-back amounts
    pub received_back: f64,
    /// `given - taken - received_back`
    pub net_amount: f64,
    /// Transactions sorted by id ascending
    pub transactions: Vec<LoanTransaction>,
}

/// One point on the cumulative loan timeline.
#[derive(Debug, Clone, Serialize)]
pub struct TimelinePoint {
    /// Day of the loan transaction
    pub date: chrono::NaiveDate,
    /// `YYYY-MM` bucket of the date
    pub month: String,
    /// Transaction kind
    #[serde(rename = "type")]
    pub loan_type: String,
    /// Monetary amount
    pub amount: f64,
    /// Running net position after applying this transaction
    pub cumulative_net: f64,
    /// Counterparty name
    pub person: String,
    /// Optional description
    pub description: Option<String>,
}

/// Records a loan transaction, resolving or creating the counterparty.
///
/// Person resolution and the loan insert share one database transaction.
pub async fn add_loan(db: &DatabaseConnection, new: NewLoan) -> Result<loan::Model> {
    crate::core::validate_amount(new.amount)?;
    if new.person_name.trim().is_empty() {
        return Err(Error::Validation {
            message: "person_name cannot be empty".to_string(),
        });
    }
    let date = crate::core::parse_date_or_today(new.date.as_deref())?;
    let due_date = new
        .due_date
        .as_deref()
        .map(crate::core::parse_date)
        .transpose()?;

    let txn = db.begin().await?;

    let person = crate::core::person::get_or_create_person(&txn, &new.person_name).await?;

    let model = loan::ActiveModel {
        person_id: Set(person.id),
        loan_type: Set(new.loan_type.as_str().to_string()),
        amount: Set(new.amount),
        description: Set(new.description),
        date: Set(date),
        due_date: Set(due_date),
        interest_rate: Set(new.interest_rate.unwrap_or(0.0)),
        status: Set("active".to_string()),
        notes: Set(new.notes),
        created_at: Set(chrono::Utc::now()),
        ..Default::default()
    };
    let result = model.insert(&txn).await?;

    txn.commit().await?;

    tracing::info!(
        "Recorded {} loan {} of {:.2} against '{}'",
        result.loan_type,
        result.id,
        result.amount,
        person.name
    );
    Ok(result)
}

/// Groups all loans by person name with per-kind totals and net amounts.
pub async fn loans_by_person(
    db: &DatabaseConnection,
) -> Result<BTreeMap<String, PersonLoanSummary>> {
    let rows = Loan::find()
        .find_also_related(Person)
        .order_by_asc(loan::Column::Id)
        .all(db)
        .await?;

    let mut summary: BTreeMap<String, PersonLoanSummary> = BTreeMap::new();
    for (loan, person) in rows {
        let name = person.map_or_else(String::new, |p| p.name);
        let entry = summary.entry(name).or_insert_with(|| PersonLoanSummary {
            person_id: loan.person_id,
            given: 0.0,
            taken: 0.0,
            received_back: 0.0,
            net_amount: 0.0,
            transactions: Vec::new(),
        });

        match loan.loan_type.as_str() {
            "given" => entry.given += loan.amount,
            "taken" => entry.taken += loan.amount,
            "received_back" => entry.received_back += loan.amount,
            _ => {}
        }

        entry.transactions.push(LoanTransaction {
            id: loan.id,
            loan_type: loan.loan_type,
            amount: loan.amount,
            date: loan.date,
            description: loan.description,
            status: loan.status,
            due_date: loan.due_date,
            interest_rate: loan.interest_rate,
        });
    }

    for entry in summary.values_mut() {
        entry.net_amount = entry.given - entry.taken - entry.received_back;
    }

    Ok(summary)
}

/// All loans ordered by date with a running signed net position.
///
/// `given` contributes `+amount`; `taken` and `received_back` both
/// contribute `-amount`. Each point carries the cumulative value after
/// applying its own transaction.
pub async fn loan_timeline(db: &DatabaseConnection) -> Result<Vec<TimelinePoint>> {
    let rows = Loan::find()
        .find_also_related(Person)
        .order_by_asc(loan::Column::Date)
        .order_by_asc(loan::Column::Id)
        .all(db)
        .await?;

    let mut timeline = Vec::with_capacity(rows.len());
    let mut cumulative_net = 0.0;
    for (loan, person) in rows {
        match loan.loan_type.as_str() {
            "given" => cumulative_net += loan.amount,
            "taken" | "received_back" => cumulative_net -= loan.amount,
            _ => {}
        }

        timeline.push(TimelinePoint {
            date: loan.date,
            month: crate::core::month_key(loan.date),
            loan_type: loan.loan_type,
            amount: loan.amount,
            cumulative_net,
            person: person.map_or_else(String::new, |p| p.name),
            description: loan.description,
        });
    }

    Ok(timeline)
}
