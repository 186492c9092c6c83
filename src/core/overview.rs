//! Dashboard, status, and per-month net-value aggregations.
//!
//! Month filtering compares `YYYY-MM` string keys derived from row dates,
//! so an out-of-range month such as "2024-13" simply matches nothing and
//! yields zeros rather than an error.

use crate::{
    entities::{CommitteePayment, Expense, Loan, MonthlyIncome, committee_payment, monthly_income},
    errors::{Error, Result},
};
use sea_orm::prelude::*;
use serde::Serialize;

/// The dashboard snapshot for the current month.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardOverview {
    /// Current-month expenses plus current-month committee payments
    pub monthly_expenses: f64,
    /// Current-month committee payments alone
    pub committee_payments: f64,
    /// All-time loans given
    pub total_given: f64,
    /// All-time loans taken
    pub total_taken: f64,
    /// All-time repayments received
    pub total_received_back: f64,
    /// `total_given - total_taken - total_received_back`
    pub net_loan: f64,
    /// Current-month income
    pub monthly_income: f64,
    /// `monthly_income - monthly_expenses`
    pub total_savings: f64,
    /// `total_savings + net_loan`
    pub net_worth: f64,
    /// The `YYYY-MM` key the snapshot covers
    pub current_month: String,
}

/// All-time totals kept for callers of the legacy status route.
#[derive(Debug, Clone, Serialize)]
pub struct StatusSummary {
    /// All-time expense total
    pub total_expenses: f64,
    /// All-time loans given
    pub total_loans_given: f64,
    /// All-time loans taken
    pub total_loans_taken: f64,
    /// `total_loans_given - total_loans_taken`; repayments do not count here
    pub net_balance: f64,
}

/// Every derived figure for one month.
#[derive(Debug, Clone, Serialize)]
pub struct NetValues {
    /// The requested `YYYY-MM` key
    pub month: String,
    /// Loans given during the month
    pub loan_given: f64,
    /// Loans taken during the month
    pub loan_taken: f64,
    /// Repayments received during the month
    pub loan_received_back: f64,
    /// `loan_given - loan_taken - loan_received_back` for the month
    pub net_loan: f64,
    /// Income recorded for the month
    pub income: f64,
    /// Month expenses plus month committee payments
    pub total_expenses: f64,
    /// Month committee payments alone
    pub committee_payments: f64,
    /// `income - total_expenses`
    pub total_savings: f64,
    /// `total_savings + net_loan`
    pub net_worth: f64,
}

/// Per-kind loan totals, optionally scoped to one `YYYY-MM` month.
async fn loan_totals(db: &DatabaseConnection, month: Option<&str>) -> Result<(f64, f64, f64)> {
    let rows = Loan::find().all(db).await?;

    let mut given = 0.0;
    let mut taken = 0.0;
    let mut received_back = 0.0;
    for row in rows {
        if let Some(month) = month
            && crate::core::month_key(row.date) != month
        {
            continue;
        }
        match row.loan_type.as_str() {
            "given" => given += row.amount,
            "taken" => taken += row.amount,
            "received_back" => received_back += row.amount,
            _ => {}
        }
    }
    Ok((given, taken, received_back))
}

/// Expense, committee-payment, and income sums for one `YYYY-MM` month.
async fn month_sums(db: &DatabaseConnection, month: &str) -> Result<(f64, f64, f64)> {
    let expenses: f64 = Expense::find()
        .all(db)
        .await?
        .into_iter()
        .filter(|e| crate::core::month_key(e.date) == month)
        .map(|e| e.amount)
        .sum();

    let committee: f64 = CommitteePayment::find()
        .filter(committee_payment::Column::MonthYear.eq(month))
        .all(db)
        .await?
        .into_iter()
        .map(|p| p.amount)
        .sum();

    let income: f64 = MonthlyIncome::find()
        .filter(monthly_income::Column::MonthYear.eq(month))
        .all(db)
        .await?
        .into_iter()
        .map(|i| i.amount)
        .sum();

    Ok((expenses, committee, income))
}

/// Builds the dashboard snapshot for the month containing `today`.
///
/// Committee payments count twice on purpose: once inside
/// `monthly_expenses` (each payment already mirrors an Expense row) and
/// once in the standalone `committee_payments` figure that is also added
/// on top. Loan totals are all-time, not month-scoped.
pub async fn monthly_overview(
    db: &DatabaseConnection,
    today: chrono::NaiveDate,
) -> Result<DashboardOverview> {
    let current_month = crate::core::month_key(today);
    let (expenses, committee_payments, monthly_income) = month_sums(db, &current_month).await?;
    let (total_given, total_taken, total_received_back) = loan_totals(db, None).await?;

    let monthly_expenses = expenses + committee_payments;
    let net_loan = total_given - total_taken - total_received_back;
    let total_savings = monthly_income - monthly_expenses;
    let net_worth = total_savings + net_loan;

    Ok(DashboardOverview {
        monthly_expenses,
        committee_payments,
        total_given,
        total_taken,
        total_received_back,
        net_loan,
        monthly_income,
        total_savings,
        net_worth,
        current_month,
    })
}

/// All-time expense and loan totals.
///
/// `net_balance` ignores repayments, unlike the dashboard's `net_loan`.
/// Long-standing behavior that downstream consumers rely on.
pub async fn status_summary(db: &DatabaseConnection) -> Result<StatusSummary> {
    let total_expenses: f64 = Expense::find()
        .all(db)
        .await?
        .into_iter()
        .map(|e| e.amount)
        .sum();
    let (total_loans_given, total_loans_taken, _) = loan_totals(db, None).await?;

    Ok(StatusSummary {
        total_expenses,
        total_loans_given,
        total_loans_taken,
        net_balance: total_loans_given - total_loans_taken,
    })
}

/// Computes every derived figure for one `YYYY-MM` month.
///
/// The key must split on `-` into exactly two integer parts; beyond that
/// no range check applies, so "2024-13" is accepted and returns zeros.
pub async fn net_values_for_month(db: &DatabaseConnection, month: &str) -> Result<NetValues> {
    let parts: Vec<&str> = month.split('-').collect();
    let well_formed =
        parts.len() == 2 && parts.iter().all(|part| part.parse::<i32>().is_ok());
    if !well_formed {
        return Err(Error::Validation {
            message: "invalid month format, expected YYYY-MM".to_string(),
        });
    }

    let (expenses, committee_payments, income) = month_sums(db, month).await?;
    let (loan_given, loan_taken, loan_received_back) = loan_totals(db, Some(month)).await?;

    let total_expenses = expenses + committee_payments;
    let net_loan = loan_given - loan_taken - loan_received_back;
    let total_savings = income - total_expenses;
    let net_worth = total_savings + net_loan;

    Ok(NetValues {
        month: month.to_string(),
        loan_given,
        loan_taken,
        loan_received_back,
        net_loan,
        income,
        total_expenses,
        committee_payments,
        total_savings,
        net_worth,
    })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::core::loan::LoanType;
    use crate::test_utils::{
        create_test_committee, create_test_expense, create_test_income, create_test_loan,
        setup_test_db,
    };

    fn day(s: &str) -> chrono::NaiveDate {
        s.parse().unwrap()
    }

    #[tokio::test]
    async fn test_overview_identities() -> Result<()> {
        let db = setup_test_db().await?;

        create_test_expense(&db, 120.0, "2024-03-05").await?;
        create_test_expense(&db, 80.0, "2024-03-20").await?;
        create_test_expense(&db, 999.0, "2024-02-28").await?;
        create_test_income(&db, 5000.0, "2024-03").await?;
        create_test_loan(&db, "Alice", LoanType::Given, 300.0, "2024-01-01").await?;
        create_test_loan(&db, "Bob", LoanType::Taken, 100.0, "2024-03-01").await?;

        let overview = monthly_overview(&db, day("2024-03-15")).await?;
        assert_eq!(overview.current_month, "2024-03");
        assert_eq!(overview.monthly_expenses, 200.0);
        assert_eq!(overview.committee_payments, 0.0);
        assert_eq!(overview.monthly_income, 5000.0);
        assert_eq!(overview.total_savings, 4800.0);
        // Loans are all-time even though the given one predates the month.
        assert_eq!(overview.net_loan, 200.0);
        assert_eq!(overview.net_worth, overview.total_savings + overview.net_loan);

        Ok(())
    }

    #[tokio::test]
    async fn test_overview_counts_committee_payment_twice() -> Result<()> {
        let db = setup_test_db().await?;

        let c = create_test_committee(&db, "C").await?;
        let today = chrono::Utc::now().date_naive();
        crate::core::committee::add_committee_payment(
            &db,
            c.id,
            crate::core::committee::NewCommitteePayment {
                amount: 100.0,
                payment_date: Some(today.to_string()),
                month_year: None,
            },
        )
        .await?;

        let overview = monthly_overview(&db, today).await?;
        // The mirrored expense and the payment itself both contribute.
        assert_eq!(overview.monthly_expenses, 200.0);
        assert_eq!(overview.committee_payments, 100.0);

        Ok(())
    }

    #[tokio::test]
    async fn test_status_ignores_received_back() -> Result<()> {
        let db = setup_test_db().await?;

        create_test_loan(&db, "Alice", LoanType::Given, 100.0, "2024-01-01").await?;
        create_test_loan(&db, "Alice", LoanType::Taken, 30.0, "2024-01-02").await?;
        create_test_loan(&db, "Alice", LoanType::ReceivedBack, 20.0, "2024-01-03").await?;

        let status = status_summary(&db).await?;
        assert_eq!(status.net_balance, 70.0);

        // The dashboard does subtract repayments.
        let overview = monthly_overview(&db, day("2024-01-15")).await?;
        assert_eq!(overview.net_loan, 50.0);

        Ok(())
    }

    #[tokio::test]
    async fn test_net_values_scoped_to_month() -> Result<()> {
        let db = setup_test_db().await?;

        create_test_expense(&db, 50.0, "2024-03-01").await?;
        create_test_expense(&db, 70.0, "2024-04-01").await?;
        create_test_income(&db, 1000.0, "2024-03").await?;
        create_test_loan(&db, "Alice", LoanType::Given, 200.0, "2024-03-10").await?;
        create_test_loan(&db, "Alice", LoanType::ReceivedBack, 50.0, "2024-03-20").await?;
        create_test_loan(&db, "Alice", LoanType::Given, 999.0, "2024-04-10").await?;

        let values = net_values_for_month(&db, "2024-03").await?;
        assert_eq!(values.total_expenses, 50.0);
        assert_eq!(values.loan_given, 200.0);
        assert_eq!(values.loan_received_back, 50.0);
        assert_eq!(values.net_loan, 150.0);
        assert_eq!(values.total_savings, 950.0);
        assert_eq!(values.net_worth, 1100.0);

        Ok(())
    }

    #[tokio::test]
    async fn test_net_values_month_format() -> Result<()> {
        let db = setup_test_db().await?;

        for bad in ["2024", "2024-3-1", "march", "2024-xx"] {
            let result = net_values_for_month(&db, bad).await;
            assert!(matches!(result, Err(Error::Validation { .. })), "{bad}");
        }

        // Well-formed but out of range matches nothing and yields zeros.
        let values = net_values_for_month(&db, "2024-13").await?;
        assert_eq!(values.total_expenses, 0.0);
        assert_eq!(values.net_worth, 0.0);

        Ok(())
    }
}
