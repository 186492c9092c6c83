//! Rolling-window and month-bucketed expense analytics.

use crate::{
    entities::{
        Category, CommitteePayment, Expense, MonthlyIncome, expense, monthly_income,
    },
    errors::Result,
};
use chrono::Datelike;
use sea_orm::prelude::*;
use serde::Serialize;
use std::collections::BTreeMap;

/// Aggregate figures for a trailing window of days.
#[derive(Debug, Clone, Serialize)]
pub struct WindowAnalytics {
    /// Sum of expense amounts inside the window
    pub total_amount: f64,
    /// Number of expense rows inside the window
    pub transaction_count: usize,
    /// `total_amount / period_days`, or 0 when nothing was spent
    pub daily_average: f64,
    /// Window length in days
    pub period_days: i64,
}

/// One month's bucket in the yearly summary.
#[derive(Debug, Clone, Default, Serialize)]
pub struct MonthSummary {
    /// Per-category expense totals
    pub expenses: BTreeMap<String, f64>,
    /// Category totals plus committee payments
    pub total_expenses: f64,
    /// Income, present only when the month has income rows
    #[serde(skip_serializing_if = "Option::is_none")]
    pub income: Option<f64>,
    /// Committee payments, present only when the month has payments
    #[serde(skip_serializing_if = "Option::is_none")]
    pub committee_payments: Option<f64>,
    /// `income - total_expenses`, with missing income counted as 0
    pub savings: f64,
}

/// Expense totals over the trailing `days`-day window ending at `today`.
///
/// The window is inclusive of the cutoff day and open-ended upward, so
/// future-dated expenses count too.
pub async fn last_n_days_analytics(
    db: &DatabaseConnection,
    today: chrono::NaiveDate,
    days: i64,
) -> Result<WindowAnalytics> {
    let cutoff = today - chrono::Duration::days(days);
    let rows = Expense::find()
        .filter(expense::Column::Date.gte(cutoff))
        .all(db)
        .await?;

    let total_amount: f64 = rows.iter().map(|e| e.amount).sum();
    let transaction_count = rows.len();
    #[allow(clippy::cast_precision_loss)]
    let daily_average = if total_amount > 0.0 {
        total_amount / days as f64
    } else {
        0.0
    };

    Ok(WindowAnalytics {
        total_amount,
        transaction_count,
        daily_average,
        period_days: days,
    })
}

/// Per-month summary covering the year up to `today`.
///
/// The window starts on the first day of this month one year ago and has
/// no upper bound. Months enter the map from expense or income rows;
/// committee payments then fold into months already present, so a month
/// with only committee payments does not appear at all. Months sort
/// lexicographically, which for zero-padded `YYYY-MM` keys is
/// chronological.
pub async fn monthly_summary(
    db: &DatabaseConnection,
    today: chrono::NaiveDate,
) -> Result<BTreeMap<String, MonthSummary>> {
    let start = chrono::NaiveDate::from_ymd_opt(today.year() - 1, today.month(), 1)
        .unwrap_or(today);
    let start_month = crate::core::month_key(start);

    let mut summary: BTreeMap<String, MonthSummary> = BTreeMap::new();

    let expenses = Expense::find()
        .find_also_related(Category)
        .filter(expense::Column::Date.gte(start))
        .all(db)
        .await?;
    for (e, category) in expenses {
        let month = crate::core::month_key(e.date);
        let name = category.map_or_else(String::new, |c| c.name);
        let entry = summary.entry(month).or_default();
        *entry.expenses.entry(name).or_insert(0.0) += e.amount;
        entry.total_expenses += e.amount;
    }

    let incomes = MonthlyIncome::find()
        .filter(monthly_income::Column::MonthYear.gte(start_month.as_str()))
        .all(db)
        .await?;
    for income in incomes {
        let entry = summary.entry(income.month_year).or_default();
        *entry.income.get_or_insert(0.0) += income.amount;
    }

    // Committee payments only land in months that already exist; a month
    // with nothing but committee payments stays absent.
    let payments = CommitteePayment::find().all(db).await?;
    let mut by_month: BTreeMap<String, f64> = BTreeMap::new();
    for payment in payments {
        *by_month.entry(payment.month_year).or_insert(0.0) += payment.amount;
    }
    for (month, total) in by_month {
        if let Some(entry) = summary.get_mut(&month) {
            entry.committee_payments = Some(total);
            entry.total_expenses += total;
        }
    }

    for entry in summary.values_mut() {
        entry.savings = entry.income.unwrap_or(0.0) - entry.total_expenses;
    }

    Ok(summary)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::core::committee::{NewCommitteePayment, add_committee_payment};
    use crate::test_utils::{
        create_test_committee, create_test_expense, create_test_income, setup_test_db,
    };

    fn day(s: &str) -> chrono::NaiveDate {
        s.parse().unwrap()
    }

    #[tokio::test]
    async fn test_window_totals_and_average() -> Result<()> {
        let db = setup_test_db().await?;
        let today = day("2024-03-21");

        create_test_expense(&db, 100.0, "2024-03-20").await?;
        create_test_expense(&db, 60.0, "2024-03-01").await?; // on the cutoff
        create_test_expense(&db, 999.0, "2024-02-28").await?; // outside

        let analytics = last_n_days_analytics(&db, today, 20).await?;
        assert_eq!(analytics.total_amount, 160.0);
        assert_eq!(analytics.transaction_count, 2);
        assert_eq!(analytics.daily_average, 8.0);
        assert_eq!(analytics.period_days, 20);

        Ok(())
    }

    #[tokio::test]
    async fn test_window_empty_average_is_zero() -> Result<()> {
        let db = setup_test_db().await?;

        let analytics = last_n_days_analytics(&db, day("2024-03-21"), 20).await?;
        assert_eq!(analytics.total_amount, 0.0);
        assert_eq!(analytics.transaction_count, 0);
        assert_eq!(analytics.daily_average, 0.0);

        Ok(())
    }

    #[tokio::test]
    async fn test_summary_groups_by_month_and_category() -> Result<()> {
        let db = setup_test_db().await?;

        create_test_expense(&db, 30.0, "2024-03-05").await?;
        create_test_expense(&db, 20.0, "2024-03-15").await?;
        create_test_income(&db, 1000.0, "2024-03").await?;

        let summary = monthly_summary(&db, day("2024-03-20")).await?;
        let march = summary.get("2024-03").unwrap();
        assert_eq!(march.total_expenses, 50.0);
        assert_eq!(*march.expenses.get("Others").unwrap(), 50.0);
        assert_eq!(march.income, Some(1000.0));
        assert_eq!(march.savings, 950.0);

        Ok(())
    }

    #[tokio::test]
    async fn test_summary_window_excludes_old_months() -> Result<()> {
        let db = setup_test_db().await?;

        create_test_expense(&db, 10.0, "2023-02-28").await?; // before the window
        create_test_expense(&db, 20.0, "2023-03-01").await?; // first day inside

        let summary = monthly_summary(&db, day("2024-03-20")).await?;
        assert!(!summary.contains_key("2023-02"));
        assert_eq!(summary.get("2023-03").unwrap().total_expenses, 20.0);

        Ok(())
    }

    #[tokio::test]
    async fn test_committee_only_month_is_absent() -> Result<()> {
        let db = setup_test_db().await?;
        let c = create_test_committee(&db, "C").await?;

        // The payment's mirrored expense lands in March, so delete it to
        // leave a month holding only the payment row.
        add_committee_payment(
            &db,
            c.id,
            NewCommitteePayment {
                amount: 100.0,
                payment_date: Some("2024-03-10".to_string()),
                month_year: None,
            },
        )
        .await?;
        Expense::delete_many().exec(&db).await?;

        create_test_income(&db, 500.0, "2024-02").await?;

        let summary = monthly_summary(&db, day("2024-03-20")).await?;
        assert!(!summary.contains_key("2024-03"));
        assert!(summary.contains_key("2024-02"));

        Ok(())
    }

    #[tokio::test]
    async fn test_income_only_month_gets_committee_folded() -> Result<()> {
        let db = setup_test_db().await?;
        let c = create_test_committee(&db, "C").await?;

        add_committee_payment(
            &db,
            c.id,
            NewCommitteePayment {
                amount: 100.0,
                payment_date: Some("2024-03-10".to_string()),
                month_year: None,
            },
        )
        .await?;
        Expense::delete_many().exec(&db).await?;
        create_test_income(&db, 500.0, "2024-03").await?;

        let summary = monthly_summary(&db, day("2024-03-20")).await?;
        let march = summary.get("2024-03").unwrap();
        assert_eq!(march.committee_payments, Some(100.0));
        assert_eq!(march.total_expenses, 100.0);
        assert_eq!(march.savings, 400.0);

        Ok(())
    }
}
