//! Expense routes plus the category and payment-method lookups.

use super::{ApiError, ApiResult, AppState};
use crate::core::{category, expense, payment_method};
use axum::{Json, Router, extract::State, http::StatusCode, routing::get};
use std::sync::Arc;

/// Routes handled by this module.
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/expenses", get(list_expenses).post(add_expense))
        .route("/categories", get(list_categories))
        .route("/payment-methods", get(list_payment_methods))
}

async fn list_expenses(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<expense::ExpenseRecord>>> {
    let expenses = expense::list_expenses(&state.db).await?;
    Ok(Json(expenses))
}

async fn add_expense(
    State(state): State<Arc<AppState>>,
    Json(new): Json<expense::NewExpense>,
) -> ApiResult<(StatusCode, Json<serde_json::Value>)> {
    let created = expense::add_expense(&state.db, new)
        .await
        .map_err(|e| ApiError::action(e, "add expense"))?;

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({
            "message": "Expense added successfully",
            "id": created.id,
            "amount": created.amount,
            "date": created.date.to_string(),
        })),
    ))
}

async fn list_categories(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<category::CategoryRecord>>> {
    let categories = category::list_categories(&state.db).await?;
    Ok(Json(categories))
}

async fn list_payment_methods(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<payment_method::PaymentMethodRecord>>> {
    let methods = payment_method::list_payment_methods(&state.db).await?;
    Ok(Json(methods))
}
