//! Loan routes.

use super::{ApiError, ApiResult, AppState};
use crate::core::loan;
use axum::{Json, Router, extract::State, http::StatusCode, routing::get};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Routes handled by this module.
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/loans", get(list_loans).post(add_loan))
}

async fn list_loans(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<BTreeMap<String, loan::PersonLoanSummary>>> {
    let summary = loan::loans_by_person(&state.db).await?;
    Ok(Json(summary))
}

async fn add_loan(
    State(state): State<Arc<AppState>>,
    Json(new): Json<loan::NewLoan>,
) -> ApiResult<(StatusCode, Json<serde_json::Value>)> {
    let created = loan::add_loan(&state.db, new)
        .await
        .map_err(|e| ApiError::action(e, "add loan"))?;

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({
            "message": "Loan added successfully",
            "id": created.id,
        })),
    ))
}
