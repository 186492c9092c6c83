//! Income routes.

use super::{ApiError, ApiResult, AppState};
use crate::core::income;
use axum::{Json, Router, extract::State, http::StatusCode, routing::post};
use std::sync::Arc;

/// Routes handled by this module.
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/income", post(add_income))
}

async fn add_income(
    State(state): State<Arc<AppState>>,
    Json(new): Json<income::NewIncome>,
) -> ApiResult<(StatusCode, Json<serde_json::Value>)> {
    let created = income::add_income(&state.db, new)
        .await
        .map_err(|e| ApiError::action(e, "add income"))?;

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({
            "message": "Income added successfully",
            "id": created.id,
        })),
    ))
}
