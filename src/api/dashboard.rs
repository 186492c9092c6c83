//! Dashboard overview and the legacy status route.

use super::{ApiResult, AppState};
use crate::core::overview;
use axum::{Json, Router, extract::State, routing::get};
use std::sync::Arc;

/// Routes handled by this module.
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/dashboard/overview", get(dashboard_overview))
        .route("/status", get(status))
}

async fn dashboard_overview(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<overview::DashboardOverview>> {
    let today = chrono::Utc::now().date_naive();
    let snapshot = overview::monthly_overview(&state.db, today).await?;
    Ok(Json(snapshot))
}

async fn status(State(state): State<Arc<AppState>>) -> ApiResult<Json<overview::StatusSummary>> {
    let summary = overview::status_summary(&state.db).await?;
    Ok(Json(summary))
}
