//! Reporting routes.

use super::{ApiResult, AppState};
use crate::core::{analytics, loan, overview};
use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Routes handled by this module.
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/analytics/last-20-days", get(last_20_days))
        .route("/analytics/monthly-summary", get(monthly_summary))
        .route("/analytics/loan-timeline", get(loan_timeline))
        .route("/analytics/net-values/{month}", get(net_values))
}

async fn last_20_days(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<analytics::WindowAnalytics>> {
    let today = chrono::Utc::now().date_naive();
    let window = analytics::last_n_days_analytics(&state.db, today, 20).await?;
    Ok(Json(window))
}

async fn monthly_summary(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<BTreeMap<String, analytics::MonthSummary>>> {
    let today = chrono::Utc::now().date_naive();
    let summary = analytics::monthly_summary(&state.db, today).await?;
    Ok(Json(summary))
}

async fn loan_timeline(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<loan::TimelinePoint>>> {
    let timeline = loan::loan_timeline(&state.db).await?;
    Ok(Json(timeline))
}

async fn net_values(
    State(state): State<Arc<AppState>>,
    Path(month): Path<String>,
) -> ApiResult<Json<overview::NetValues>> {
    let values = overview::net_values_for_month(&state.db, &month).await?;
    Ok(Json(values))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use crate::api::{AppState, app_router};
    use crate::core::loan::LoanType;
    use crate::test_utils::{create_test_expense, create_test_loan, setup_test_db};
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use std::sync::Arc;
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_loan_timeline_over_http() {
        let db = setup_test_db().await.unwrap();
        create_test_loan(&db, "Alice", LoanType::Given, 300.0, "2024-01-05")
            .await
            .unwrap();
        create_test_loan(&db, "Alice", LoanType::ReceivedBack, 100.0, "2024-02-05")
            .await
            .unwrap();

        let app = app_router(Arc::new(AppState { db }));
        let response = app
            .oneshot(
                Request::get("/api/analytics/loan-timeline")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        let points = json.as_array().unwrap();
        assert_eq!(points.len(), 2);
        assert_eq!(points[1]["cumulative_net"], 200.0);
        assert_eq!(points[1]["person"], "Alice");
    }

    #[tokio::test]
    async fn test_net_values_for_quiet_month() {
        let db = setup_test_db().await.unwrap();
        create_test_expense(&db, 40.0, "2024-03-01").await.unwrap();

        let app = app_router(Arc::new(AppState { db }));
        let response = app
            .oneshot(
                Request::get("/api/analytics/net-values/2024-04")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["month"], "2024-04");
        assert_eq!(json["total_expenses"], 0.0);
    }
}
