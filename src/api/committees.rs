//! Committee routes.

use super::{ApiError, ApiResult, AppState};
use crate::core::committee;
use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
};
use std::sync::Arc;

/// Routes handled by this module.
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/committees", get(list_committees).post(add_committee))
        .route("/committees/{id}/payment", post(add_payment))
}

async fn list_committees(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<committee::CommitteeSummary>>> {
    let committees = committee::committees_with_totals(&state.db).await?;
    Ok(Json(committees))
}

async fn add_committee(
    State(state): State<Arc<AppState>>,
    Json(new): Json<committee::NewCommittee>,
) -> ApiResult<(StatusCode, Json<serde_json::Value>)> {
    let created = committee::add_committee(&state.db, new)
        .await
        .map_err(|e| ApiError::action(e, "add committee"))?;

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({
            "message": "Committee added successfully",
            "id": created.id,
        })),
    ))
}

async fn add_payment(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(new): Json<committee::NewCommitteePayment>,
) -> ApiResult<(StatusCode, Json<serde_json::Value>)> {
    let created = committee::add_committee_payment(&state.db, id, new)
        .await
        .map_err(|e| ApiError::action(e, "add committee payment"))?;

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({
            "message": "Committee payment added successfully",
            "id": created.id,
        })),
    ))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use crate::api::{AppState, app_router};
    use crate::test_utils::setup_test_db;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use std::sync::Arc;
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_committee_lifecycle() {
        let db = setup_test_db().await.unwrap();
        let app = app_router(Arc::new(AppState { db }));

        let response = app
            .clone()
            .oneshot(
                Request::post("/api/committees")
                    .header("content-type", "application/json")
                    .body(Body::from(
                        serde_json::json!({
                            "name": "Family Committee",
                            "start_date": "2024-01-01",
                            "end_date": "2024-12-01",
                            "monthly_amount": 200.0,
                            "expected_receiving_amount": 2400.0,
                            "expected_receiving_date": "2024-12-15"
                        })
                        .to_string(),
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let created: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        let id = created["id"].as_i64().unwrap();

        let response = app
            .clone()
            .oneshot(
                Request::post(format!("/api/committees/{id}/payment"))
                    .header("content-type", "application/json")
                    .body(Body::from(
                        serde_json::json!({
                            "amount": 200.0,
                            "payment_date": "2024-02-05"
                        })
                        .to_string(),
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let response = app
            .oneshot(Request::get("/api/committees").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        let list = json.as_array().unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0]["total_paid"], 200.0);
        assert_eq!(list[0]["payments"][0]["month_year"], "2024-02");
    }
}
