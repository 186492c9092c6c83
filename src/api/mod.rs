//! HTTP surface: route composition, shared state, and error mapping.
//!
//! Every domain module exposes a `router()` that is merged under `/api`.
//! Handlers stay thin: decode the request, call the core function, wrap
//! the result. Core errors convert into an `ApiError` carrying an optional
//! action label so failure messages read "Failed to add expense: ...".

use crate::errors::Error;
use axum::{
    Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Expense listing and recording, plus category and payment-method lookups
pub mod expenses;

/// Loan recording and per-person summaries
pub mod loans;

/// Committee management and payment recording
pub mod committees;

/// Monthly income recording
pub mod income;

/// Dashboard overview and the legacy status route
pub mod dashboard;

/// Reporting routes: windows, monthly summary, timeline, net values
pub mod analytics;

/// Shared state handed to every handler.
pub struct AppState {
    /// The live database connection
    pub db: DatabaseConnection,
}

/// A core error plus the action that was being attempted.
pub struct ApiError {
    error: Error,
    action: Option<&'static str>,
}

/// Handler result alias.
pub type ApiResult<T> = std::result::Result<T, ApiError>;

impl ApiError {
    /// Wraps `error` with the action label used in the response message.
    pub fn action(error: Error, action: &'static str) -> Self {
        Self {
            error,
            action: Some(action),
        }
    }
}

impl From<Error> for ApiError {
    fn from(error: Error) -> Self {
        Self {
            error,
            action: None,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self.error {
            Error::Validation { .. }
            | Error::InvalidAmount { .. }
            | Error::CommitteeNotFound { .. } => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status.is_server_error() {
            tracing::error!("request failed: {}", self.error);
        }
        let message = match self.action {
            Some(action) => format!("Failed to {action}: {}", self.error),
            None => self.error.to_string(),
        };
        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}

/// Builds the full application router with tracing and shared state.
pub fn app_router(state: Arc<AppState>) -> Router {
    let api = Router::new()
        .merge(dashboard::router())
        .merge(expenses::router())
        .merge(loans::router())
        .merge(committees::router())
        .merge(income::router())
        .merge(analytics::router());

    Router::new()
        .nest("/api", api)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
