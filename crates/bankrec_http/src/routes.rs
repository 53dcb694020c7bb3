//! Route table and handlers for `/api/banks`.

use crate::error::ApiError;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use bankrec_core::{core_version, BankRecord, BankRepository, BankService};
use serde::Serialize;
use std::sync::Arc;

/// Shared handler state: one service over one repository.
pub struct AppState<R: BankRepository> {
    pub service: Arc<BankService<R>>,
}

impl<R: BankRepository> AppState<R> {
    pub fn new(service: BankService<R>) -> Self {
        Self {
            service: Arc::new(service),
        }
    }
}

// Manual impl: deriving would require `R: Clone`.
impl<R: BankRepository> Clone for AppState<R> {
    fn clone(&self) -> Self {
        Self {
            service: Arc::clone(&self.service),
        }
    }
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

/// Builds the API router over `state`.
pub fn router<R>(state: AppState<R>) -> Router
where
    R: BankRepository + 'static,
{
    Router::new()
        .route("/api/health", get(health_check))
        .route(
            "/api/banks",
            get(list_banks::<R>)
                .post(add_bank::<R>)
                .patch(update_bank::<R>),
        )
        .route(
            "/api/banks/:account_number",
            get(get_bank::<R>).delete(delete_bank::<R>),
        )
        .with_state(state)
}

/// GET /api/health
async fn health_check() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok",
        version: core_version(),
    })
}

/// GET /api/banks
async fn list_banks<R: BankRepository>(
    State(state): State<AppState<R>>,
) -> Result<Json<Vec<BankRecord>>, ApiError> {
    Ok(Json(state.service.get_banks()?))
}

/// GET /api/banks/:account_number
async fn get_bank<R: BankRepository>(
    State(state): State<AppState<R>>,
    Path(account_number): Path<String>,
) -> Result<Json<BankRecord>, ApiError> {
    Ok(Json(state.service.get_bank(&account_number)?))
}

/// POST /api/banks
async fn add_bank<R: BankRepository>(
    State(state): State<AppState<R>>,
    Json(bank): Json<BankRecord>,
) -> Result<(StatusCode, Json<BankRecord>), ApiError> {
    let created = state.service.add_bank(bank)?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// PATCH /api/banks
async fn update_bank<R: BankRepository>(
    State(state): State<AppState<R>>,
    Json(bank): Json<BankRecord>,
) -> Result<Json<BankRecord>, ApiError> {
    Ok(Json(state.service.update_bank(bank)?))
}

/// DELETE /api/banks/:account_number
async fn delete_bank<R: BankRepository>(
    State(state): State<AppState<R>>,
    Path(account_number): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.service.delete_bank(&account_number)?;
    Ok(StatusCode::NO_CONTENT)
}
