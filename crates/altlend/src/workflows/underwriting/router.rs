use std::sync::Arc;

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;

use super::desk::{CustomerAnalysis, UnderwritingDesk};
use super::domain::{CustomerProfile, CustomerSignals};
use super::samples::sample_customers;
use super::scoring::ScoreOutcome;
use crate::error::AppError;

/// Request body for a named analysis.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalyzeRequest {
    pub name: String,
}

/// Router builder exposing scoring and analysis endpoints.
pub fn underwriting_router(desk: Arc<UnderwritingDesk>) -> Router {
    Router::new()
        .route("/api/v1/underwriting/score", post(score_handler))
        .route("/api/v1/underwriting/analyze", post(analyze_handler))
        .route("/api/v1/underwriting/samples", get(samples_handler))
        .with_state(desk)
}

pub(crate) async fn score_handler(
    State(desk): State<Arc<UnderwritingDesk>>,
    Json(signals): Json<CustomerSignals>,
) -> Result<Json<ScoreOutcome>, AppError> {
    Ok(Json(desk.engine().score(&signals)?))
}

pub(crate) async fn analyze_handler(
    State(desk): State<Arc<UnderwritingDesk>>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<CustomerAnalysis>, AppError> {
    Ok(Json(desk.analyze(&request.name)?))
}

pub(crate) async fn samples_handler() -> Json<Vec<CustomerProfile>> {
    Json(sample_customers())
}
