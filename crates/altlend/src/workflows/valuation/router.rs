use std::sync::Arc;

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use chrono::{Local, NaiveDate};
use serde::Deserialize;

use super::domain::{CircleRate, PropertyDetails};
use super::engine::{PropertyValuation, ValuationEngine};
use crate::error::AppError;

/// Request body for a valuation; property fields sit at the top level.
#[derive(Debug, Clone, Deserialize)]
pub struct ValuationRequest {
    #[serde(flatten)]
    pub property: PropertyDetails,
    #[serde(default)]
    pub today: Option<NaiveDate>,
}

/// Router builder exposing valuation endpoints.
pub fn valuation_router(engine: Arc<ValuationEngine>) -> Router {
    Router::new()
        .route("/api/v1/valuation", post(valuation_handler))
        .route("/api/v1/valuation/circle-rates", get(circle_rates_handler))
        .with_state(engine)
}

pub(crate) async fn valuation_handler(
    State(engine): State<Arc<ValuationEngine>>,
    Json(request): Json<ValuationRequest>,
) -> Result<Json<PropertyValuation>, AppError> {
    let today = request.today.unwrap_or_else(|| Local::now().date_naive());
    Ok(Json(engine.valuate(request.property, today)?))
}

pub(crate) async fn circle_rates_handler(
    State(engine): State<Arc<ValuationEngine>>,
) -> Json<Vec<CircleRate>> {
    Json(engine.table().rates().to_vec())
}
