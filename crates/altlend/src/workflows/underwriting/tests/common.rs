use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::synthetic::SeededSource;
use crate::workflows::underwriting::{
    underwriting_router, CustomerSignals, ScoringEngine, UnderwritingDesk,
};

pub(super) fn signals(risk_score: i32) -> CustomerSignals {
    CustomerSignals {
        transaction_count: 450,
        payment_failure_count: 2,
        utility_payment_score: 85,
        risk_score,
    }
}

pub(super) fn desk() -> UnderwritingDesk {
    UnderwritingDesk::new(ScoringEngine::default(), SeededSource::new(42))
}

pub(super) fn router() -> axum::Router {
    underwriting_router(Arc::new(desk()))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
