use std::sync::Arc;

use axum::{extract::State, routing::post, Json, Router};
use chrono::{Local, NaiveDate};
use serde::Deserialize;

use super::amortization::{InstallmentBreakdown, LoanTerms};
use super::quote::{LoanQuote, QuoteEngine};
use crate::error::AppError;

/// Request body for an indicative quote, usually a valuation's max loan.
#[derive(Debug, Clone, Deserialize)]
pub struct QuoteRequest {
    #[serde(alias = "max_loan_amount")]
    pub loan_amount: f64,
    /// Key for the rate stream; defaults to the loan amount.
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub today: Option<NaiveDate>,
}

/// Router builder exposing EMI and quote endpoints.
pub fn lending_router(quotes: Arc<QuoteEngine>) -> Router {
    Router::new()
        .route("/api/v1/lending/emi", post(emi_handler))
        .route("/api/v1/lending/quote", post(quote_handler))
        .with_state(quotes)
}

pub(crate) async fn emi_handler(
    Json(terms): Json<LoanTerms>,
) -> Result<Json<InstallmentBreakdown>, AppError> {
    Ok(Json(terms.breakdown()?))
}

pub(crate) async fn quote_handler(
    State(quotes): State<Arc<QuoteEngine>>,
    Json(request): Json<QuoteRequest>,
) -> Result<Json<LoanQuote>, AppError> {
    let subject = request
        .subject
        .unwrap_or_else(|| format!("{:.0}", request.loan_amount));
    let today = request.today.unwrap_or_else(|| Local::now().date_naive());

    Ok(Json(quotes.quote(request.loan_amount, &subject, today)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::synthetic::SeededSource;
    use crate::workflows::lending::QuotePolicy;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use axum::response::Response;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn router() -> Router {
        let engine = QuoteEngine::new(QuotePolicy::default(), SeededSource::new(42))
            .expect("valid policy");
        lending_router(Arc::new(engine))
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::post(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&body).unwrap()))
            .unwrap()
    }

    async fn read_json_body(response: Response) -> Value {
        let body = axum::body::to_bytes(response.into_body(), 16 * 1024)
            .await
            .expect("read body");
        serde_json::from_slice(&body).expect("json payload")
    }

    #[tokio::test]
    async fn emi_route_returns_breakdown() {
        let response = router()
            .oneshot(post_json(
                "/api/v1/lending/emi",
                json!({ "principal": 1_000_000.0, "annual_rate_percent": 8.5, "tenure_years": 20 }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = read_json_body(response).await;
        assert_eq!(body["monthly_installment"], 8_678);
        assert_eq!(body["installments"], 240);
    }

    #[tokio::test]
    async fn emi_route_rejects_zero_tenure() {
        let response = router()
            .oneshot(post_json(
                "/api/v1/lending/emi",
                json!({ "principal": 1_000_000.0, "annual_rate_percent": 8.5, "tenure_years": 0 }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = read_json_body(response).await;
        assert!(body["error"]
            .as_str()
            .unwrap_or_default()
            .contains("invalid argument"));
    }

    #[tokio::test]
    async fn quote_route_honours_the_requested_date() {
        let response = router()
            .oneshot(post_json(
                "/api/v1/lending/quote",
                json!({ "loan_amount": 12_200_000.0, "subject": "Pune/Baner", "today": "2026-10-16" }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = read_json_body(response).await;
        assert_eq!(body["issued_on"], "2026-10-16");
        assert_eq!(body["processing_fee"], 61_000);
    }

    #[tokio::test]
    async fn quote_route_accepts_a_valuation_max_loan_amount() {
        let response = router()
            .oneshot(post_json(
                "/api/v1/lending/quote",
                json!({ "max_loan_amount": 9_840_000.0, "subject": "Indore/Vijay Nagar" }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = read_json_body(response).await;
        assert_eq!(body["loan_amount"], 9_840_000);
        assert_eq!(body["processing_fee"], 49_200);
    }

    #[tokio::test]
    async fn quote_route_defaults_subject_and_date() {
        let request = || {
            post_json(
                "/api/v1/lending/quote",
                json!({ "loan_amount": 5_000_000.0 }),
            )
        };
        let first = read_json_body(router().oneshot(request()).await.unwrap()).await;
        let second = read_json_body(router().oneshot(request()).await.unwrap()).await;

        assert_eq!(first["interest_rate_percent"], second["interest_rate_percent"]);
        assert_eq!(first["monthly_installment"], second["monthly_installment"]);

        let engine = QuoteEngine::new(QuotePolicy::default(), SeededSource::new(42))
            .expect("valid policy");
        assert_eq!(
            first["interest_rate_percent"].as_f64(),
            Some(engine.interest_rate("5000000"))
        );
        assert!(first["issued_on"].is_string());
    }

    #[tokio::test]
    async fn quote_route_rejects_zero_loan_amount() {
        let response = router()
            .oneshot(post_json(
                "/api/v1/lending/quote",
                json!({ "loan_amount": 0.0 }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
