//! Amortization behaviour observed through the public lending API.

use altlend::workflows::lending::{
    compute_monthly_installment, AmortizationError, LoanTerms,
};

#[test]
fn reference_home_loan_installment() {
    let emi = compute_monthly_installment(1_000_000.0, 8.5, 20).expect("valid terms");
    assert!((8_677..=8_679).contains(&emi), "emi {emi}");
}

#[test]
fn installment_is_monotonic_across_a_rate_ladder() {
    let ladder: Vec<u64> = [0.0, 4.0, 6.5, 8.5, 10.5, 14.0, 24.0]
        .into_iter()
        .map(|rate| compute_monthly_installment(2_500_000.0, rate, 15).expect("valid terms"))
        .collect();

    assert!(ladder.windows(2).all(|pair| pair[0] < pair[1]), "{ladder:?}");
}

#[test]
fn zero_rate_and_zero_tenure_edges() {
    assert_eq!(compute_monthly_installment(2_400_000.0, 0.0, 20), Ok(10_000));
    assert_eq!(
        compute_monthly_installment(2_400_000.0, 8.5, 0),
        Err(AmortizationError::InvalidArgument(
            "tenure must be at least one year".to_string()
        ))
    );
}

#[test]
fn terms_round_trip_through_json_and_validate_on_use() {
    let terms: LoanTerms = serde_json::from_str(
        r#"{ "principal": -10.0, "annual_rate_percent": 8.5, "tenure_years": 5 }"#,
    )
    .expect("shape is valid");

    assert!(matches!(
        terms.monthly_installment(),
        Err(AmortizationError::InvalidArgument(_))
    ));
}
