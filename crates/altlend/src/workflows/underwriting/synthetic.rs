use rand::Rng;

use super::domain::{CustomerProfile, CustomerSignals};
use crate::synthetic::SeededSource;

pub(crate) const CUSTOMER_SCOPE: &str = "underwriting.customer";

/// Fabricate a reproducible profile for a borrower with no observed data.
///
/// Ranges mirror the spread of the demo book: 200-599 transactions, 1-8
/// failures, risk scores 600-799, utility scores 70-99.
pub fn synthetic_profile(source: &SeededSource, name: &str) -> CustomerProfile {
    let mut rng = source.rng(CUSTOMER_SCOPE, name);

    let signals = CustomerSignals {
        transaction_count: rng.gen_range(200..600),
        payment_failure_count: rng.gen_range(1..9),
        risk_score: rng.gen_range(600..800),
        utility_payment_score: rng.gen_range(70..100),
    };
    let average_monthly_spend = rng.gen_range(20_000..70_000);
    let on_time_payment_pct = rng.gen_range(80..100);

    CustomerProfile {
        name: name.trim().to_string(),
        age: None,
        segment: None,
        location: None,
        requested_loan_amount: None,
        mobile: None,
        pan: None,
        average_monthly_spend,
        on_time_payment_pct,
        signals,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profiles_stay_within_demo_ranges() {
        let source = SeededSource::new(11);
        for name in ["Asha Rao", "Vikram Patel", "Meera Iyer", "Kabir Singh"] {
            let profile = synthetic_profile(&source, name);
            let signals = profile.signals;
            assert!((200..600).contains(&signals.transaction_count));
            assert!((1..9).contains(&signals.payment_failure_count));
            assert!((600..800).contains(&signals.risk_score));
            assert!((70..100).contains(&signals.utility_payment_score));
            assert!((20_000..70_000).contains(&profile.average_monthly_spend));
            assert!((80..100).contains(&profile.on_time_payment_pct));
            assert_eq!(profile.name, name);
        }
    }

    #[test]
    fn same_seed_and_name_reproduce_the_profile() {
        let source = SeededSource::new(11);
        assert_eq!(
            synthetic_profile(&source, "Asha Rao"),
            synthetic_profile(&source, "Asha Rao")
        );
    }
}
