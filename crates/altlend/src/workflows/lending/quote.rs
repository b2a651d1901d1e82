use chrono::NaiveDate;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::amortization::{AmortizationError, LoanTerms};
use crate::synthetic::SeededSource;

pub(crate) const QUOTE_SCOPE: &str = "lending.quote";

/// Pricing knobs for indicative quotes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuotePolicy {
    /// Lowest rate offered; quotes land in `[base, base + spread)`.
    pub base_rate_percent: f64,
    pub rate_spread_percent: f64,
    /// Tenure used for the EMI illustration.
    pub illustration_tenure_years: u32,
    pub max_tenure_years: u32,
    pub processing_fee_percent: f64,
}

impl Default for QuotePolicy {
    fn default() -> Self {
        Self {
            base_rate_percent: 8.5,
            rate_spread_percent: 2.0,
            illustration_tenure_years: 20,
            max_tenure_years: 30,
            processing_fee_percent: 0.5,
        }
    }
}

/// Indicative offer shown after a valuation. Final terms depend on credit
/// assessment and property verification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanQuote {
    pub issued_on: NaiveDate,
    pub loan_amount: u64,
    pub interest_rate_percent: f64,
    pub illustration_tenure_years: u32,
    pub max_tenure_years: u32,
    pub processing_fee_percent: f64,
    pub processing_fee: u64,
    pub monthly_installment: u64,
    pub next_steps: Vec<String>,
}

/// Builds quotes from a loan amount, pricing from a seeded rate stream.
#[derive(Debug, Clone)]
pub struct QuoteEngine {
    policy: QuotePolicy,
    source: SeededSource,
}

impl QuoteEngine {
    pub fn new(policy: QuotePolicy, source: SeededSource) -> Result<Self, AmortizationError> {
        if policy.illustration_tenure_years == 0
            || policy.illustration_tenure_years > policy.max_tenure_years
        {
            return Err(AmortizationError::InvalidArgument(format!(
                "illustration tenure {} must be within 1..={}",
                policy.illustration_tenure_years, policy.max_tenure_years
            )));
        }
        let knobs = [
            policy.base_rate_percent,
            policy.rate_spread_percent,
            policy.processing_fee_percent,
        ];
        if knobs.iter().any(|value| !value.is_finite() || *value < 0.0) {
            return Err(AmortizationError::InvalidArgument(
                "quote rates and fees must be non-negative".to_string(),
            ));
        }
        Ok(Self { policy, source })
    }

    pub fn policy(&self) -> &QuotePolicy {
        &self.policy
    }

    /// Rate offered to `subject`, in whole hundredths of a percent.
    ///
    /// The spread is drawn in basis points, so the rate never reaches
    /// `base + spread` once rounded.
    pub fn interest_rate(&self, subject: &str) -> f64 {
        let base_bps = (self.policy.base_rate_percent * 100.0).round() as u64;
        let spread_bps = (self.policy.rate_spread_percent * 100.0).round() as u64;
        let drawn = if spread_bps > 0 {
            self.source.rng(QUOTE_SCOPE, subject).gen_range(0..spread_bps)
        } else {
            0
        };
        (base_bps + drawn) as f64 / 100.0
    }

    pub fn quote(
        &self,
        loan_amount: f64,
        subject: &str,
        issued_on: NaiveDate,
    ) -> Result<LoanQuote, AmortizationError> {
        let interest_rate_percent = self.interest_rate(subject);
        let terms = LoanTerms::new(
            loan_amount,
            interest_rate_percent,
            self.policy.illustration_tenure_years,
        )?;
        let monthly_installment = terms.monthly_installment()?;
        let processing_fee =
            (loan_amount * self.policy.processing_fee_percent / 100.0).round() as u64;

        debug!(
            subject,
            interest_rate_percent, monthly_installment, "issued indicative quote"
        );

        Ok(LoanQuote {
            issued_on,
            loan_amount: loan_amount.round() as u64,
            interest_rate_percent,
            illustration_tenure_years: self.policy.illustration_tenure_years,
            max_tenure_years: self.policy.max_tenure_years,
            processing_fee_percent: self.policy.processing_fee_percent,
            processing_fee,
            monthly_installment,
            next_steps: next_steps(),
        })
    }
}

fn next_steps() -> Vec<String> {
    [
        "Submit formal loan application",
        "Property legal verification",
        "Credit assessment and approval",
        "Final disbursement",
    ]
    .into_iter()
    .map(str::to_string)
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::lending::compute_monthly_installment;

    fn issued_on() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 16).expect("valid date")
    }

    fn engine() -> QuoteEngine {
        QuoteEngine::new(QuotePolicy::default(), SeededSource::new(42)).expect("valid policy")
    }

    #[test]
    fn rates_stay_within_the_offer_band() {
        let engine = engine();
        for subject in ["Pune/Baner", "Indore/Vijay Nagar", "12200000", "Rohit Sharma"] {
            let rate = engine.interest_rate(subject);
            assert!((8.5..10.5).contains(&rate), "{subject}: {rate}");
            assert_eq!((rate * 100.0).round() / 100.0, rate);
        }
    }

    #[test]
    fn rounded_rates_never_reach_the_top_of_the_band() {
        let engine = engine();
        let top = (0..20_000)
            .map(|subject| engine.interest_rate(&subject.to_string()))
            .fold(f64::MIN, f64::max);
        assert!(top < 10.5, "highest rate {top}");
        assert!(top >= 10.49, "highest rate {top}");
    }

    #[test]
    fn zero_spread_quotes_the_base_rate() {
        let policy = QuotePolicy {
            rate_spread_percent: 0.0,
            ..QuotePolicy::default()
        };
        let engine = QuoteEngine::new(policy, SeededSource::default()).expect("valid policy");
        assert_eq!(engine.interest_rate("Pune/Baner"), 8.5);
    }

    #[test]
    fn quote_illustrates_emi_with_the_offered_rate() {
        let quote = engine()
            .quote(12_200_000.0, "Pune/Baner", issued_on())
            .expect("quote builds");

        let expected = compute_monthly_installment(12_200_000.0, quote.interest_rate_percent, 20)
            .expect("valid terms");
        assert_eq!(quote.monthly_installment, expected);
        assert_eq!(quote.processing_fee, 61_000);
        assert_eq!(quote.max_tenure_years, 30);
        assert_eq!(quote.next_steps.len(), 4);
        assert_eq!(quote.issued_on, issued_on());
    }

    #[test]
    fn same_subject_gets_the_same_quote() {
        let engine = engine();
        assert_eq!(
            engine.quote(5_000_000.0, "Nashik", issued_on()),
            engine.quote(5_000_000.0, "Nashik", issued_on())
        );
    }

    #[test]
    fn rejects_zero_loan_amount() {
        assert!(engine().quote(0.0, "Nashik", issued_on()).is_err());
    }

    #[test]
    fn rejects_illustration_longer_than_max_tenure() {
        let policy = QuotePolicy {
            illustration_tenure_years: 35,
            ..QuotePolicy::default()
        };
        assert!(QuoteEngine::new(policy, SeededSource::default()).is_err());
    }
}
