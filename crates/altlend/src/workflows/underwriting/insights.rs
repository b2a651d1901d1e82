//! Presentation-only views over a customer's alternative data.
//!
//! Nothing in this module feeds the recommendation; the scorer reads the risk
//! score alone.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::domain::CustomerSignals;
use crate::synthetic::SeededSource;

pub(crate) const RISK_FACTOR_SCOPE: &str = "underwriting.risk_factors";

/// Axes of the risk-factor radar shown next to a recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskFactorKind {
    PaymentHistory,
    UpiActivity,
    SpendingPattern,
    UtilityPayments,
    DigitalFootprint,
    FinancialStability,
}

impl RiskFactorKind {
    pub const ALL: [RiskFactorKind; 6] = [
        RiskFactorKind::PaymentHistory,
        RiskFactorKind::UpiActivity,
        RiskFactorKind::SpendingPattern,
        RiskFactorKind::UtilityPayments,
        RiskFactorKind::DigitalFootprint,
        RiskFactorKind::FinancialStability,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            RiskFactorKind::PaymentHistory => "Payment History",
            RiskFactorKind::UpiActivity => "UPI Activity",
            RiskFactorKind::SpendingPattern => "Spending Pattern",
            RiskFactorKind::UtilityPayments => "Utility Payments",
            RiskFactorKind::DigitalFootprint => "Digital Footprint",
            RiskFactorKind::FinancialStability => "Financial Stability",
        }
    }
}

/// Whether a factor was derived from the signals or fabricated from a seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FactorOrigin {
    Observed,
    Synthetic,
}

/// One radar axis on a 0-100 scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskFactor {
    pub kind: RiskFactorKind,
    pub score: f64,
    pub origin: FactorOrigin,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlternativeDataInsights {
    pub payment_success_pct: u8,
    pub risk_factors: Vec<RiskFactor>,
}

impl AlternativeDataInsights {
    pub fn factor(&self, kind: RiskFactorKind) -> Option<&RiskFactor> {
        self.risk_factors.iter().find(|factor| factor.kind == kind)
    }
}

/// Each payment failure costs two points of success rate, floored at zero.
pub fn payment_success_pct(payment_failure_count: u32) -> u8 {
    100u32.saturating_sub(payment_failure_count.saturating_mul(2)) as u8
}

/// Build the insight panel for `subject`. The two axes without an observed
/// source (spending pattern, digital footprint) come from the seeded stream
/// keyed by the subject.
pub fn build_insights(
    subject: &str,
    signals: &CustomerSignals,
    source: &SeededSource,
) -> AlternativeDataInsights {
    let mut rng = source.rng(RISK_FACTOR_SCOPE, subject);
    let spending_pattern = rng.gen_range(70.0..100.0);
    let digital_footprint = rng.gen_range(65.0..90.0);

    let payment_history = 100.0 - 10.0 * f64::from(signals.payment_failure_count);
    let upi_activity = f64::from(signals.transaction_count) / 5.0;
    let financial_stability = f64::from(signals.risk_score) / 8.5;

    let risk_factors = RiskFactorKind::ALL
        .into_iter()
        .map(|kind| {
            let (raw, origin) = match kind {
                RiskFactorKind::PaymentHistory => (payment_history, FactorOrigin::Observed),
                RiskFactorKind::UpiActivity => (upi_activity, FactorOrigin::Observed),
                RiskFactorKind::SpendingPattern => (spending_pattern, FactorOrigin::Synthetic),
                RiskFactorKind::UtilityPayments => (
                    f64::from(signals.utility_payment_score),
                    FactorOrigin::Observed,
                ),
                RiskFactorKind::DigitalFootprint => (digital_footprint, FactorOrigin::Synthetic),
                RiskFactorKind::FinancialStability => {
                    (financial_stability, FactorOrigin::Observed)
                }
            };
            RiskFactor {
                kind,
                score: round_tenth(raw.clamp(0.0, 100.0)),
                origin,
            }
        })
        .collect();

    AlternativeDataInsights {
        payment_success_pct: payment_success_pct(signals.payment_failure_count),
        risk_factors,
    }
}

fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
