mod policy;

pub use policy::DecisionThresholds;

use super::domain::{CustomerSignals, Recommendation, UnderwritingError};
use policy::decide_recommendation;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Stateless scorer applying the decision thresholds to a set of signals.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoringEngine {
    thresholds: DecisionThresholds,
}

impl ScoringEngine {
    pub fn new(thresholds: DecisionThresholds) -> Self {
        Self { thresholds }
    }

    pub fn thresholds(&self) -> DecisionThresholds {
        self.thresholds
    }

    pub fn score(&self, signals: &CustomerSignals) -> Result<ScoreOutcome, UnderwritingError> {
        signals.validate()?;

        let recommendation = decide_recommendation(&self.thresholds, signals.risk_score);
        debug!(
            risk_score = signals.risk_score,
            recommendation = recommendation.label(),
            "scored customer signals"
        );

        Ok(ScoreOutcome {
            recommendation,
            risk_score: signals.risk_score,
            rationale: recommendation.rationale().to_string(),
        })
    }
}

/// Recommendation plus the human-readable reasoning shown to the officer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreOutcome {
    pub recommendation: Recommendation,
    pub risk_score: i32,
    pub rationale: String,
}

/// Score signals against the default 750/680 thresholds.
pub fn score_customer(signals: CustomerSignals) -> Result<ScoreOutcome, UnderwritingError> {
    ScoringEngine::default().score(&signals)
}
