use serde::{Deserialize, Serialize};
use tracing::info;

use super::domain::{CustomerProfile, ProfileSource, UnderwritingError};
use super::insights::{build_insights, AlternativeDataInsights};
use super::samples::find_sample;
use super::scoring::{ScoreOutcome, ScoringEngine};
use super::synthetic::synthetic_profile;
use crate::synthetic::SeededSource;

/// Facade composing sample lookup, synthetic fallback, scoring, and insights.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnderwritingDesk {
    engine: ScoringEngine,
    source: SeededSource,
}

impl UnderwritingDesk {
    pub fn new(engine: ScoringEngine, source: SeededSource) -> Self {
        Self { engine, source }
    }

    pub fn engine(&self) -> &ScoringEngine {
        &self.engine
    }

    /// Resolve a borrower by name: sample book first, seeded synthetic data otherwise.
    pub fn lookup(&self, name: &str) -> Result<(CustomerProfile, ProfileSource), UnderwritingError> {
        if name.trim().is_empty() {
            return Err(UnderwritingError::InvalidArgument(
                "customer name is required".to_string(),
            ));
        }

        Ok(match find_sample(name) {
            Some(profile) => (profile, ProfileSource::Sample),
            None => (synthetic_profile(&self.source, name), ProfileSource::Synthetic),
        })
    }

    /// Run the full underwriting pass for a named borrower.
    pub fn analyze(&self, name: &str) -> Result<CustomerAnalysis, UnderwritingError> {
        let (profile, source) = self.lookup(name)?;
        let outcome = self.engine.score(&profile.signals)?;
        let insights = build_insights(&profile.name, &profile.signals, &self.source);

        info!(
            customer = %profile.name,
            source = ?source,
            recommendation = outcome.recommendation.label(),
            "customer analysis complete"
        );

        Ok(CustomerAnalysis {
            profile,
            source,
            outcome,
            insights,
        })
    }
}

/// Everything the officer sees after analyzing a borrower.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerAnalysis {
    pub profile: CustomerProfile,
    pub source: ProfileSource,
    pub outcome: ScoreOutcome,
    pub insights: AlternativeDataInsights,
}
