//! Alternative-data credit underwriting.
//!
//! Only the risk score decides the recommendation. Transaction, failure, and
//! utility signals surface in the insight panel for the officer's benefit.

mod desk;
pub mod domain;
pub mod insights;
pub mod router;
pub mod samples;
pub mod scoring;
mod synthetic;

#[cfg(test)]
mod tests;

pub use desk::{CustomerAnalysis, UnderwritingDesk};
pub use domain::{
    CustomerProfile, CustomerSegment, CustomerSignals, ProfileSource, Recommendation,
    UnderwritingError,
};
pub use insights::{AlternativeDataInsights, FactorOrigin, RiskFactor, RiskFactorKind};
pub use router::{underwriting_router, AnalyzeRequest};
pub use samples::{find_sample, sample_customers};
pub use scoring::{score_customer, DecisionThresholds, ScoreOutcome, ScoringEngine};
pub use synthetic::synthetic_profile;
