use super::super::domain::{Recommendation, UnderwritingError};
use serde::Serialize;

/// Risk-score cut-offs. Scores at or above `approve_at` are approved, scores in
/// `[review_at, approve_at)` go to a human, everything below is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DecisionThresholds {
    approve_at: i32,
    review_at: i32,
}

impl DecisionThresholds {
    pub const DEFAULT_APPROVE_AT: i32 = 750;
    pub const DEFAULT_REVIEW_AT: i32 = 680;

    pub fn new(approve_at: i32, review_at: i32) -> Result<Self, UnderwritingError> {
        if review_at >= approve_at {
            return Err(UnderwritingError::InvalidArgument(format!(
                "review threshold {review_at} must be below approval threshold {approve_at}"
            )));
        }
        Ok(Self {
            approve_at,
            review_at,
        })
    }

    pub fn approve_at(&self) -> i32 {
        self.approve_at
    }

    pub fn review_at(&self) -> i32 {
        self.review_at
    }
}

impl Default for DecisionThresholds {
    fn default() -> Self {
        Self {
            approve_at: Self::DEFAULT_APPROVE_AT,
            review_at: Self::DEFAULT_REVIEW_AT,
        }
    }
}

pub(crate) fn decide_recommendation(
    thresholds: &DecisionThresholds,
    risk_score: i32,
) -> Recommendation {
    if risk_score >= thresholds.approve_at {
        Recommendation::Approved
    } else if risk_score >= thresholds.review_at {
        Recommendation::ManualReview
    } else {
        Recommendation::Rejected
    }
}
