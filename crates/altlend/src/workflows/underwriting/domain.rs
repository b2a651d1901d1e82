use serde::{Deserialize, Serialize};

/// Behavioral signals collected for a borrower from alternative data sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerSignals {
    /// Digital-payment (UPI) transactions observed in the lookback window.
    pub transaction_count: u32,
    pub payment_failure_count: u32,
    /// Utility bill payment score on a 0-100 scale.
    pub utility_payment_score: u8,
    /// Bureau-style risk score supplied by the caller.
    pub risk_score: i32,
}

impl CustomerSignals {
    pub fn validate(&self) -> Result<(), UnderwritingError> {
        if self.utility_payment_score > 100 {
            return Err(UnderwritingError::InvalidArgument(format!(
                "utility payment score {} is outside 0-100",
                self.utility_payment_score
            )));
        }
        Ok(())
    }
}

/// Underwriting recommendation handed back to the loan officer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Recommendation {
    Approved,
    ManualReview,
    Rejected,
}

impl Recommendation {
    pub fn label(&self) -> &'static str {
        match self {
            Recommendation::Approved => "APPROVED",
            Recommendation::ManualReview => "MANUAL_REVIEW",
            Recommendation::Rejected => "REJECTED",
        }
    }

    pub fn rationale(&self) -> &'static str {
        match self {
            Recommendation::Approved => {
                "Excellent credit profile. Customer shows strong financial behavior with consistent payment patterns. Recommend approval with standard terms."
            }
            Recommendation::ManualReview => {
                "Good credit profile with some areas of concern. Recommend manual review to assess specific risk factors before final decision."
            }
            Recommendation::Rejected => {
                "High risk profile detected. Multiple payment failures and inconsistent financial behavior. Not recommended for approval."
            }
        }
    }
}

/// Borrower segment used on the intake form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CustomerSegment {
    Salaried,
    MsmeOwner,
    SelfEmployed,
}

impl CustomerSegment {
    pub fn label(&self) -> &'static str {
        match self {
            CustomerSegment::Salaried => "Salaried",
            CustomerSegment::MsmeOwner => "MSME Owner",
            CustomerSegment::SelfEmployed => "Self-employed",
        }
    }
}

/// Customer record combining intake details with the observed signals.
///
/// Contact and tax identifiers are opaque demo strings; nothing here checks
/// their format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerProfile {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub segment: Option<CustomerSegment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requested_loan_amount: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobile: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pan: Option<String>,
    pub average_monthly_spend: u32,
    pub on_time_payment_pct: u8,
    pub signals: CustomerSignals,
}

/// Where a profile's numbers came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileSource {
    Sample,
    Synthetic,
}

/// Error raised by the underwriting workflow.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UnderwritingError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}
