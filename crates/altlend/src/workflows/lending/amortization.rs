use serde::{Deserialize, Serialize};

/// Fixed-rate, fixed-tenure loan terms.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanTerms {
    pub principal: f64,
    pub annual_rate_percent: f64,
    pub tenure_years: u32,
}

impl LoanTerms {
    pub fn new(
        principal: f64,
        annual_rate_percent: f64,
        tenure_years: u32,
    ) -> Result<Self, AmortizationError> {
        let terms = Self {
            principal,
            annual_rate_percent,
            tenure_years,
        };
        terms.validate()?;
        Ok(terms)
    }

    pub fn validate(&self) -> Result<(), AmortizationError> {
        if !self.principal.is_finite() || self.principal <= 0.0 {
            return Err(AmortizationError::InvalidArgument(format!(
                "principal must be a positive finite amount, got {}",
                self.principal
            )));
        }
        if !self.annual_rate_percent.is_finite() || self.annual_rate_percent < 0.0 {
            return Err(AmortizationError::InvalidArgument(format!(
                "annual rate must be a non-negative finite percentage, got {}",
                self.annual_rate_percent
            )));
        }
        self.installments().map(|_| ())
    }

    /// Number of monthly installments, `tenure_years * 12`.
    pub fn installments(&self) -> Result<u32, AmortizationError> {
        match self.tenure_years.checked_mul(12) {
            Some(0) => Err(AmortizationError::InvalidArgument(
                "tenure must be at least one year".to_string(),
            )),
            Some(months) => Ok(months),
            None => Err(AmortizationError::InvalidArgument(format!(
                "tenure of {} years is too long",
                self.tenure_years
            ))),
        }
    }

    pub fn monthly_rate(&self) -> f64 {
        self.annual_rate_percent / 12.0 / 100.0
    }

    /// Equated monthly installment rounded to the nearest currency unit.
    ///
    /// A zero rate degenerates to straight-line repayment, `P / n`.
    pub fn monthly_installment(&self) -> Result<u64, AmortizationError> {
        self.validate()?;

        let months = f64::from(self.installments()?);
        let rate = self.monthly_rate();

        // 1 - (1+r)^-n: bounded by 1 for steep rates, accurate near zero.
        let discounted = -(-months * rate.ln_1p()).exp_m1();
        let emi = if discounted == 0.0 {
            self.principal / months
        } else {
            self.principal * rate / discounted
        };

        to_currency(emi)
    }

    /// Installment together with the totals over the life of the loan.
    pub fn breakdown(&self) -> Result<InstallmentBreakdown, AmortizationError> {
        let monthly_installment = self.monthly_installment()?;
        let installments = self.installments()?;
        let total_payable = monthly_installment
            .checked_mul(u64::from(installments))
            .ok_or_else(|| {
                AmortizationError::InvalidArgument("total repayment overflows".to_string())
            })?;
        let principal = to_currency(self.principal)?;

        Ok(InstallmentBreakdown {
            monthly_installment,
            installments,
            total_payable,
            total_interest: total_payable.saturating_sub(principal),
        })
    }
}

fn to_currency(amount: f64) -> Result<u64, AmortizationError> {
    let rounded = amount.round();
    if !rounded.is_finite() || rounded < 0.0 || rounded >= u64::MAX as f64 {
        return Err(AmortizationError::InvalidArgument(format!(
            "amount {amount} is not representable"
        )));
    }
    Ok(rounded as u64)
}

/// Installment and lifetime totals for a set of loan terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstallmentBreakdown {
    pub monthly_installment: u64,
    pub installments: u32,
    pub total_payable: u64,
    pub total_interest: u64,
}

/// Compute the EMI for `principal` at `annual_rate_percent` over `tenure_years`.
pub fn compute_monthly_installment(
    principal: f64,
    annual_rate_percent: f64,
    tenure_years: u32,
) -> Result<u64, AmortizationError> {
    LoanTerms::new(principal, annual_rate_percent, tenure_years)?.monthly_installment()
}

/// Error raised by the lending workflow.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AmortizationError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}
