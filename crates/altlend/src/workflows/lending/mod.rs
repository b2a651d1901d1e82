//! Loan amortization and indicative quotes.

pub mod amortization;
pub mod quote;
pub mod router;

pub use amortization::{
    compute_monthly_installment, AmortizationError, InstallmentBreakdown, LoanTerms,
};
pub use quote::{LoanQuote, QuoteEngine, QuotePolicy};
pub use router::{lending_router, QuoteRequest};
