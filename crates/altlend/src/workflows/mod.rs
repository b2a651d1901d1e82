pub mod lending;
pub mod underwriting;
pub mod valuation;
