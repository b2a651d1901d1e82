//! Decision-support engines for an alternative-data lending desk.
//!
//! The crate exposes three independent workflows: credit underwriting from
//! behavioral signals, loan amortization, and property valuation. Every engine
//! is a pure function of its inputs; synthetic demo data is always drawn from
//! an explicit seed.

pub mod config;
pub mod error;
pub mod money;
pub mod synthetic;
pub mod telemetry;
pub mod workflows;
