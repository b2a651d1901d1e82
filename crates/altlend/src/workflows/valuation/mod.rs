//! Property valuation from circle and market rates.

pub mod domain;
mod engine;
pub mod rates;
pub mod router;

pub use domain::{
    CircleRate, GeoVerification, PropertyDetails, PropertyType, RateSource, TitleStatus,
    ValuationError,
};
pub use engine::{PropertyValuation, ValuationEngine};
pub use rates::CircleRateTable;
pub use router::{valuation_router, ValuationRequest};
