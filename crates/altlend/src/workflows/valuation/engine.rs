use chrono::NaiveDate;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::domain::{
    CircleRate, GeoVerification, PropertyDetails, RateSource, TitleStatus, ValuationError,
};
use super::rates::CircleRateTable;
use crate::synthetic::SeededSource;

pub(crate) const CONFIDENCE_SCOPE: &str = "valuation.confidence";

/// Valuation of a property blended from circle and market rates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyValuation {
    pub generated_on: NaiveDate,
    pub property: PropertyDetails,
    pub rate: CircleRate,
    pub rate_source: RateSource,
    pub circle_value: u64,
    pub market_value: u64,
    /// Midpoint of the circle and market values.
    pub estimated_value: u64,
    pub loan_to_value: f64,
    pub max_loan_amount: u64,
    /// Seeded stand-in in 85..100; no model backs it.
    pub confidence_score: u8,
    pub geo_verification: GeoVerification,
    pub title_status: TitleStatus,
}

/// Stateless valuation engine over a circle-rate table.
#[derive(Debug, Clone)]
pub struct ValuationEngine {
    table: CircleRateTable,
    loan_to_value: f64,
    source: SeededSource,
}

impl ValuationEngine {
    pub fn new(
        table: CircleRateTable,
        loan_to_value: f64,
        source: SeededSource,
    ) -> Result<Self, ValuationError> {
        if !(loan_to_value > 0.0 && loan_to_value <= 1.0) {
            return Err(ValuationError::InvalidArgument(format!(
                "loan-to-value {loan_to_value} must be within (0, 1]"
            )));
        }
        Ok(Self {
            table,
            loan_to_value,
            source,
        })
    }

    pub fn table(&self) -> &CircleRateTable {
        &self.table
    }

    pub fn valuate(
        &self,
        property: PropertyDetails,
        generated_on: NaiveDate,
    ) -> Result<PropertyValuation, ValuationError> {
        property.validate()?;

        let (rate, rate_source) = self.table.lookup(&property.city, &property.area);
        if rate_source == RateSource::Fallback {
            warn!(
                city = %property.city,
                area = %property.area,
                fallback = %rate.area,
                "no circle rate for locality; using fallback row"
            );
        }

        let size = u64::from(property.size_sq_ft);
        let circle_value = checked_value(rate.circle_rate, size)?;
        let market_value = checked_value(rate.market_rate, size)?;
        let estimated_value = midpoint(circle_value, market_value);
        let max_loan_amount = (estimated_value as f64 * self.loan_to_value).round() as u64;

        let subject = format!("{}/{}", property.city, property.area);
        let confidence_score = self
            .source
            .rng(CONFIDENCE_SCOPE, &subject)
            .gen_range(85..100);

        debug!(
            %subject,
            estimated_value, max_loan_amount, confidence_score, "valued property"
        );

        Ok(PropertyValuation {
            generated_on,
            rate: rate.clone(),
            rate_source,
            circle_value,
            market_value,
            estimated_value,
            loan_to_value: self.loan_to_value,
            max_loan_amount,
            confidence_score,
            geo_verification: GeoVerification::Verified,
            title_status: TitleStatus::ClearTitle,
            property,
        })
    }
}

fn checked_value(rate: u64, size: u64) -> Result<u64, ValuationError> {
    rate.checked_mul(size).ok_or_else(|| {
        ValuationError::InvalidArgument(format!("{size} sq ft at {rate}/sq ft overflows"))
    })
}

/// Half-up midpoint without overflowing.
fn midpoint(a: u64, b: u64) -> u64 {
    a / 2 + b / 2 + (a % 2 + b % 2 + 1) / 2
}
