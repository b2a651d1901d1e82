use serde::{Deserialize, Serialize};

/// Property category on the valuation form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyType {
    Residential,
    Commercial,
    Plot,
}

impl PropertyType {
    pub fn label(&self) -> &'static str {
        match self {
            PropertyType::Residential => "Residential",
            PropertyType::Commercial => "Commercial",
            PropertyType::Plot => "Plot",
        }
    }
}

/// Property submitted for valuation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyDetails {
    pub property_type: PropertyType,
    pub city: String,
    /// Locality within the city, matched against the rate table by substring.
    pub area: String,
    pub size_sq_ft: u32,
}

impl PropertyDetails {
    pub fn validate(&self) -> Result<(), ValuationError> {
        if self.city.trim().is_empty() {
            return Err(ValuationError::InvalidArgument(
                "city is required".to_string(),
            ));
        }
        if self.area.trim().is_empty() {
            return Err(ValuationError::InvalidArgument(
                "area is required".to_string(),
            ));
        }
        if self.size_sq_ft == 0 {
            return Err(ValuationError::InvalidArgument(
                "property size must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/// Government circle rate and prevailing market rate for a locality, per sq ft.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CircleRate {
    pub city: String,
    pub area: String,
    pub circle_rate: u64,
    pub market_rate: u64,
}

/// Whether the rate row matched the request or is the table's fallback row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RateSource {
    Matched,
    Fallback,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GeoVerification {
    Verified,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TitleStatus {
    ClearTitle,
}

/// Error raised by the valuation workflow.
#[derive(Debug, thiserror::Error)]
pub enum ValuationError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("circle rate table is empty")]
    EmptyRateTable,
    #[error("invalid rate '{value}' for {city}/{area}")]
    InvalidRate {
        city: String,
        area: String,
        value: String,
    },
    #[error("failed to read circle rate table: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid circle rate CSV data: {0}")]
    Csv(#[from] csv::Error),
}
