use altlend::config::LendingConfig;
use altlend::error::AppError;
use altlend::synthetic::SeededSource;
use altlend::workflows::lending::{QuoteEngine, QuotePolicy};
use altlend::workflows::underwriting::{ScoringEngine, UnderwritingDesk};
use altlend::workflows::valuation::{CircleRateTable, ValuationEngine};
use chrono::NaiveDate;
use metrics_exporter_prometheus::PrometheusHandle;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Engines shared by the HTTP routes and the CLI commands.
#[derive(Clone)]
pub(crate) struct Engines {
    pub(crate) desk: Arc<UnderwritingDesk>,
    pub(crate) quotes: Arc<QuoteEngine>,
    pub(crate) valuation: Arc<ValuationEngine>,
}

impl Engines {
    pub(crate) fn from_config(
        config: &LendingConfig,
        rates_override: Option<&Path>,
    ) -> Result<Self, AppError> {
        let source = SeededSource::new(config.synthetic_seed);

        let table = match rates_override.or(config.circle_rates_csv.as_deref()) {
            Some(path) => {
                let table = CircleRateTable::from_path(path)?;
                info!(path = %path.display(), rows = table.rates().len(), "loaded circle rates");
                table
            }
            None => CircleRateTable::standard(),
        };

        let policy = QuotePolicy {
            illustration_tenure_years: config.quote_tenure_years,
            ..QuotePolicy::default()
        };

        Ok(Self {
            desk: Arc::new(UnderwritingDesk::new(ScoringEngine::default(), source)),
            quotes: Arc::new(QuoteEngine::new(policy, source)?),
            valuation: Arc::new(ValuationEngine::new(table, config.loan_to_value, source)?),
        })
    }
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_date_accepts_iso_dates() {
        assert_eq!(
            parse_date(" 2026-10-16 "),
            Ok(NaiveDate::from_ymd_opt(2026, 10, 16).expect("valid date"))
        );
        assert!(parse_date("16/10/2026").is_err());
    }

    #[test]
    fn engines_build_from_default_config() {
        let engines = Engines::from_config(&LendingConfig::default(), None).expect("engines");
        assert_eq!(engines.quotes.policy().illustration_tenure_years, 20);
        assert_eq!(engines.valuation.table(), &CircleRateTable::standard());
    }

    #[test]
    fn missing_rate_file_surfaces_as_valuation_error() {
        let result = Engines::from_config(
            &LendingConfig::default(),
            Some(Path::new("/nonexistent/circle-rates.csv")),
        );
        assert!(matches!(result, Err(AppError::Valuation(_))));
    }
}
