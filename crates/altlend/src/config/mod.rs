use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub lending: LendingConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            lending: LendingConfig::from_env()?,
        })
    }
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Knobs shared by the underwriting, valuation, and quote engines.
#[derive(Debug, Clone, PartialEq)]
pub struct LendingConfig {
    /// Base seed for every synthetic value the demo fabricates.
    pub synthetic_seed: u64,
    /// Share of the estimated property value that may be lent.
    pub loan_to_value: f64,
    /// Tenure used for the EMI illustration on quotes.
    pub quote_tenure_years: u32,
    /// Optional CSV replacing the built-in circle-rate table.
    pub circle_rates_csv: Option<PathBuf>,
}

impl Default for LendingConfig {
    fn default() -> Self {
        Self {
            synthetic_seed: 42,
            loan_to_value: 0.8,
            quote_tenure_years: 20,
            circle_rates_csv: None,
        }
    }
}

impl LendingConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let synthetic_seed = parse_var("APP_SYNTHETIC_SEED", defaults.synthetic_seed)?;
        let loan_to_value = parse_var("APP_LOAN_TO_VALUE", defaults.loan_to_value)?;
        if !(loan_to_value > 0.0 && loan_to_value <= 1.0) {
            return Err(ConfigError::InvalidNumber {
                key: "APP_LOAN_TO_VALUE",
                value: loan_to_value.to_string(),
            });
        }
        let quote_tenure_years =
            parse_var("APP_QUOTE_TENURE_YEARS", defaults.quote_tenure_years)?;
        if quote_tenure_years == 0 {
            return Err(ConfigError::InvalidNumber {
                key: "APP_QUOTE_TENURE_YEARS",
                value: "0".to_string(),
            });
        }

        let circle_rates_csv = env::var("APP_CIRCLE_RATES_CSV")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            synthetic_seed,
            loan_to_value,
            quote_tenure_years,
            circle_rates_csv,
        })
    }
}

fn parse_var<T: std::str::FromStr>(key: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(key) {
        Ok(raw) => raw.trim().parse::<T>().map_err(|_| ConfigError::InvalidNumber {
            key,
            value: raw,
        }),
        Err(_) => Ok(default),
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidNumber { key: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must be an IP address or 'localhost'")
            }
            ConfigError::InvalidNumber { key, value } => {
                write!(f, "{key} has an invalid value '{value}'")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidPort | ConfigError::InvalidNumber { .. } => None,
            ConfigError::InvalidHost { source } => Some(source),
        }
    }
}
