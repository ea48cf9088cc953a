use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use crate::workflows::financing::{SimulationPolicy, DEFAULT_MARGIN_FACTOR};
use crate::workflows::leads::{LeadIntakeRules, DEFAULT_MINIMUM_INCOME};

/// Broker messaging number used when none is configured.
pub const DEFAULT_BROKER_PHONE: &str = "5585981211819";

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
    pub simulation: SimulationConfig,
    pub contact: ContactConfig,
    pub catalog: CatalogConfig,
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

        let margin_factor = match env::var("APP_MARGIN_FACTOR") {
            Ok(raw) => parse_margin_factor(&raw)?,
            Err(_) => DEFAULT_MARGIN_FACTOR,
        };
        let minimum_income = match env::var("APP_MINIMUM_INCOME") {
            Ok(raw) => parse_minimum_income(&raw)?,
            Err(_) => DEFAULT_MINIMUM_INCOME,
        };

        let broker_phone =
            env::var("APP_BROKER_PHONE").unwrap_or_else(|_| DEFAULT_BROKER_PHONE.to_string());
        let broker_phone = broker_phone.trim().to_string();
        if broker_phone.is_empty() || !broker_phone.chars().all(|ch| ch.is_ascii_digit()) {
            return Err(ConfigError::InvalidBrokerPhone);
        }

        let seed_csv = env::var("APP_CATALOG_CSV")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            simulation: SimulationConfig {
                margin_factor,
                minimum_income,
            },
            contact: ContactConfig { broker_phone },
            catalog: CatalogConfig { seed_csv },
        })
    }
}

/// Parse a margin factor; it must be finite and not shrink the budget.
pub fn parse_margin_factor(raw: &str) -> Result<f64, ConfigError> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite() && *value >= 1.0)
        .ok_or_else(|| ConfigError::InvalidMarginFactor {
            value: raw.to_string(),
        })
}

fn parse_minimum_income(raw: &str) -> Result<f64, ConfigError> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite() && *value >= 0.0)
        .ok_or_else(|| ConfigError::InvalidMinimumIncome {
            value: raw.to_string(),
        })
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

/// Tracing and metrics controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Simulator and intake thresholds.
#[derive(Debug, Clone, Copy)]
pub struct SimulationConfig {
    pub margin_factor: f64,
    pub minimum_income: f64,
}

impl SimulationConfig {
    pub fn policy(&self) -> SimulationPolicy {
        SimulationPolicy {
            margin_factor: self.margin_factor,
        }
    }

    pub fn intake_rules(&self) -> LeadIntakeRules {
        LeadIntakeRules {
            minimum_income: self.minimum_income,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ContactConfig {
    pub broker_phone: String,
}

#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// CSV export loaded into the catalog at startup.
    pub seed_csv: Option<PathBuf>,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidMarginFactor { value: String },
    InvalidMinimumIncome { value: String },
    InvalidBrokerPhone,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidMarginFactor { value } => write!(
                f,
                "APP_MARGIN_FACTOR must be a number >= 1.0 (got '{}')",
                value
            ),
            ConfigError::InvalidMinimumIncome { value } => write!(
                f,
                "APP_MINIMUM_INCOME must be a non-negative number (got '{}')",
                value
            ),
            ConfigError::InvalidBrokerPhone => {
                write!(f, "APP_BROKER_PHONE must contain digits only")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidHost { source } => Some(source),
            ConfigError::InvalidPort
            | ConfigError::InvalidMarginFactor { .. }
            | ConfigError::InvalidMinimumIncome { .. }
            | ConfigError::InvalidBrokerPhone => None,
        }
    }
}
