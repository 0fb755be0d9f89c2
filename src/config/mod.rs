use std::env;
use std::str::FromStr;
use std::time::Duration;

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::core::numeric::{DEFAULT_SHIPPING_COST, DEFAULT_TAX_RATE};
use crate::core::{AppError, PricingDefaults, Result};

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub app: AppConfig,
    pub backend: BackendConfig,
    pub pricing: PricingDefaults,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub env: String,
    pub log_level: String,
}

impl AppConfig {
    /// Tracing filter used when `RUST_LOG` is not set
    pub fn log_filter(&self) -> String {
        format!("invoice_desk={}", self.log_level.trim().to_lowercase())
    }
}

/// Where the invoicing backend lives and how long to wait for it
#[derive(Debug, Clone, Deserialize)]
pub struct BackendConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl BackendConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_secs: 30,
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Base URL without a trailing slash
    pub fn base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let config = Config {
            app: AppConfig {
                env: env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
                log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            },
            backend: BackendConfig {
                base_url: env::var("INVOICE_API_BASE_URL")
                    .unwrap_or_else(|_| "http://localhost:3000".to_string()),
                timeout_secs: env::var("INVOICE_API_TIMEOUT_SECS")
                    .unwrap_or_else(|_| "30".to_string())
                    .parse()
                    .map_err(|_| {
                        AppError::configuration("Invalid INVOICE_API_TIMEOUT_SECS")
                    })?,
            },
            pricing: PricingDefaults {
                tax_rate: decimal_var("DEFAULT_TAX_RATE", DEFAULT_TAX_RATE)?,
                shipping_cost: decimal_var("DEFAULT_SHIPPING_COST", DEFAULT_SHIPPING_COST)?,
            },
        };

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.backend.timeout_secs == 0 {
            return Err(AppError::configuration(
                "Backend timeout must be greater than 0",
            ));
        }

        let base = self.backend.base_url();
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            return Err(AppError::configuration(format!(
                "INVOICE_API_BASE_URL must be an http(s) URL, got: {}",
                base
            )));
        }

        if self.pricing.tax_rate < Decimal::ZERO || self.pricing.shipping_cost < Decimal::ZERO {
            return Err(AppError::configuration(
                "Default tax rate and shipping cost cannot be negative",
            ));
        }

        Ok(())
    }
}

fn decimal_var(name: &str, default: Decimal) -> Result<Decimal> {
    match env::var(name) {
        Ok(raw) => Decimal::from_str(raw.trim())
            .map_err(|_| AppError::configuration(format!("Invalid {}", name))),
        Err(_) => Ok(default),
    }
}
