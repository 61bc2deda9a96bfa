use serde::{Deserialize, Serialize};

use crate::utils::currency::CurrencyRules;
use crate::utils::web::ApiEndpoints;

/// Top-level configuration structure that mirrors the YAML configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct Config {
    /// General settings
    #[serde(default)]
    pub general: GeneralConfig,
    /// Currency symbol table
    #[serde(default)]
    pub currency: CurrencyRules,
    /// Base URLs of the exchange-rate and geocoding services
    #[serde(default)]
    pub apis: ApiEndpoints,
}

/// General settings
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct GeneralConfig {
    /// (Optional) Log filter used when none is given on the command line
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,
}

impl Config {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(level) = &self.general.log_level {
            if level.trim().is_empty() {
                return Err(ValidationError::InvalidGeneral(
                    "log_level cannot be empty".to_string(),
                ));
            }
        }

        if self.currency.default_symbol.is_empty() {
            return Err(ValidationError::InvalidCurrency(
                "default_symbol cannot be empty".to_string(),
            ));
        }

        for (i, rule) in self.currency.rules.iter().enumerate() {
            if rule.countries.is_empty() {
                return Err(ValidationError::InvalidCurrency(format!(
                    "rule {} must list at least one country",
                    i
                )));
            }
            if rule.symbol.is_empty() {
                return Err(ValidationError::InvalidCurrency(format!(
                    "rule {} ({}) has an empty symbol",
                    i,
                    rule.countries.join(", ")
                )));
            }
        }

        let endpoints = [
            ("exchange_rate_api_url", &self.apis.exchange_rate_api_url),
            ("rates_api_url", &self.apis.rates_api_url),
            ("geocode_api_url", &self.apis.geocode_api_url),
        ];
        for (name, url) in endpoints {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(ValidationError::InvalidApi(format!(
                    "{} must be an http(s) URL, got '{}'",
                    name, url
                )));
            }
        }

        Ok(())
    }
}

/// Configuration validation errors
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("Invalid general configuration: {0}")]
    InvalidGeneral(String),
    #[error("Invalid currency configuration: {0}")]
    InvalidCurrency(String),
    #[error("Invalid API configuration: {0}")]
    InvalidApi(String),
}
