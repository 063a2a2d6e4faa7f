//! Comparator parameters: rates, principal bounds, allowed terms and labels
//!
//! Defaults reproduce the published promotional plan (3.59% flat) against a
//! 16% annual bank loan for principals between $14,000 and $90,000.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Environment variable holding an optional JSON config path for the Lambda handler
pub const CONFIG_PATH_ENV: &str = "COMPARATOR_CONFIG";

/// Parameters for a comparison run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparatorConfig {
    /// Flat annual rate in percent, charged on the full principal for each year
    #[serde(default = "default_flat_rate_percent")]
    pub flat_rate_percent: f64,

    /// Nominal annual rate of the amortized bank loan in percent, compounded monthly
    #[serde(default = "default_bank_rate_percent")]
    pub bank_rate_percent: f64,

    /// Smallest principal accepted (inclusive)
    #[serde(default = "default_min_principal")]
    pub min_principal: f64,

    /// Largest principal accepted (inclusive)
    #[serde(default = "default_max_principal")]
    pub max_principal: f64,

    /// Accepted terms in months
    #[serde(default = "default_allowed_terms")]
    pub allowed_terms: Vec<u32>,

    #[serde(default = "default_flat_label")]
    pub flat_label: String,

    #[serde(default = "default_bank_label")]
    pub bank_label: String,
}

fn default_flat_rate_percent() -> f64 { 3.59 }
fn default_bank_rate_percent() -> f64 { 16.0 }
fn default_min_principal() -> f64 { 14_000.0 }
fn default_max_principal() -> f64 { 90_000.0 }
fn default_allowed_terms() -> Vec<u32> { vec![24, 36, 48, 60, 72, 84] }
fn default_flat_label() -> String { "Chevy Plan".to_string() }
fn default_bank_label() -> String { "Crédito Bancario".to_string() }

impl Default for ComparatorConfig {
    fn default() -> Self {
        Self {
            flat_rate_percent: default_flat_rate_percent(),
            bank_rate_percent: default_bank_rate_percent(),
            min_principal: default_min_principal(),
            max_principal: default_max_principal(),
            allowed_terms: default_allowed_terms(),
            flat_label: default_flat_label(),
            bank_label: default_bank_label(),
        }
    }
}

impl ComparatorConfig {
    /// Load from a JSON file. Missing fields fall back to defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config: Self = serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load from the file named by `COMPARATOR_CONFIG`, or defaults when unset
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var_os(CONFIG_PATH_ENV) {
            Some(path) if !path.is_empty() => Self::from_json_file(path),
            _ => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        check_rate("flat_rate_percent", self.flat_rate_percent)?;
        check_rate("bank_rate_percent", self.bank_rate_percent)?;

        if !self.min_principal.is_finite() || self.min_principal <= 0.0 {
            return Err(ConfigError::Invalid {
                field: "min_principal",
                reason: format!("must be a positive amount (got {})", self.min_principal),
            });
        }
        if !self.max_principal.is_finite() || self.min_principal > self.max_principal {
            return Err(ConfigError::Invalid {
                field: "max_principal",
                reason: format!(
                    "must be at least min_principal {} (got {})",
                    self.min_principal, self.max_principal
                ),
            });
        }

        if self.allowed_terms.is_empty() {
            return Err(ConfigError::Invalid {
                field: "allowed_terms",
                reason: "must list at least one term".to_string(),
            });
        }
        if self.allowed_terms.contains(&0) {
            return Err(ConfigError::Invalid {
                field: "allowed_terms",
                reason: "terms must be at least one month".to_string(),
            });
        }

        Ok(())
    }
}

fn check_rate(field: &'static str, rate: f64) -> Result<(), ConfigError> {
    if rate.is_finite() && rate > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            field,
            reason: format!("must be a positive finite percentage (got {rate})"),
        })
    }
}
