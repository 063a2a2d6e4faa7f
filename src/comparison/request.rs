//! Inbound calculation request and its validation rules

use crate::config::ComparatorConfig;
use crate::error::ComparisonError;
use serde::{Deserialize, Serialize};

/// Request as received on the wire. Both fields may be absent or null.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationRequest {
    #[serde(default)]
    pub principal: Option<f64>,

    /// Kept as a float so fractional terms are reported as invalid terms
    /// rather than decoding failures
    #[serde(default)]
    pub term_months: Option<f64>,
}

impl CalculationRequest {
    pub fn new(principal: f64, term_months: u32) -> Self {
        Self {
            principal: Some(principal),
            term_months: Some(term_months as f64),
        }
    }

    /// Apply the validation rules in order; the first failure wins.
    ///
    /// 1. both fields present and non-zero
    /// 2. principal within the configured bounds (inclusive)
    /// 3. term is one of the allowed terms
    pub fn validate(&self, config: &ComparatorConfig) -> Result<ValidatedRequest, ComparisonError> {
        let principal = present(self.principal).ok_or(ComparisonError::MissingField)?;
        let term = present(self.term_months).ok_or(ComparisonError::MissingField)?;

        if principal < config.min_principal || principal > config.max_principal {
            return Err(ComparisonError::PrincipalOutOfRange {
                principal,
                min: config.min_principal,
                max: config.max_principal,
            });
        }

        let term_months = config
            .allowed_terms
            .iter()
            .copied()
            .find(|&allowed| allowed as f64 == term)
            .ok_or_else(|| ComparisonError::InvalidTerm {
                term,
                allowed: config.allowed_terms.clone(),
            })?;

        Ok(ValidatedRequest { principal, term_months })
    }
}

/// Zero and NaN count as missing, like null
fn present(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v != 0.0 && !v.is_nan())
}

/// A request that passed validation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidatedRequest {
    pub principal: f64,
    pub term_months: u32,
}
