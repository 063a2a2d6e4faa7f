//! Comparison engine
//!
//! Computes both financing options for a validated request and derives the
//! differences between them. Stateless: a single [`Comparator`] can be shared
//! across threads and requests.

use super::request::{CalculationRequest, ValidatedRequest};
use crate::config::ComparatorConfig;
use crate::error::ComparisonError;
use crate::financing::{amortized_option, flat_rate_option, FinancingOption};
use log::{debug, error};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Which plan costs less in total
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecommendedOption {
    /// Flat-rate plan
    A,
    /// Bank loan
    B,
}

/// Result of comparing the flat-rate plan (A) against the bank loan (B)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonResult {
    pub option_a: FinancingOption,
    pub option_b: FinancingOption,

    /// B.monthly_payment - A.monthly_payment
    pub monthly_payment_delta: f64,

    /// B.financing_cost - A.financing_cost
    pub total_cost_delta: f64,

    /// B.total_amount - A.total_amount
    pub total_savings: f64,

    pub recommended_option: RecommendedOption,
    pub principal: f64,
    pub term_months: u32,
}

impl ComparisonResult {
    /// Build a result from two projected options, deriving every delta field
    pub fn from_options(
        principal: f64,
        term_months: u32,
        option_a: FinancingOption,
        option_b: FinancingOption,
    ) -> Self {
        // Strict: a tie goes to the bank loan
        let recommended_option = if option_a.total_amount < option_b.total_amount {
            RecommendedOption::A
        } else {
            RecommendedOption::B
        };

        Self {
            monthly_payment_delta: option_b.monthly_payment - option_a.monthly_payment,
            total_cost_delta: option_b.financing_cost - option_a.financing_cost,
            total_savings: option_b.total_amount - option_a.total_amount,
            recommended_option,
            principal,
            term_months,
            option_a,
            option_b,
        }
    }

    fn is_finite(&self) -> bool {
        self.option_a.is_finite()
            && self.option_b.is_finite()
            && self.monthly_payment_delta.is_finite()
            && self.total_cost_delta.is_finite()
            && self.total_savings.is_finite()
    }
}

/// Financing comparison engine
#[derive(Debug, Clone, Default)]
pub struct Comparator {
    config: ComparatorConfig,
}

impl Comparator {
    pub fn new(config: ComparatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ComparatorConfig {
        &self.config
    }

    /// Validate and compare a principal and term
    pub fn compare(&self, principal: f64, term_months: u32) -> Result<ComparisonResult, ComparisonError> {
        self.compare_request(&CalculationRequest::new(principal, term_months))
    }

    /// Validate a wire request and compare it
    pub fn compare_request(&self, request: &CalculationRequest) -> Result<ComparisonResult, ComparisonError> {
        let validated = request.validate(&self.config)?;
        self.compare_validated(validated)
    }

    /// Compare an already-validated request
    pub fn compare_validated(&self, request: ValidatedRequest) -> Result<ComparisonResult, ComparisonError> {
        let ValidatedRequest { principal, term_months } = request;

        let option_a = flat_rate_option(
            principal,
            term_months,
            self.config.flat_rate_percent,
            &self.config.flat_label,
        );
        let option_b = amortized_option(
            principal,
            term_months,
            self.config.bank_rate_percent,
            &self.config.bank_label,
        );

        let result = ComparisonResult::from_options(principal, term_months, option_a, option_b);

        if !result.is_finite() {
            let detail = format!(
                "non-finite result for principal={principal} term={term_months}: {result:?}"
            );
            error!("{detail}");
            return Err(ComparisonError::InternalComputation { detail });
        }

        debug!(
            "principal={:.2} term={} flat_total={:.2} bank_total={:.2} recommended={:?}",
            principal,
            term_months,
            result.option_a.total_amount,
            result.option_b.total_amount,
            result.recommended_option
        );

        Ok(result)
    }

    /// Compare one principal against every allowed term, in parallel.
    ///
    /// Results come back in the order of `allowed_terms`.
    pub fn compare_all_terms(&self, principal: f64) -> Vec<Result<ComparisonResult, ComparisonError>> {
        self.config
            .allowed_terms
            .par_iter()
            .map(|&term| self.compare(principal, term))
            .collect()
    }
}
