//! The two financing models compared by the engine
//!
//! - **Flat rate**: interest charged once on the full principal for every year
//!   of the term, spread evenly over the monthly payments
//! - **Amortized**: fixed-rate annuity loan with monthly compounding (French method)

mod flat_rate;
mod amortized;

pub use flat_rate::flat_rate_option;
pub use amortized::{amortized_option, annuity_payment};

use serde::{Deserialize, Serialize};

/// Projection of one financing plan for a given principal and term
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancingOption {
    /// Constant monthly installment
    pub monthly_payment: f64,

    /// Sum of all installments (principal + financing cost)
    pub total_amount: f64,

    /// Interest paid over the life of the plan
    pub financing_cost: f64,

    /// Annual rate in percent (3.59, 16.0)
    pub annual_rate: f64,

    pub label: String,
}

impl FinancingOption {
    /// All monetary fields are finite numbers
    pub fn is_finite(&self) -> bool {
        self.monthly_payment.is_finite()
            && self.total_amount.is_finite()
            && self.financing_cost.is_finite()
    }
}
