//! Amortized bank loan (annuity method, monthly compounding)

use super::FinancingOption;

/// Level monthly payment that repays `principal` over `term_months` at `monthly_rate`.
///
/// Falls back to straight-line repayment when the rate is zero.
pub fn annuity_payment(principal: f64, monthly_rate: f64, term_months: u32) -> f64 {
    if monthly_rate == 0.0 {
        return principal / term_months as f64;
    }
    let growth_factor = (1.0 + monthly_rate).powi(term_months as i32);
    principal * (monthly_rate * growth_factor) / (growth_factor - 1.0)
}

/// Project a fixed-rate amortized loan; the nominal annual rate compounds monthly
pub fn amortized_option(
    principal: f64,
    term_months: u32,
    annual_rate_percent: f64,
    label: &str,
) -> FinancingOption {
    let monthly_rate = annual_rate_percent / 100.0 / 12.0;
    let monthly_payment = annuity_payment(principal, monthly_rate, term_months);
    let total_amount = monthly_payment * term_months as f64;

    FinancingOption {
        monthly_payment,
        total_amount,
        financing_cost: total_amount - principal,
        annual_rate: annual_rate_percent,
        label: label.to_string(),
    }
}
