//! Flat-rate promotional plan

use super::FinancingOption;

/// Project a flat-rate plan.
///
/// Interest is `principal × rate × years` regardless of how much principal
/// has already been repaid.
pub fn flat_rate_option(
    principal: f64,
    term_months: u32,
    annual_rate_percent: f64,
    label: &str,
) -> FinancingOption {
    let annual_rate = annual_rate_percent / 100.0;
    let months = term_months as f64;
    let years = months / 12.0;
    let financing_cost = principal * annual_rate * years;
    let total_amount = principal + financing_cost;

    FinancingOption {
        monthly_payment: total_amount / months,
        total_amount,
        financing_cost,
        annual_rate: annual_rate_percent,
        label: label.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_fifty_thousand_over_five_years() {
        let option = flat_rate_option(50_000.0, 60, 3.59, "Chevy Plan");

        // 50,000 × 3.59% × 5 years
        assert_relative_eq!(option.financing_cost, 8_975.0, max_relative = 1e-12);
        assert_relative_eq!(option.total_amount, 58_975.0, max_relative = 1e-12);
        assert_relative_eq!(option.monthly_payment, 982.916_666_666_666_6, max_relative = 1e-12);
        assert_eq!(option.annual_rate, 3.59);
        assert_eq!(option.label, "Chevy Plan");
    }

    #[test]
    fn test_total_is_principal_plus_cost() {
        for &term in &[24u32, 36, 48, 60, 72, 84] {
            for &principal in &[14_000.0, 27_350.5, 90_000.0] {
                let option = flat_rate_option(principal, term, 3.59, "flat");
                assert_eq!(option.total_amount, principal + option.financing_cost);
            }
        }
    }

    #[test]
    fn test_shortest_term() {
        // 14,000 × 3.59% × 2 years = 1,005.20
        let option = flat_rate_option(14_000.0, 24, 3.59, "flat");
        assert_relative_eq!(option.financing_cost, 1_005.2, max_relative = 1e-12);
        assert_relative_eq!(option.monthly_payment, 625.216_666_666_666_7, max_relative = 1e-12);
    }
}
