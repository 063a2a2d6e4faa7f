//! Month-by-month payment schedule for both plans of a comparison
//!
//! The flat-rate plan spreads its financing cost evenly across installments,
//! so every row carries the same interest and principal split. The bank loan
//! charges interest on the outstanding balance, so its interest portion falls
//! as the balance is repaid.

use crate::comparison::ComparisonResult;
use serde::Serialize;
use std::io;

/// One installment of both plans
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduleRow {
    pub month: u32,

    pub flat_payment: f64,
    pub flat_interest: f64,
    pub flat_principal: f64,
    /// Principal still owed after this installment
    pub flat_balance: f64,

    pub bank_payment: f64,
    pub bank_interest: f64,
    pub bank_principal: f64,
    pub bank_balance: f64,
}

/// Build the full schedule, one row per month of the term
pub fn payment_schedule(result: &ComparisonResult) -> Vec<ScheduleRow> {
    let months = result.term_months;
    let principal = result.principal;

    let flat_payment = result.option_a.monthly_payment;
    let flat_interest = result.option_a.financing_cost / months as f64;
    let flat_principal = principal / months as f64;

    let bank_payment = result.option_b.monthly_payment;
    let bank_monthly_rate = result.option_b.annual_rate / 100.0 / 12.0;

    let mut rows = Vec::with_capacity(months as usize);
    let mut bank_balance = principal;

    for month in 1..=months {
        let bank_interest = bank_balance * bank_monthly_rate;
        let bank_principal = bank_payment - bank_interest;
        bank_balance -= bank_principal;

        rows.push(ScheduleRow {
            month,
            flat_payment,
            flat_interest,
            flat_principal,
            flat_balance: principal - flat_principal * month as f64,
            bank_payment,
            bank_interest,
            bank_principal,
            bank_balance,
        });
    }

    rows
}

/// Write schedule rows as CSV with a header line
pub fn write_schedule_csv<W: io::Write>(rows: &[ScheduleRow], writer: W) -> csv::Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for row in rows {
        csv_writer.serialize(row)?;
    }
    csv_writer.flush()?;
    Ok(())
}
