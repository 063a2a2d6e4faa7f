//! Financing comparison engine
//!
//! Compares a flat-rate promotional financing plan against a standard
//! amortized bank loan for a requested principal and term:
//! - `comparison`: request validation and the comparison itself
//! - `financing`: the flat-rate and annuity models
//! - `schedule`: month-by-month installment breakdown
//! - `http`: Lambda request handler

pub mod config;
pub mod error;
pub mod financing;
pub mod comparison;
pub mod schedule;
pub mod http;

pub use config::ComparatorConfig;
pub use error::{ComparisonError, ConfigError};
pub use financing::FinancingOption;
pub use comparison::{CalculationRequest, Comparator, ComparisonResult, RecommendedOption};
pub use schedule::{payment_schedule, ScheduleRow};
