//! Request validation and the flat-rate vs. bank comparison

mod request;
mod comparator;

pub use request::{CalculationRequest, ValidatedRequest};
pub use comparator::{Comparator, ComparisonResult, RecommendedOption};
