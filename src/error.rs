//! Error types for comparison requests and configuration loading

use std::borrow::Borrow;

use thiserror::Error;

/// Errors produced while validating a request or computing a comparison
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ComparisonError {
    /// Principal or term absent, null, zero or NaN
    #[error("principal and termMonths are required")]
    MissingField,

    #[error("principal must be between ${lo} and ${hi} (got {principal})", lo = format_amount(.min), hi = format_amount(.max))]
    PrincipalOutOfRange { principal: f64, min: f64, max: f64 },

    #[error("termMonths must be one of {} months (got {term})", format_terms(.allowed))]
    InvalidTerm { term: f64, allowed: Vec<u32> },

    /// Request body could not be decoded into a calculation request
    #[error("request body is not a valid calculation request: {0}")]
    MalformedRequest(String),

    /// A computed value came out non-finite. The detail is for logs only.
    #[error("error processing the calculation")]
    InternalComputation { detail: String },
}

impl ComparisonError {
    /// Stable machine-readable name, used as the `kind` field in error responses
    pub fn kind(&self) -> &'static str {
        match self {
            ComparisonError::MissingField => "MissingField",
            ComparisonError::PrincipalOutOfRange { .. } => "PrincipalOutOfRange",
            ComparisonError::InvalidTerm { .. } => "InvalidTerm",
            ComparisonError::MalformedRequest(_) => "MalformedRequest",
            ComparisonError::InternalComputation { .. } => "InternalComputationError",
        }
    }

    /// True when the caller must correct the input; false for server-side failures
    pub fn is_client_error(&self) -> bool {
        !matches!(self, ComparisonError::InternalComputation { .. })
    }
}

/// Errors raised while loading or validating a [`crate::ComparatorConfig`]
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid config: {field} {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Whole-dollar amount with thousands separators, e.g. 14000 -> "14,000"
pub(crate) fn format_amount(value: impl Borrow<f64>) -> String {
    let whole = value.borrow().round() as i64;
    let digits = whole.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if whole < 0 {
        out.insert(0, '-');
    }
    out
}

/// "24, 36 or 48" style list
pub(crate) fn format_terms(terms: &[u32]) -> String {
    match terms {
        [] => String::new(),
        [only] => only.to_string(),
        [rest @ .., last] => {
            let head: Vec<String> = rest.iter().map(|t| t.to_string()).collect();
            format!("{} or {}", head.join(", "), last)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(14000.0), "14,000");
        assert_eq!(format_amount(90000.0), "90,000");
        assert_eq!(format_amount(999.0), "999");
        assert_eq!(format_amount(1_234_567.0), "1,234,567");
    }

    #[test]
    fn test_format_terms() {
        assert_eq!(format_terms(&[24, 36, 48, 60, 72, 84]), "24, 36, 48, 60, 72 or 84");
        assert_eq!(format_terms(&[12]), "12");
    }

    #[test]
    fn test_messages() {
        let err = ComparisonError::PrincipalOutOfRange {
            principal: 13999.0,
            min: 14000.0,
            max: 90000.0,
        };
        assert_eq!(
            err.to_string(),
            "principal must be between $14,000 and $90,000 (got 13999)"
        );

        let err = ComparisonError::InvalidTerm {
            term: 61.0,
            allowed: vec![24, 36, 48, 60, 72, 84],
        };
        assert_eq!(
            err.to_string(),
            "termMonths must be one of 24, 36, 48, 60, 72 or 84 months (got 61)"
        );
    }

    #[test]
    fn test_classification() {
        assert!(ComparisonError::MissingField.is_client_error());
        assert!(ComparisonError::MalformedRequest("eof".into()).is_client_error());
        let internal = ComparisonError::InternalComputation { detail: "NaN".into() };
        assert!(!internal.is_client_error());
        assert_eq!(internal.kind(), "InternalComputationError");
        // Detail never leaks into the public message
        assert_eq!(internal.to_string(), "error processing the calculation");
    }
}
