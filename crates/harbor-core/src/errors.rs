//! Error types for Harbor

use thiserror::Error;

/// Top-level errors that can occur in Harbor
#[derive(Debug, Error)]
pub enum Error {
    #[error("Form error: {0}")]
    Form(#[from] FormError),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Rejected form transitions.
///
/// Every variant is a local validation failure. The form that produced it is
/// left exactly as it was before the call.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormError {
    #[error("Invalid currency index {index} (table has {available} entries)")]
    InvalidCurrencyIndex { index: usize, available: usize },

    #[error("Invalid {field}: {value} (must be a finite, non-negative number)")]
    InvalidAmount { field: &'static str, value: f64 },

    #[error("A submission is already in progress")]
    AlreadySubmitting,

    #[error("Cannot edit {field} while a submission is in progress")]
    EditWhileSubmitting { field: &'static str },
}

/// Result type alias for Harbor operations
pub type Result<T> = std::result::Result<T, Error>;

impl FormError {
    /// Stable machine-readable code for the UI layer
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidCurrencyIndex { .. } => "invalid_currency_index",
            Self::InvalidAmount { .. } => "invalid_amount",
            Self::AlreadySubmitting => "already_submitting",
            Self::EditWhileSubmitting { .. } => "edit_while_submitting",
        }
    }
}

impl Error {
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Form(e) => e.error_code(),
            Self::Config(_) => "config_error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_error_codes() {
        let err = FormError::InvalidCurrencyIndex {
            index: 7,
            available: 4,
        };
        assert_eq!(err.error_code(), "invalid_currency_index");

        let err = FormError::InvalidAmount {
            field: "txFee",
            value: -1.0,
        };
        assert_eq!(err.error_code(), "invalid_amount");
        assert!(err.to_string().contains("txFee"));

        assert_eq!(FormError::AlreadySubmitting.error_code(), "already_submitting");
        assert_eq!(
            FormError::EditWhileSubmitting { field: "amount" }.error_code(),
            "edit_while_submitting"
        );
    }

    #[test]
    fn test_top_level_error_wraps_form_error() {
        let err: Error = FormError::AlreadySubmitting.into();
        assert_eq!(err.error_code(), "already_submitting");
        assert_eq!(
            err.to_string(),
            "Form error: A submission is already in progress"
        );
    }
}
