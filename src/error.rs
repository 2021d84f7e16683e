//! Error types shared by every lab.

use thiserror::Error;

/// Errors raised while generating inputs, running variants or reporting.
#[derive(Debug, Error)]
pub enum LabError {
    /// A digit-of-pi variant was asked for a negative index.
    #[error("digit index must be non-negative, got {index}")]
    NegativeDigitIndex {
        /// The rejected index.
        index: i64,
    },

    /// A lab or generator parameter is outside its accepted range.
    #[error("invalid parameter '{parameter}' = '{value}': {reason}")]
    InvalidParameter {
        /// Name of the parameter.
        parameter: &'static str,
        /// Offending value, rendered as text.
        value: String,
        /// Why the value was rejected.
        reason: String,
    },

    /// No lab is registered under the requested name.
    #[error("no lab named '{name}' (available: {available})")]
    UnknownLab {
        /// Requested name.
        name: String,
        /// Comma separated list of registered labs.
        available: String,
    },

    /// Two variants of the same lab disagreed on a reference input.
    #[error("lab '{lab}': variant '{variant}' failed verification: {reason}")]
    Verification {
        /// Lab being verified.
        lab: &'static str,
        /// Variant that disagreed with the reference.
        variant: &'static str,
        /// Description of the mismatch.
        reason: String,
    },

    /// Writing a report failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, LabError>;

/// Build an [`LabError::InvalidParameter`].
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> LabError {
    LabError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Build an [`LabError::Verification`].
pub fn verification_failed(lab: &'static str, variant: &'static str, reason: impl Into<String>) -> LabError {
    LabError::Verification {
        lab,
        variant,
        reason: reason.into(),
    }
}
