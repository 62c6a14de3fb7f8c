//! # Error Types
//!
//! A single error enum covers the whole crate. There are exactly two
//! failure kinds: the input was absent, or it was present but malformed.
//!
//! ## PII Safety
//!
//! Both variants carry only `&'static str` context: the name of the
//! field or operand and a fixed reason. No variant can hold a raw or
//! normalized value, so formatting an error can never leak the personal
//! data that caused it.

use thiserror::Error;

/// Error returned by every normalization, digest, and encoding operation.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PiiError {
    /// The input value was absent (`None`).
    #[error("{subject} is missing")]
    NullInput {
        /// Field or operand name, e.g. `"email"` or `"digest input"`.
        subject: &'static str,
    },

    /// The input value was present but failed a validity rule.
    #[error("{subject} is not in a valid format: {reason}")]
    InvalidFormat {
        /// Field or operand name.
        subject: &'static str,
        /// Which rule was violated.
        reason: &'static str,
    },
}

impl PiiError {
    pub(crate) fn null(subject: &'static str) -> Self {
        Self::NullInput { subject }
    }

    pub(crate) fn invalid(subject: &'static str, reason: &'static str) -> Self {
        Self::InvalidFormat { subject, reason }
    }

    /// True when the input was absent rather than malformed.
    pub fn is_null_input(&self) -> bool {
        matches!(self, Self::NullInput { .. })
    }

    /// True when the input was present but rejected.
    pub fn is_invalid_format(&self) -> bool {
        matches!(self, Self::InvalidFormat { .. })
    }

    /// The field or operand the error refers to.
    pub fn subject(&self) -> &'static str {
        match self {
            Self::NullInput { subject } | Self::InvalidFormat { subject, .. } => subject,
        }
    }
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, PiiError>;
