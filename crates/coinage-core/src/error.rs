//! Core error types for currency lookup and registration.
//!
//! This module defines the central error taxonomy shared by every coinage
//! crate. Each variant corresponds to a distinct caller-visible failure so
//! that "fix your input" and "fix your setup" stay distinguishable.

use thiserror::Error;

/// Central error type for all currency operations.
#[derive(Error, Debug)]
pub enum CurrencyError {
    /// The supplied string is not a syntactically valid currency code
    #[error("invalid currency code: {code}")]
    InvalidCurrencyCode {
        /// The offending input, as supplied by the caller
        code: String,
    },

    /// The supplied string is not a syntactically valid locale identifier
    #[error("invalid locale identifier: {locale}")]
    InvalidLocale {
        /// The offending input, as supplied by the caller
        locale: String,
    },

    /// A syntactically valid code with no matching record in either the
    /// built-in dataset or the private registry
    #[error("unknown currency: {code}")]
    UnknownCurrency {
        /// The code that could not be resolved
        code: String,
    },

    /// A syntactically valid locale with no dataset behind it
    #[error("unknown locale: {locale}")]
    UnknownLocale {
        /// The locale that could not be resolved
        locale: String,
    },

    /// Registration attempted for a code that already resolves
    #[error("currency already defined: {code}")]
    AlreadyDefined {
        /// The code that already resolves to a record
        code: String,
    },

    /// Registration missing a required option
    #[error("missing required option for {code}: {option}")]
    MissingRequiredOption {
        /// The code being registered
        code: String,
        /// Name of the absent option
        option: &'static str,
    },

    /// The registry write failed at the infrastructure level; distinct from
    /// [`CurrencyError::AlreadyDefined`] so callers can tell a broken store
    /// from a logical duplicate
    #[error("currency {code} could not be saved: {reason}")]
    NotSaved {
        /// The code whose registration was lost
        code: String,
        /// What the underlying store reported
        reason: String,
    },
}

/// Result type alias using [`CurrencyError`].
pub type Result<T> = std::result::Result<T, CurrencyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CurrencyError::InvalidCurrencyCode {
            code: "us dollar".to_string(),
        };
        assert_eq!(err.to_string(), "invalid currency code: us dollar");

        let err = CurrencyError::MissingRequiredOption {
            code: "XBC".to_string(),
            option: "digits",
        };
        assert_eq!(err.to_string(), "missing required option for XBC: digits");
    }

    #[test]
    fn test_duplicate_and_not_saved_are_distinct() {
        let dup = CurrencyError::AlreadyDefined {
            code: "XAZ".to_string(),
        };
        let lost = CurrencyError::NotSaved {
            code: "XAZ".to_string(),
            reason: "registry lock poisoned".to_string(),
        };
        assert!(matches!(dup, CurrencyError::AlreadyDefined { .. }));
        assert!(matches!(lost, CurrencyError::NotSaved { .. }));
    }
}
