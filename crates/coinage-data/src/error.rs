//! Error types for the locale-data subsystem.

use thiserror::Error;

/// Errors that can occur while loading locale datasets.
#[derive(Error, Debug)]
pub enum DataError {
    /// No dataset file exists for the requested locale
    #[error("no dataset for locale: {locale}")]
    NotFound {
        /// The locale that was requested
        locale: String,
    },

    /// Failed to read a dataset file
    #[error("failed to load locale dataset from {path}: {source}")]
    Load {
        /// Path to the dataset file
        path: String,
        /// Underlying error
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Failed to parse dataset TOML
    #[error("failed to parse locale dataset TOML in {path}: {source}")]
    Parse {
        /// Path to the dataset file
        path: String,
        /// TOML parse error
        #[source]
        source: Box<toml::de::Error>,
    },

    /// Invalid dataset contents (validation failed)
    #[error("invalid locale dataset for {locale}: {reason}")]
    Validation {
        /// Locale being validated
        locale: String,
        /// Reason for validation failure
        reason: String,
    },

    /// Invalid currency record (validation failed)
    #[error("invalid currency record {code}: {reason}")]
    InvalidRecord {
        /// Code of the record being validated
        code: String,
        /// Reason for validation failure
        reason: String,
    },

    /// Dataset directory not found
    #[error("locale dataset directory not found at {path}")]
    DirectoryNotFound {
        /// Expected directory path
        path: String,
    },

    /// I/O error while accessing datasets
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid currency code or locale identifier
    #[error(transparent)]
    Currency(#[from] coinage_core::CurrencyError),
}

/// Result type for locale-data operations.
pub type Result<T> = std::result::Result<T, DataError>;
