//! Coinage Data - Locale dataset boundary for the coinage library.
//!
//! This crate owns the [`CurrencyRecord`] value type and the loading of
//! per-locale currency datasets from TOML files. Datasets live in the
//! `locale-data/` directory at the workspace root, one file per locale.
//!
//! # Architecture
//!
//! - **Record types** ([`definition`]): the immutable currency record, the
//!   dataset deserialization shape, and registration options
//! - **Loader** ([`loader`]): TOML dataset loading and validation
//! - **Errors** ([`error`]): data-specific error types
//!
//! # Example
//!
//! ```rust,no_run
//! use coinage_core::LocaleId;
//! use coinage_data::LocaleLoader;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let loader = LocaleLoader::with_default_dir()?;
//! let dataset = loader.load(&LocaleId::new("en")?)?;
//!
//! for record in dataset.currencies.values() {
//!     println!("{}: {}", record.code, record.name);
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod definition;
pub mod error;
pub mod loader;

// Re-export commonly used types
pub use definition::{CurrencyData, CurrencyOptions, CurrencyRecord};
pub use error::{DataError, Result};
pub use loader::{LocaleDataset, LocaleLoader};
