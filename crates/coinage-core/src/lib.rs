//! Coinage Core - Foundation crate for the coinage currency-metadata library.
//!
//! This crate provides the validated identifier types and the central error
//! taxonomy that the other coinage crates depend on.
//!
//! # Modules
//!
//! - [`error`] - Central error types using thiserror
//! - [`types`] - Validated newtypes and enums (`CurrencyCode`, `LocaleId`,
//!   `PluralCategory`)
//!
//! # Example
//!
//! ```rust
//! use coinage_core::{CurrencyCode, LocaleId};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let code = CurrencyCode::new("usd")?;
//! assert_eq!(code.as_str(), "USD");
//! assert!(!code.is_private_use());
//!
//! let locale = LocaleId::new("en_US")?;
//! assert_eq!(locale.as_str(), "en-US");
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod error;
pub mod types;

// Re-export commonly used types
pub use error::{CurrencyError, Result};
pub use types::{CurrencyCode, LocaleId, PluralCategory};
