//! Coinage Lookup - Classification, filtering, and string resolution for
//! locale-aware currency metadata.
//!
//! This crate answers two classes of query over the datasets loaded by
//! `coinage-data`: "what is the metadata/status of currency X in locale L",
//! and "given a human-typed string, which currency does it refer to in
//! locale L". It also hosts the process-lifetime registry for private-use
//! currencies.
//!
//! # Architecture
//!
//! - **Classifier** ([`classify`]): pure status predicates over a record
//! - **Filter engine** ([`filter`]): `only`/`except` set algebra built from
//!   status selectors, explicit codes, and the live private set
//! - **String index** ([`index`]): per-locale reverse index from display
//!   strings to codes, with conservative collision handling
//! - **Registry** ([`registry`]): insert-if-absent store for private-use
//!   currencies
//! - **Repository** ([`repository`]): locale to (currency map, index)
//!   dispatch with build-once memoization
//! - **Facade** ([`lookup`]): the public query surface
//!
//! # Example
//!
//! ```rust,no_run
//! use coinage_core::LocaleId;
//! use coinage_data::LocaleLoader;
//! use coinage_lookup::{CurrencyLookup, CurrencySelector, LocaleRepository};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let loader = LocaleLoader::with_default_dir()?;
//! let lookup = CurrencyLookup::new(LocaleRepository::load_from(&loader)?);
//!
//! let en = LocaleId::new("en")?;
//! let dollar = lookup.currency_for_code("USD", &en)?;
//! println!("{}: {} digits", dollar.name, dollar.digits);
//!
//! let tender = lookup.currencies_for_locale(&en, &[CurrencySelector::Tender], &[])?;
//! println!("{} tender currencies", tender.len());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod classify;
pub mod filter;
pub mod index;
pub mod lookup;
pub mod registry;
pub mod repository;

// Re-export commonly used types
pub use filter::{filter, filter_records, CurrencySelector};
pub use index::{build_index, StringIndex};
pub use lookup::{CurrencyArg, CurrencyLookup};
pub use registry::PrivateCurrencyRegistry;
pub use repository::{CurrencyMap, LocaleRepository};
