//! Per-locale currency data with memoized string indexes.
//!
//! The repository replaces per-locale specialization with data-driven
//! dispatch: a runtime mapping from locale identifier to its (currency map,
//! string index) pair. Currency maps are built once at construction; each
//! locale's index is computed on first use and reused for the life of the
//! repository.

use crate::index::{build_index, StringIndex};
use coinage_core::{CurrencyCode, CurrencyError, LocaleId, Result};
use coinage_data::{CurrencyRecord, LocaleDataset, LocaleLoader};
use once_cell::sync::OnceCell;
use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;
use tracing::info;

/// One locale's immutable currency map.
pub type CurrencyMap = HashMap<CurrencyCode, CurrencyRecord>;

/// A locale's currency map plus its lazily-built string index.
struct LocaleEntry {
    currencies: Arc<CurrencyMap>,
    index: OnceCell<Arc<StringIndex>>,
}

/// Read-only store of per-locale currency data.
pub struct LocaleRepository {
    locales: HashMap<LocaleId, LocaleEntry>,
}

impl LocaleRepository {
    /// Build a repository from pre-loaded datasets.
    #[must_use]
    pub fn from_datasets(datasets: impl IntoIterator<Item = LocaleDataset>) -> Self {
        let locales: HashMap<LocaleId, LocaleEntry> = datasets
            .into_iter()
            .map(|dataset| {
                let entry = LocaleEntry {
                    currencies: Arc::new(dataset.currencies),
                    index: OnceCell::new(),
                };
                (dataset.locale, entry)
            })
            .collect();

        info!(locales = locales.len(), "built locale repository");

        Self { locales }
    }

    /// Build a repository by loading every dataset the loader can see.
    ///
    /// # Errors
    /// Returns error if the dataset directory can't be read.
    pub fn load_from(loader: &LocaleLoader) -> coinage_data::Result<Self> {
        Ok(Self::from_datasets(loader.load_all()?))
    }

    /// All locales with a dataset, in sorted order.
    #[must_use]
    pub fn known_locales(&self) -> BTreeSet<LocaleId> {
        self.locales.keys().cloned().collect()
    }

    /// Whether a locale has a dataset.
    #[must_use]
    pub fn contains(&self, locale: &LocaleId) -> bool {
        self.locales.contains_key(locale)
    }

    /// The currency map for a locale.
    ///
    /// # Errors
    /// Returns [`CurrencyError::UnknownLocale`] if no dataset exists for
    /// the locale.
    pub fn currencies(&self, locale: &LocaleId) -> Result<Arc<CurrencyMap>> {
        self.locales
            .get(locale)
            .map(|entry| Arc::clone(&entry.currencies))
            .ok_or_else(|| CurrencyError::UnknownLocale {
                locale: locale.to_string(),
            })
    }

    /// The string index for a locale, built on first use and memoized.
    ///
    /// # Errors
    /// Returns [`CurrencyError::UnknownLocale`] if no dataset exists for
    /// the locale.
    pub fn index(&self, locale: &LocaleId) -> Result<Arc<StringIndex>> {
        let entry = self
            .locales
            .get(locale)
            .ok_or_else(|| CurrencyError::UnknownLocale {
                locale: locale.to_string(),
            })?;

        let index = entry
            .index
            .get_or_init(|| Arc::new(build_index(&entry.currencies)));

        Ok(Arc::clone(index))
    }

    /// Every currency code appearing in any locale's dataset, in sorted
    /// order. Used to seed the private registry's collision guard.
    #[must_use]
    pub fn known_codes(&self) -> BTreeSet<CurrencyCode> {
        self.locales
            .values()
            .flat_map(|entry| entry.currencies.keys().cloned())
            .collect()
    }
}
