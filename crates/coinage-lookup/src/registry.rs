//! Process-lifetime registry for private-use currencies.
//!
//! The registry is the only mutable shared state in the library. It is a
//! cloneable handle; all clones observe the same store. Entries live until
//! the last handle drops; there is no persistence, so integrators needing
//! private currencies across restarts must re-register on every startup.

use coinage_core::{CurrencyCode, CurrencyError, Result};
use coinage_data::{CurrencyOptions, CurrencyRecord};
use std::collections::{BTreeSet, HashMap, HashSet};
use std::sync::{Arc, RwLock};
use tracing::debug;

/// Shared store of user-defined currency records.
///
/// Reads are concurrent and always observe fully-registered records.
/// Writes are insert-if-absent only: a code can never be redefined through
/// this API once it resolves, whether to a built-in or a private record.
#[derive(Clone)]
pub struct PrivateCurrencyRegistry {
    /// Built-in codes registration must not collide with
    known_iso: Arc<HashSet<CurrencyCode>>,
    /// Registered records, keyed by code
    currencies: Arc<RwLock<HashMap<CurrencyCode, CurrencyRecord>>>,
}

impl PrivateCurrencyRegistry {
    /// Create an empty registry guarding against the given built-in codes.
    #[must_use]
    pub fn new(known_iso: impl IntoIterator<Item = CurrencyCode>) -> Self {
        Self {
            known_iso: Arc::new(known_iso.into_iter().collect()),
            currencies: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Register a private-use currency.
    ///
    /// The code is normalized to uppercase and must have the ISO 4217
    /// private-use shape (`X` followed by two letters). `options` must
    /// supply at least a name and a precision; see
    /// [`CurrencyOptions::build`] for the applied defaults.
    ///
    /// # Errors
    /// In order of evaluation: [`CurrencyError::InvalidCurrencyCode`] for a
    /// malformed or non-private code, [`CurrencyError::AlreadyDefined`] if
    /// the code already resolves, [`CurrencyError::MissingRequiredOption`]
    /// if `name` or `digits` is absent, and [`CurrencyError::NotSaved`] if
    /// the store itself failed.
    pub fn register(
        &self,
        code: impl AsRef<str>,
        options: CurrencyOptions,
    ) -> Result<CurrencyRecord> {
        let code = CurrencyCode::new(&code)?;
        if !code.is_private_use() {
            return Err(CurrencyError::InvalidCurrencyCode {
                code: code.to_string(),
            });
        }

        if self.known_iso.contains(&code) || self.contains(&code) {
            return Err(CurrencyError::AlreadyDefined {
                code: code.to_string(),
            });
        }

        let record = options.build(code.clone())?;

        let mut store = self
            .currencies
            .write()
            .map_err(|e| CurrencyError::NotSaved {
                code: code.to_string(),
                reason: e.to_string(),
            })?;

        // Re-check under the write lock: a concurrent registration of the
        // same code is a logical duplicate, not a store fault.
        if store.contains_key(&code) {
            return Err(CurrencyError::AlreadyDefined {
                code: code.to_string(),
            });
        }

        store.insert(code.clone(), record.clone());
        debug!(code = %code, name = %record.name, "registered private currency");

        Ok(record)
    }

    /// Look up a registered record by code. Pure read, no side effects.
    #[must_use]
    pub fn lookup(&self, code: &CurrencyCode) -> Option<CurrencyRecord> {
        let store = self
            .currencies
            .read()
            .expect("acquire read lock on private currencies");

        store.get(code).cloned()
    }

    /// Whether a code is registered.
    #[must_use]
    pub fn contains(&self, code: &CurrencyCode) -> bool {
        let store = self
            .currencies
            .read()
            .expect("acquire read lock on private currencies");

        store.contains_key(code)
    }

    /// Snapshot of all registered records.
    #[must_use]
    pub fn all(&self) -> HashMap<CurrencyCode, CurrencyRecord> {
        let store = self
            .currencies
            .read()
            .expect("acquire read lock on private currencies");

        store.clone()
    }

    /// All registered codes, in sorted order.
    #[must_use]
    pub fn known_codes(&self) -> BTreeSet<CurrencyCode> {
        let store = self
            .currencies
            .read()
            .expect("acquire read lock on private currencies");

        store.keys().cloned().collect()
    }

    /// Number of registered currencies.
    #[must_use]
    pub fn count(&self) -> usize {
        let store = self
            .currencies
            .read()
            .expect("acquire read lock on private currencies");

        store.len()
    }
}
