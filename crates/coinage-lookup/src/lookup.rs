//! The currency lookup facade.
//!
//! [`CurrencyLookup`] ties the locale repository and the private registry
//! together and exposes the two query classes: metadata by code and code by
//! human-typed display string.

use crate::filter::{filter, CurrencySelector};
use crate::registry::PrivateCurrencyRegistry;
use crate::repository::{CurrencyMap, LocaleRepository};
use coinage_core::{CurrencyCode, CurrencyError, LocaleId, Result};
use coinage_data::{CurrencyOptions, CurrencyRecord};
use std::collections::{BTreeSet, HashMap, HashSet};

/// Either a currency code to resolve, or an already-resolved record.
///
/// Callers that resolve a currency once and hold onto the record can pass
/// it back through any lookup without paying for re-resolution; the record
/// form is returned untouched. This pass-through is a heavily exercised hot
/// path, not a convenience.
#[derive(Debug, Clone)]
pub enum CurrencyArg {
    /// An already-resolved record; returned as-is
    Record(CurrencyRecord),
    /// A code to validate and resolve
    Code(String),
}

impl From<CurrencyRecord> for CurrencyArg {
    fn from(record: CurrencyRecord) -> Self {
        Self::Record(record)
    }
}

impl From<&str> for CurrencyArg {
    fn from(code: &str) -> Self {
        Self::Code(code.to_string())
    }
}

impl From<String> for CurrencyArg {
    fn from(code: String) -> Self {
        Self::Code(code)
    }
}

impl From<&CurrencyCode> for CurrencyArg {
    fn from(code: &CurrencyCode) -> Self {
        Self::Code(code.as_str().to_string())
    }
}

/// Facade over the locale repository and the private currency registry.
pub struct CurrencyLookup {
    repository: LocaleRepository,
    registry: PrivateCurrencyRegistry,
}

impl CurrencyLookup {
    /// Create a lookup over the given repository, with an empty private
    /// registry guarded against every built-in code.
    #[must_use]
    pub fn new(repository: LocaleRepository) -> Self {
        let registry = PrivateCurrencyRegistry::new(repository.known_codes());
        Self {
            repository,
            registry,
        }
    }

    /// The underlying repository.
    #[must_use]
    pub fn repository(&self) -> &LocaleRepository {
        &self.repository
    }

    /// The private currency registry handle.
    #[must_use]
    pub fn registry(&self) -> &PrivateCurrencyRegistry {
        &self.registry
    }

    /// Register a private-use currency; see
    /// [`PrivateCurrencyRegistry::register`].
    pub fn register_currency(
        &self,
        code: impl AsRef<str>,
        options: CurrencyOptions,
    ) -> Result<CurrencyRecord> {
        self.registry.register(code, options)
    }

    /// Resolve a currency to its record for a locale.
    ///
    /// A [`CurrencyArg::Record`] passes through unchanged. A code is
    /// syntax-validated, resolved against the locale's dataset, then
    /// against the private registry.
    ///
    /// # Errors
    /// [`CurrencyError::InvalidCurrencyCode`] for malformed input,
    /// [`CurrencyError::UnknownLocale`] for a locale without a dataset,
    /// [`CurrencyError::UnknownCurrency`] if neither source resolves the
    /// code.
    pub fn currency_for_code(
        &self,
        currency: impl Into<CurrencyArg>,
        locale: &LocaleId,
    ) -> Result<CurrencyRecord> {
        match currency.into() {
            CurrencyArg::Record(record) => Ok(record),
            CurrencyArg::Code(raw) => {
                let code = CurrencyCode::new(&raw)?;
                let currencies = self.repository.currencies(locale)?;
                if let Some(record) = currencies.get(&code) {
                    return Ok(record.clone());
                }
                self.registry
                    .lookup(&code)
                    .ok_or_else(|| CurrencyError::UnknownCurrency {
                        code: code.to_string(),
                    })
            }
        }
    }

    /// The locale's currency map, narrowed by `only`/`except`.
    ///
    /// # Errors
    /// Returns [`CurrencyError::UnknownLocale`] if no dataset exists for
    /// the locale.
    pub fn currencies_for_locale(
        &self,
        locale: &LocaleId,
        only: &[CurrencySelector],
        except: &[CurrencySelector],
    ) -> Result<CurrencyMap> {
        let currencies = self.repository.currencies(locale)?;
        Ok(filter(&currencies, only, except, &self.registry))
    }

    /// The locale's string index, narrowed by `only`/`except`.
    ///
    /// The memoized index is filtered to the codes surviving
    /// [`Self::currencies_for_locale`], never rebuilt: a string dropped for
    /// ambiguity at build time stays dropped.
    ///
    /// # Errors
    /// Returns [`CurrencyError::UnknownLocale`] if no dataset exists for
    /// the locale.
    pub fn currency_strings(
        &self,
        locale: &LocaleId,
        only: &[CurrencySelector],
        except: &[CurrencySelector],
    ) -> Result<HashMap<String, CurrencyCode>> {
        let index = self.repository.index(locale)?;

        let allowed: HashSet<CurrencyCode> = self
            .currencies_for_locale(locale, only, except)?
            .into_keys()
            .collect();

        Ok(index
            .iter()
            .filter(|(_, code)| allowed.contains(*code))
            .map(|(string, code)| (string.clone(), code.clone()))
            .collect())
    }

    /// All index strings resolving to the given code, in sorted order.
    ///
    /// # Errors
    /// Returns [`CurrencyError::UnknownLocale`] if no dataset exists for
    /// the locale.
    pub fn strings_for_currency(
        &self,
        code: &CurrencyCode,
        locale: &LocaleId,
    ) -> Result<Vec<String>> {
        let index = self.repository.index(locale)?;

        let mut strings: Vec<String> = index
            .iter()
            .filter(|(_, c)| *c == code)
            .map(|(string, _)| string.clone())
            .collect();
        strings.sort();

        Ok(strings)
    }

    /// All locales with a dataset.
    #[must_use]
    pub fn known_locales(&self) -> BTreeSet<LocaleId> {
        self.repository.known_locales()
    }

    /// Every resolvable currency code: built-in plus private, in sorted
    /// order.
    #[must_use]
    pub fn known_currency_codes(&self) -> BTreeSet<CurrencyCode> {
        let mut codes = self.repository.known_codes();
        codes.extend(self.registry.known_codes());
        codes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use coinage_data::LocaleDataset;
    use std::collections::HashMap as StdHashMap;

    fn record(code: &str, name: &str) -> CurrencyRecord {
        let code = CurrencyCode::new(code).expect("valid code");
        CurrencyRecord {
            alt_code: code.as_str().to_string(),
            symbol: code.as_str().to_string(),
            code,
            name: name.to_string(),
            narrow_symbol: None,
            digits: 2,
            rounding: 0,
            cash_digits: 2,
            cash_rounding: 0,
            iso_digits: Some(2),
            tender: true,
            count: StdHashMap::new(),
            from: None,
            to: None,
        }
    }

    fn lookup() -> CurrencyLookup {
        let currencies = vec![record("USD", "US Dollar"), record("EUR", "Euro")]
            .into_iter()
            .map(|r| (r.code.clone(), r))
            .collect();
        let dataset = LocaleDataset {
            locale: LocaleId::new("en").expect("valid locale"),
            currencies,
        };
        CurrencyLookup::new(LocaleRepository::from_datasets(vec![dataset]))
    }

    fn en() -> LocaleId {
        LocaleId::new("en").expect("valid locale")
    }

    #[test]
    fn test_record_arg_passes_through() {
        let lookup = lookup();
        let original = record("ZWL", "Zimbabwean Dollar");

        // Not in any dataset; the pass-through must not resolve anything
        let resolved = lookup
            .currency_for_code(original.clone(), &en())
            .expect("pass-through");
        assert_eq!(resolved, original);
    }

    #[test]
    fn test_code_arg_resolves_and_normalizes() {
        let lookup = lookup();
        let resolved = lookup
            .currency_for_code("usd", &en())
            .expect("resolve code");
        assert_eq!(resolved.name, "US Dollar");
    }

    #[test]
    fn test_unknown_code() {
        let lookup = lookup();
        let result = lookup.currency_for_code("ZZZ", &en());
        assert!(matches!(
            result.unwrap_err(),
            CurrencyError::UnknownCurrency { .. }
        ));
    }

    #[test]
    fn test_malformed_code() {
        let lookup = lookup();
        let result = lookup.currency_for_code("dollars!", &en());
        assert!(matches!(
            result.unwrap_err(),
            CurrencyError::InvalidCurrencyCode { .. }
        ));
    }

    #[test]
    fn test_unknown_locale() {
        let lookup = lookup();
        let locale = LocaleId::new("xx").expect("valid locale");
        let result = lookup.currency_for_code("USD", &locale);
        assert!(matches!(
            result.unwrap_err(),
            CurrencyError::UnknownLocale { .. }
        ));
    }

    #[test]
    fn test_private_currency_resolves_after_registration() {
        let lookup = lookup();
        lookup
            .register_currency("XAZ", CurrencyOptions::new().name("Test Coin").digits(2))
            .expect("register currency");

        let resolved = lookup
            .currency_for_code("XAZ", &en())
            .expect("resolve private currency");
        assert_eq!(resolved.name, "Test Coin");
    }

    #[test]
    fn test_known_currency_codes_includes_private() {
        let lookup = lookup();
        lookup
            .register_currency("XAZ", CurrencyOptions::new().name("Test Coin").digits(2))
            .expect("register currency");

        let codes: Vec<String> = lookup
            .known_currency_codes()
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(codes, vec!["EUR", "USD", "XAZ"]);
    }

    #[test]
    fn test_registration_collides_with_builtin() {
        let currencies = vec![record("XAU", "Gold")]
            .into_iter()
            .map(|r| (r.code.clone(), r))
            .collect();
        let dataset = LocaleDataset {
            locale: en(),
            currencies,
        };
        let lookup = CurrencyLookup::new(LocaleRepository::from_datasets(vec![dataset]));

        let result =
            lookup.register_currency("XAU", CurrencyOptions::new().name("Gold").digits(2));
        assert!(matches!(
            result.unwrap_err(),
            CurrencyError::AlreadyDefined { .. }
        ));
    }
}
