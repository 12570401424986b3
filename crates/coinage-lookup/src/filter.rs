//! Status-based set algebra over currency collections.
//!
//! A filter specification is a slice of [`CurrencySelector`]s interpreted as
//! a union: `[Tender, Current]` selects currencies that are tender OR
//! current. The result of a filter is `expand(only) − expand(except)`,
//! keyed by currency code.

use crate::classify;
use crate::registry::PrivateCurrencyRegistry;
use coinage_core::{CurrencyCode, CurrencyError};
use coinage_data::CurrencyRecord;
use std::collections::HashMap;
use std::str::FromStr;

/// One atom of a filter specification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CurrencySelector {
    /// Every currency in the candidate pool
    All,
    /// Currencies ISO recognizes with an unbounded period of use
    Current,
    /// Currencies ISO dropped, or whose period of use has ended
    Historic,
    /// Legal tender
    Tender,
    /// Display name carries a parenthesized annotation
    Annotated,
    /// Display name carries no annotation
    Unannotated,
    /// The live contents of the private currency registry. Under `only`
    /// this *adds* the registered records to the candidate pool; under
    /// `except` it subtracts them from the result.
    Private,
    /// Exactly the currency with this code
    Code(CurrencyCode),
}

impl CurrencySelector {
    /// Whether a record from the candidate pool matches this selector.
    ///
    /// `Private` never matches here: it is resolved against the registry by
    /// the filter engine, not against the pool.
    #[must_use]
    pub fn matches(&self, record: &CurrencyRecord, year: i32) -> bool {
        match self {
            Self::All => true,
            Self::Current => classify::is_current(record),
            Self::Historic => classify::is_historic_in(record, year),
            Self::Tender => classify::is_tender(record),
            Self::Annotated => classify::is_annotated(record),
            Self::Unannotated => classify::is_unannotated(record),
            Self::Code(code) => record.code == *code,
            Self::Private => false,
        }
    }
}

impl FromStr for CurrencySelector {
    type Err = CurrencyError;

    /// Parse a lowercase status tag, or fall back to parsing a currency
    /// code.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Self::All),
            "current" => Ok(Self::Current),
            "historic" => Ok(Self::Historic),
            "tender" => Ok(Self::Tender),
            "annotated" => Ok(Self::Annotated),
            "unannotated" => Ok(Self::Unannotated),
            "private" => Ok(Self::Private),
            code => CurrencyCode::new(code).map(Self::Code),
        }
    }
}

/// Whether a specification is a plain select-everything.
fn selects_all(selectors: &[CurrencySelector]) -> bool {
    selectors.is_empty() || selectors.iter().all(|s| *s == CurrencySelector::All)
}

/// Expand a specification over a candidate pool into the matched records.
fn expand(
    currencies: &HashMap<CurrencyCode, CurrencyRecord>,
    selectors: &[CurrencySelector],
    registry: &PrivateCurrencyRegistry,
    year: i32,
) -> HashMap<CurrencyCode, CurrencyRecord> {
    let mut matched: HashMap<CurrencyCode, CurrencyRecord> = currencies
        .iter()
        .filter(|(_, record)| selectors.iter().any(|s| s.matches(record, year)))
        .map(|(code, record)| (code.clone(), record.clone()))
        .collect();

    // The private set is read live and added to the pool, not filtered
    // from it.
    if selectors.contains(&CurrencySelector::Private) {
        for (code, record) in registry.all() {
            matched.entry(code).or_insert(record);
        }
    }

    matched
}

/// Filter a currency map by `only`/`except` specifications.
///
/// An empty `only` means everything. With `only` selecting everything and
/// an empty `except`, the input is returned unchanged without evaluating
/// any predicate.
#[must_use]
pub fn filter(
    currencies: &HashMap<CurrencyCode, CurrencyRecord>,
    only: &[CurrencySelector],
    except: &[CurrencySelector],
    registry: &PrivateCurrencyRegistry,
) -> HashMap<CurrencyCode, CurrencyRecord> {
    if selects_all(only) && except.is_empty() {
        return currencies.clone();
    }

    let year = classify::current_year();

    let mut result = expand(currencies, only, registry, year);
    if !except.is_empty() {
        let excluded = expand(currencies, except, registry, year);
        result.retain(|code, _| !excluded.contains_key(code));
    }

    result
}

/// Filter a record slice by `only`/`except` specifications.
///
/// The list-shaped counterpart of [`filter`]: pool records keep their input
/// order, private records selected by [`CurrencySelector::Private`] are
/// appended in code order, and the difference is taken by code.
#[must_use]
pub fn filter_records(
    currencies: &[CurrencyRecord],
    only: &[CurrencySelector],
    except: &[CurrencySelector],
    registry: &PrivateCurrencyRegistry,
) -> Vec<CurrencyRecord> {
    if selects_all(only) && except.is_empty() {
        return currencies.to_vec();
    }

    let year = classify::current_year();

    let mut result: Vec<CurrencyRecord> = currencies
        .iter()
        .filter(|record| only.iter().any(|s| s.matches(record, year)) || selects_all(only))
        .cloned()
        .collect();

    if only.contains(&CurrencySelector::Private) {
        let mut private: Vec<CurrencyRecord> = registry
            .all()
            .into_values()
            .filter(|record| !result.iter().any(|r| r.code == record.code))
            .collect();
        private.sort_by(|a, b| a.code.cmp(&b.code));
        result.extend(private);
    }

    if !except.is_empty() {
        let pool: HashMap<CurrencyCode, CurrencyRecord> = currencies
            .iter()
            .map(|record| (record.code.clone(), record.clone()))
            .collect();
        let excluded = expand(&pool, except, registry, year);
        result.retain(|record| !excluded.contains_key(&record.code));
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use coinage_data::CurrencyOptions;
    use std::collections::HashMap as StdHashMap;

    fn record(code: &str, name: &str, tender: bool, current: bool) -> CurrencyRecord {
        CurrencyRecord {
            code: CurrencyCode::new(code).expect("valid code"),
            alt_code: code.to_string(),
            name: name.to_string(),
            symbol: code.to_string(),
            narrow_symbol: None,
            digits: 2,
            rounding: 0,
            cash_digits: 2,
            cash_rounding: 0,
            iso_digits: Some(2),
            tender,
            count: StdHashMap::new(),
            from: None,
            // A clearly-past year keeps the historic predicate stable
            to: if current { None } else { Some(2002) },
        }
    }

    fn pool(records: Vec<CurrencyRecord>) -> HashMap<CurrencyCode, CurrencyRecord> {
        records.into_iter().map(|r| (r.code.clone(), r)).collect()
    }

    fn empty_registry() -> PrivateCurrencyRegistry {
        PrivateCurrencyRegistry::new([])
    }

    #[test]
    fn test_all_with_no_except_is_identity() {
        let currencies = pool(vec![
            record("USD", "US Dollar", true, true),
            record("DEM", "German Mark", false, false),
        ]);
        let registry = empty_registry();

        let result = filter(&currencies, &[CurrencySelector::All], &[], &registry);
        assert_eq!(result, currencies);

        let result = filter(&currencies, &[], &[], &registry);
        assert_eq!(result, currencies);
    }

    #[test]
    fn test_union_semantics() {
        let currencies = pool(vec![
            record("AAA", "Tender Only", true, false),
            record("BBB", "Current Only", false, true),
            record("CCC", "Neither", false, false),
        ]);
        let registry = empty_registry();

        let result = filter(
            &currencies,
            &[CurrencySelector::Tender, CurrencySelector::Current],
            &[],
            &registry,
        );

        assert_eq!(result.len(), 2);
        assert!(result.contains_key(&CurrencyCode::new("AAA").expect("valid code")));
        assert!(result.contains_key(&CurrencyCode::new("BBB").expect("valid code")));
    }

    #[test]
    fn test_except_subtracts() {
        let currencies = pool(vec![
            record("USD", "US Dollar", true, true),
            record("USN", "US Dollar (Next Day)", false, true),
        ]);
        let registry = empty_registry();

        let result = filter(
            &currencies,
            &[CurrencySelector::Current],
            &[CurrencySelector::Annotated],
            &registry,
        );

        assert_eq!(result.len(), 1);
        assert!(result.contains_key(&CurrencyCode::new("USD").expect("valid code")));
    }

    #[test]
    fn test_except_all_empties_the_result() {
        let currencies = pool(vec![record("USD", "US Dollar", true, true)]);
        let registry = empty_registry();

        let result = filter(&currencies, &[], &[CurrencySelector::All], &registry);
        assert!(result.is_empty());
    }

    #[test]
    fn test_code_selector_matches_exactly() {
        let currencies = pool(vec![
            record("USD", "US Dollar", true, true),
            record("EUR", "Euro", true, true),
        ]);
        let registry = empty_registry();

        let result = filter(
            &currencies,
            &[CurrencySelector::Code(
                CurrencyCode::new("eur").expect("valid code"),
            )],
            &[],
            &registry,
        );

        assert_eq!(result.len(), 1);
        assert!(result.contains_key(&CurrencyCode::new("EUR").expect("valid code")));
    }

    #[test]
    fn test_private_adds_registry_contents() {
        let currencies = pool(vec![record("USD", "US Dollar", true, true)]);
        let registry = empty_registry();
        registry
            .register("XAZ", CurrencyOptions::new().name("Test Coin").digits(2))
            .expect("register currency");

        let result = filter(
            &currencies,
            &[CurrencySelector::Current, CurrencySelector::Private],
            &[],
            &registry,
        );

        assert_eq!(result.len(), 2);
        assert!(result.contains_key(&CurrencyCode::new("XAZ").expect("valid code")));
    }

    #[test]
    fn test_private_alone_ignores_the_pool() {
        let currencies = pool(vec![record("USD", "US Dollar", true, true)]);
        let registry = empty_registry();
        registry
            .register("XAZ", CurrencyOptions::new().name("Test Coin").digits(2))
            .expect("register currency");

        let result = filter(&currencies, &[CurrencySelector::Private], &[], &registry);
        assert_eq!(result.len(), 1);
        assert!(result.contains_key(&CurrencyCode::new("XAZ").expect("valid code")));
    }

    #[test]
    fn test_private_in_except_subtracts_registry_contents() {
        let currencies = pool(vec![record("USD", "US Dollar", true, true)]);
        let registry = empty_registry();
        registry
            .register("XAZ", CurrencyOptions::new().name("Test Coin").digits(2))
            .expect("register currency");

        let result = filter(
            &currencies,
            &[CurrencySelector::All, CurrencySelector::Private],
            &[CurrencySelector::Private],
            &registry,
        );

        assert_eq!(result.len(), 1);
        assert!(result.contains_key(&CurrencyCode::new("USD").expect("valid code")));
    }

    #[test]
    fn test_private_expansion_is_live() {
        let currencies = pool(vec![]);
        let registry = empty_registry();

        let before = filter(&currencies, &[CurrencySelector::Private], &[], &registry);
        assert!(before.is_empty());

        registry
            .register("XAZ", CurrencyOptions::new().name("Test Coin").digits(2))
            .expect("register currency");

        let after = filter(&currencies, &[CurrencySelector::Private], &[], &registry);
        assert_eq!(after.len(), 1);
    }

    #[test]
    fn test_empty_result_is_valid() {
        let currencies = pool(vec![record("DEM", "German Mark", false, false)]);
        let registry = empty_registry();

        let result = filter(&currencies, &[CurrencySelector::Current], &[], &registry);
        assert!(result.is_empty());
    }

    #[test]
    fn test_filter_records_keeps_input_order() {
        let records = vec![
            record("EUR", "Euro", true, true),
            record("USD", "US Dollar", true, true),
            record("DEM", "German Mark", false, false),
        ];
        let registry = empty_registry();

        let result = filter_records(&records, &[CurrencySelector::Current], &[], &registry);
        let codes: Vec<&str> = result.iter().map(|r| r.code.as_str()).collect();
        assert_eq!(codes, vec!["EUR", "USD"]);
    }

    #[test]
    fn test_filter_records_identity() {
        let records = vec![
            record("USD", "US Dollar", true, true),
            record("DEM", "German Mark", false, false),
        ];
        let registry = empty_registry();

        let result = filter_records(&records, &[], &[], &registry);
        assert_eq!(result, records);
    }

    #[test]
    fn test_selector_from_str() {
        assert_eq!(
            "tender".parse::<CurrencySelector>().expect("parse tag"),
            CurrencySelector::Tender
        );
        assert_eq!(
            "private".parse::<CurrencySelector>().expect("parse tag"),
            CurrencySelector::Private
        );
        assert_eq!(
            "usd".parse::<CurrencySelector>().expect("parse code"),
            CurrencySelector::Code(CurrencyCode::new("USD").expect("valid code"))
        );
        assert!("not-a-currency".parse::<CurrencySelector>().is_err());
    }
}
