//! Reverse index from display strings to currency codes.
//!
//! For one locale's currency map, the index maps every matchable
//! lower-cased display string (name, symbol, plural forms, the code itself,
//! and narrow symbols) back to a currency code, so that human-typed input
//! like `"swiss francs"` or `"$"` can be resolved.
//!
//! Collisions are resolved conservatively: a string shared by several
//! currencies survives only when exactly one of them is current; otherwise
//! the string is dropped, since an arbitrary pick would silently
//! mis-identify user input.

use crate::classify;
use coinage_core::CurrencyCode;
use coinage_data::CurrencyRecord;
use std::collections::{BTreeSet, HashMap};
use tracing::debug;

/// Per-locale mapping from lower-cased display string to currency code.
pub type StringIndex = HashMap<String, CurrencyCode>;

/// Normalize one candidate display string: lower-case and trim a single
/// trailing period (dataset strings occasionally encode abbreviations as
/// `"fr."`, which must not leak into matchable keys).
fn normalize(s: &str) -> String {
    let lowered = s.to_lowercase();
    match lowered.strip_suffix('.') {
        Some(trimmed) => trimmed.to_string(),
        None => lowered,
    }
}

/// The candidate strings one record contributes, normalized and
/// de-duplicated within the record.
fn candidate_strings(record: &CurrencyRecord) -> BTreeSet<String> {
    let mut candidates = BTreeSet::new();
    candidates.insert(normalize(&record.name));
    candidates.insert(normalize(&record.symbol));
    candidates.insert(normalize(record.code.as_str()));
    candidates.insert(normalize(&record.alt_code));
    for plural in record.count.values() {
        candidates.insert(normalize(plural));
    }
    candidates.retain(|s| !s.is_empty());
    candidates
}

/// Build the string index for one locale's currency map.
///
/// The result is a pure function of the input map: records are visited in
/// code order and collision groups are resolved by rule, so a fixed map
/// always produces the same index.
#[must_use]
pub fn build_index(currencies: &HashMap<CurrencyCode, CurrencyRecord>) -> StringIndex {
    let mut codes: Vec<&CurrencyCode> = currencies.keys().collect();
    codes.sort();

    // Harvest (string, code) pairs, already sorted by string then code.
    let mut pairs: Vec<(String, &CurrencyCode)> = Vec::new();
    for code in &codes {
        let record = &currencies[*code];
        for candidate in candidate_strings(record) {
            pairs.push((candidate, *code));
        }
    }
    pairs.sort();

    let mut index = StringIndex::new();
    let mut group_start = 0;
    while group_start < pairs.len() {
        let string = &pairs[group_start].0;
        let group_end = pairs[group_start..]
            .iter()
            .position(|(s, _)| s != string)
            .map_or(pairs.len(), |offset| group_start + offset);
        let group = &pairs[group_start..group_end];

        if group.len() == 1 {
            index.insert(string.clone(), group[0].1.clone());
        } else {
            // Keep the string only when exactly one contender is current.
            let current: Vec<&CurrencyCode> = group
                .iter()
                .map(|(_, code)| *code)
                .filter(|code| classify::is_current(&currencies[*code]))
                .collect();
            if let [winner] = current.as_slice() {
                index.insert(string.clone(), (*winner).clone());
            }
        }

        group_start = group_end;
    }

    // Narrow symbols are strictly additive: they never displace an existing
    // key, and among themselves the first writer in code order wins.
    for code in &codes {
        let record = &currencies[*code];
        if let Some(narrow) = &record.narrow_symbol {
            let key = narrow.to_lowercase();
            if !key.is_empty() {
                index.entry(key).or_insert_with(|| (*code).clone());
            }
        }
    }

    debug!(
        currencies = currencies.len(),
        strings = index.len(),
        "built currency string index"
    );

    index
}
