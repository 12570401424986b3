//! Status classification predicates over currency records.
//!
//! Every predicate is total and pure. The historic predicate is evaluated
//! against the wall-clock calendar year, so its result can flip across a
//! year boundary; the `*_in` form takes an explicit year so one snapshot can
//! serve a whole batch of evaluations.

use chrono::{Datelike, Utc};
use coinage_data::CurrencyRecord;

/// The current wall-clock calendar year (UTC).
#[must_use]
pub fn current_year() -> i32 {
    Utc::now().year()
}

/// Whether the currency is historic: ISO no longer (or never) recognized it,
/// or its period of use ended before the current year.
#[must_use]
pub fn is_historic(record: &CurrencyRecord) -> bool {
    is_historic_in(record, current_year())
}

/// [`is_historic`] against an explicit calendar year.
#[must_use]
pub fn is_historic_in(record: &CurrencyRecord, year: i32) -> bool {
    record.iso_digits.is_none() || record.to.is_some_and(|to| to < year)
}

/// Whether the currency is current: ISO recognizes it and its period of use
/// is unbounded.
///
/// Not the negation of [`is_historic`]: a record with ISO recognition but a
/// bounded, not-yet-past `to` year satisfies neither predicate and is
/// reachable only through an unfiltered query.
#[must_use]
pub fn is_current(record: &CurrencyRecord) -> bool {
    record.iso_digits.is_some() && record.to.is_none()
}

/// Whether the currency is legal tender.
#[must_use]
pub fn is_tender(record: &CurrencyRecord) -> bool {
    record.tender
}

/// Whether the display name carries a parenthesized annotation, e.g.
/// `"US Dollar (Next Day)"`. Annotated entries typically denote financial
/// instruments rather than everyday tender.
#[must_use]
pub fn is_annotated(record: &CurrencyRecord) -> bool {
    record.name.contains('(')
}

/// Negation of [`is_annotated`].
#[must_use]
pub fn is_unannotated(record: &CurrencyRecord) -> bool {
    !is_annotated(record)
}
