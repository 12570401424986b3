//! Currency record types.
//!
//! This module defines the immutable [`CurrencyRecord`] value type, the
//! deserialization shape used by locale dataset files, and the option set
//! used when registering private-use currencies at runtime.

use crate::error::{DataError, Result};
use coinage_core::{CurrencyCode, CurrencyError, PluralCategory};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Canonical metadata for one currency in one locale.
///
/// Immutable once constructed. Built-in records come from locale dataset
/// files; private-use records are built from [`CurrencyOptions`] at
/// registration time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrencyRecord {
    /// Canonical currency identifier
    pub code: CurrencyCode,

    /// Alternate application-chosen identifier; defaults to the code.
    /// Free-form so non-ISO identifiers (e.g. cryptocurrency tickers) can
    /// still be referenced without violating ISO 4217 shape constraints.
    pub alt_code: String,

    /// Locale-specific display name; may carry a parenthesized annotation,
    /// e.g. `"US Dollar (Next Day)"`
    pub name: String,

    /// Locale-specific display symbol
    pub symbol: String,

    /// Compact display glyph, where the locale has one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub narrow_symbol: Option<String>,

    /// Decimal precision for standard (non-cash) amounts
    pub digits: u8,

    /// Minimum rounding increment for standard amounts (0 means none)
    pub rounding: u32,

    /// Decimal precision for cash transactions
    pub cash_digits: u8,

    /// Minimum rounding increment for cash transactions
    pub cash_rounding: u32,

    /// Precision as declared by ISO 4217 itself; `None` marks a code ISO
    /// does not currently recognize as an active currency
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iso_digits: Option<u8>,

    /// Whether the currency is legal tender
    pub tender: bool,

    /// Pluralized display strings, keyed by plural category
    #[serde(default)]
    pub count: HashMap<PluralCategory, String>,

    /// First calendar year of use, where bounded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<i32>,

    /// Last calendar year of use; `None` means still in use
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<i32>,
}

impl CurrencyRecord {
    /// Attach a code to a deserialized dataset entry, applying defaults for
    /// omitted fields.
    #[must_use]
    pub fn from_data(code: CurrencyCode, data: CurrencyData) -> Self {
        let alt_code = data
            .alt_code
            .unwrap_or_else(|| code.as_str().to_string());
        let cash_digits = data.cash_digits.unwrap_or(data.digits);
        let cash_rounding = data.cash_rounding.unwrap_or(data.rounding);

        Self {
            code,
            alt_code,
            name: data.name,
            symbol: data.symbol,
            narrow_symbol: data.narrow_symbol,
            digits: data.digits,
            rounding: data.rounding,
            cash_digits,
            cash_rounding,
            iso_digits: data.iso_digits,
            tender: data.tender,
            count: data.count,
            from: data.from,
            to: data.to,
        }
    }

    /// Validate the record for completeness and internal consistency.
    pub fn validate(&self) -> Result<()> {
        if self.name.is_empty() {
            return Err(DataError::InvalidRecord {
                code: self.code.to_string(),
                reason: "currency name cannot be empty".to_string(),
            });
        }

        if self.symbol.is_empty() {
            return Err(DataError::InvalidRecord {
                code: self.code.to_string(),
                reason: "currency symbol cannot be empty".to_string(),
            });
        }

        if let (Some(from), Some(to)) = (self.from, self.to) {
            if from > to {
                return Err(DataError::InvalidRecord {
                    code: self.code.to_string(),
                    reason: format!("usage period is inverted: from {from} to {to}"),
                });
            }
        }

        Ok(())
    }
}

fn default_tender() -> bool {
    true
}

/// Deserialization shape for one currency entry in a locale dataset file.
///
/// The currency code is the enclosing table key, not a field, so the loader
/// attaches it via [`CurrencyRecord::from_data`]. Dataset entries default to
/// legal tender; private-use registration defaults the other way.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CurrencyData {
    /// Display name
    pub name: String,

    /// Display symbol
    pub symbol: String,

    /// Compact display glyph
    #[serde(default)]
    pub narrow_symbol: Option<String>,

    /// Decimal precision for standard amounts
    pub digits: u8,

    /// Minimum rounding increment for standard amounts
    #[serde(default)]
    pub rounding: u32,

    /// Cash precision; defaults to `digits`
    #[serde(default)]
    pub cash_digits: Option<u8>,

    /// Cash rounding increment; defaults to `rounding`
    #[serde(default)]
    pub cash_rounding: Option<u32>,

    /// ISO 4217's own declared precision
    #[serde(default)]
    pub iso_digits: Option<u8>,

    /// Legal-tender flag
    #[serde(default = "default_tender")]
    pub tender: bool,

    /// Alternate identifier; defaults to the code
    #[serde(default)]
    pub alt_code: Option<String>,

    /// Pluralized display strings
    #[serde(default)]
    pub count: HashMap<PluralCategory, String>,

    /// First calendar year of use
    #[serde(default)]
    pub from: Option<i32>,

    /// Last calendar year of use
    #[serde(default)]
    pub to: Option<i32>,
}

/// Options for registering a private-use currency.
///
/// `name` and `digits` are required; everything else falls back to a
/// default derived from the code or the standard-precision fields.
///
/// # Example
///
/// ```rust
/// use coinage_data::CurrencyOptions;
///
/// let options = CurrencyOptions::new()
///     .name("Test Coin")
///     .digits(2)
///     .tender(false);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CurrencyOptions {
    name: Option<String>,
    digits: Option<u8>,
    symbol: Option<String>,
    narrow_symbol: Option<String>,
    rounding: Option<u32>,
    alt_code: Option<String>,
    cash_digits: Option<u8>,
    cash_rounding: Option<u32>,
    tender: Option<bool>,
    count: Option<HashMap<PluralCategory, String>>,
}

impl CurrencyOptions {
    /// Create an empty option set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Display name (required).
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Decimal precision for standard amounts (required).
    #[must_use]
    pub fn digits(mut self, digits: u8) -> Self {
        self.digits = Some(digits);
        self
    }

    /// Display symbol; defaults to the code itself.
    #[must_use]
    pub fn symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = Some(symbol.into());
        self
    }

    /// Compact display glyph.
    #[must_use]
    pub fn narrow_symbol(mut self, narrow_symbol: impl Into<String>) -> Self {
        self.narrow_symbol = Some(narrow_symbol.into());
        self
    }

    /// Minimum rounding increment (round-to-nearest); defaults to 0.
    #[must_use]
    pub fn rounding(mut self, rounding: u32) -> Self {
        self.rounding = Some(rounding);
        self
    }

    /// Alternate identifier; defaults to the code.
    #[must_use]
    pub fn alt_code(mut self, alt_code: impl Into<String>) -> Self {
        self.alt_code = Some(alt_code.into());
        self
    }

    /// Cash precision; defaults to `digits`.
    #[must_use]
    pub fn cash_digits(mut self, cash_digits: u8) -> Self {
        self.cash_digits = Some(cash_digits);
        self
    }

    /// Cash rounding increment; defaults to `rounding`.
    #[must_use]
    pub fn cash_rounding(mut self, cash_rounding: u32) -> Self {
        self.cash_rounding = Some(cash_rounding);
        self
    }

    /// Legal-tender flag; defaults to false.
    #[must_use]
    pub fn tender(mut self, tender: bool) -> Self {
        self.tender = Some(tender);
        self
    }

    /// Pluralized display strings; defaults to `{other: name}`.
    #[must_use]
    pub fn count(mut self, count: HashMap<PluralCategory, String>) -> Self {
        self.count = Some(count);
        self
    }

    /// Build a record for the given code, applying defaults.
    ///
    /// # Errors
    /// Returns [`CurrencyError::MissingRequiredOption`] if `name` or
    /// `digits` was never supplied.
    pub fn build(self, code: CurrencyCode) -> std::result::Result<CurrencyRecord, CurrencyError> {
        let name = self
            .name
            .ok_or_else(|| CurrencyError::MissingRequiredOption {
                code: code.to_string(),
                option: "name",
            })?;
        let digits = self
            .digits
            .ok_or_else(|| CurrencyError::MissingRequiredOption {
                code: code.to_string(),
                option: "digits",
            })?;

        let rounding = self.rounding.unwrap_or(0);
        let count = self.count.unwrap_or_else(|| {
            let mut count = HashMap::new();
            count.insert(PluralCategory::Other, name.clone());
            count
        });

        Ok(CurrencyRecord {
            symbol: self
                .symbol
                .unwrap_or_else(|| code.as_str().to_string()),
            alt_code: self
                .alt_code
                .unwrap_or_else(|| code.as_str().to_string()),
            narrow_symbol: self.narrow_symbol,
            cash_digits: self.cash_digits.unwrap_or(digits),
            cash_rounding: self.cash_rounding.unwrap_or(rounding),
            // Private-use codes are by definition not ISO-recognized
            iso_digits: None,
            tender: self.tender.unwrap_or(false),
            from: None,
            to: None,
            code,
            name,
            digits,
            rounding,
            count,
        })
    }
}
