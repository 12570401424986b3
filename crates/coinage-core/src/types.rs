//! Shared types used across the coinage crates.
//!
//! This module defines the validated newtypes and closed enums the rest of
//! the workspace builds on.

use crate::error::CurrencyError;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

/// Newtype for currency codes with validation.
///
/// Codes are three ASCII letters per ISO 4217. Construction uppercases the
/// input, so `"usd"` and `"USD"` produce the same code. The `X`-prefixed
/// range (`X` followed by two letters) is reserved for private-use
/// currencies.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CurrencyCode(String);

impl CurrencyCode {
    /// Create a new `CurrencyCode` from a string, normalizing to uppercase.
    ///
    /// # Errors
    /// Returns [`CurrencyError::InvalidCurrencyCode`] if the input is not
    /// three ASCII letters.
    pub fn new(code: impl AsRef<str>) -> Result<Self, CurrencyError> {
        let code = code.as_ref().to_ascii_uppercase();
        Self::validate(&code)?;
        Ok(Self(code))
    }

    /// Get the inner string value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this code lies in the ISO 4217 private-use range
    /// (`X` followed by two letters).
    #[must_use]
    pub fn is_private_use(&self) -> bool {
        static PRIVATE_REGEX: OnceLock<Regex> = OnceLock::new();
        let regex =
            PRIVATE_REGEX.get_or_init(|| Regex::new(r"^X[A-Z]{2}$").expect("valid regex"));
        regex.is_match(&self.0)
    }

    /// Validate that a string is three uppercase ASCII letters.
    fn validate(code: &str) -> Result<(), CurrencyError> {
        static CODE_REGEX: OnceLock<Regex> = OnceLock::new();
        let regex = CODE_REGEX.get_or_init(|| Regex::new(r"^[A-Z]{3}$").expect("valid regex"));

        if regex.is_match(code) {
            Ok(())
        } else {
            Err(CurrencyError::InvalidCurrencyCode {
                code: code.to_string(),
            })
        }
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for CurrencyCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Newtype for locale identifiers with syntactic validation.
///
/// Accepts a lowercase 2-3 letter language subtag followed by optional
/// alphanumeric subtags of 2-8 characters (`en`, `de`, `en-US`, `pt-PT`).
/// Underscore separators are normalized to hyphens. Whether a locale has a
/// dataset behind it is the repository's business, not this type's.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LocaleId(String);

impl LocaleId {
    /// Create a new `LocaleId` from a string.
    ///
    /// # Errors
    /// Returns [`CurrencyError::InvalidLocale`] if the identifier doesn't
    /// match the required shape.
    pub fn new(locale: impl AsRef<str>) -> Result<Self, CurrencyError> {
        let locale = locale.as_ref().replace('_', "-");
        Self::validate(&locale)?;
        Ok(Self(locale))
    }

    /// Get the inner string value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Validate locale shape: `lang(-subtag)*`.
    fn validate(locale: &str) -> Result<(), CurrencyError> {
        static LOCALE_REGEX: OnceLock<Regex> = OnceLock::new();
        let regex = LOCALE_REGEX.get_or_init(|| {
            Regex::new(r"^[a-z]{2,3}(-[A-Za-z0-9]{2,8})*$").expect("valid regex")
        });

        if regex.is_match(locale) {
            Ok(())
        } else {
            Err(CurrencyError::InvalidLocale {
                locale: locale.to_string(),
            })
        }
    }
}

impl fmt::Display for LocaleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// CLDR plural categories.
///
/// A closed set of grammatical buckets used to choose the correct pluralized
/// display string for a given count. Which category applies for a given
/// number is a locale question answered elsewhere; records here only carry
/// the per-category strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PluralCategory {
    /// Zero quantity (used by e.g. Arabic, Latvian)
    Zero,
    /// Singular
    One,
    /// Dual (used by e.g. Slovenian, Arabic)
    Two,
    /// Paucal (used by e.g. Polish, Russian)
    Few,
    /// Large quantities in languages that distinguish them
    Many,
    /// The default category; every locale has it
    Other,
}

impl PluralCategory {
    /// Get the CLDR keyword for this category.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Zero => "zero",
            Self::One => "one",
            Self::Two => "two",
            Self::Few => "few",
            Self::Many => "many",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for PluralCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_code_valid() {
        let code = CurrencyCode::new("USD").expect("valid code");
        assert_eq!(code.as_str(), "USD");
    }

    #[test]
    fn test_currency_code_normalizes_case() {
        let code = CurrencyCode::new("usd").expect("valid code");
        assert_eq!(code.as_str(), "USD");
        assert_eq!(code, CurrencyCode::new("UsD").expect("valid code"));
    }

    #[test]
    fn test_currency_code_invalid() {
        let invalid = vec!["", "US", "USDX", "U1D", "US$", "dollar"];
        for code in invalid {
            assert!(CurrencyCode::new(code).is_err(), "should fail for: {code}");
        }
    }

    #[test]
    fn test_currency_code_private_use() {
        assert!(CurrencyCode::new("XAZ").expect("valid code").is_private_use());
        assert!(CurrencyCode::new("xbc").expect("valid code").is_private_use());
        assert!(!CurrencyCode::new("USD").expect("valid code").is_private_use());
        assert!(!CurrencyCode::new("EUR").expect("valid code").is_private_use());
    }

    #[test]
    fn test_currency_code_ordering() {
        let mut codes = vec![
            CurrencyCode::new("USD").expect("valid code"),
            CurrencyCode::new("AFN").expect("valid code"),
            CurrencyCode::new("EUR").expect("valid code"),
        ];
        codes.sort();
        let sorted: Vec<&str> = codes.iter().map(CurrencyCode::as_str).collect();
        assert_eq!(sorted, vec!["AFN", "EUR", "USD"]);
    }

    #[test]
    fn test_locale_id_valid() {
        for locale in ["en", "de", "en-US", "pt-PT", "zh-Hant", "sr-Latn-RS"] {
            assert!(LocaleId::new(locale).is_ok(), "should accept: {locale}");
        }
    }

    #[test]
    fn test_locale_id_normalizes_underscores() {
        let locale = LocaleId::new("en_US").expect("valid locale");
        assert_eq!(locale.as_str(), "en-US");
    }

    #[test]
    fn test_locale_id_invalid() {
        for locale in ["", "e", "EN", "en-", "en--US", "english-language"] {
            assert!(LocaleId::new(locale).is_err(), "should fail for: {locale}");
        }
    }

    #[test]
    fn test_plural_category_serialization() {
        let json = serde_json::to_string(&PluralCategory::Other).expect("serialize category");
        assert_eq!(json, "\"other\"");

        let parsed: PluralCategory = serde_json::from_str("\"one\"").expect("deserialize category");
        assert_eq!(parsed, PluralCategory::One);
    }

    #[test]
    fn test_plural_category_display() {
        assert_eq!(PluralCategory::Few.to_string(), "few");
        assert_eq!(PluralCategory::Other.as_str(), "other");
    }
}
