//! Locale dataset loading from TOML files.
//!
//! This module handles loading per-locale currency datasets from the
//! `locale-data/` directory. Each file holds one locale: a `locale` field
//! and a `[currencies.<CODE>]` table per currency.

use crate::{
    definition::{CurrencyData, CurrencyRecord},
    error::{DataError, Result},
};
use coinage_core::{CurrencyCode, LocaleId};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// One locale's worth of currency metadata, as loaded from disk.
#[derive(Debug, Clone)]
pub struct LocaleDataset {
    /// The locale these records are localized for
    pub locale: LocaleId,
    /// Immutable map from currency code to record
    pub currencies: HashMap<CurrencyCode, CurrencyRecord>,
}

/// On-disk shape of one locale dataset file.
#[derive(Debug, Deserialize)]
struct LocaleFile {
    locale: String,
    #[serde(default)]
    currencies: HashMap<String, CurrencyData>,
}

/// Loader for locale datasets from TOML files.
#[derive(Debug)]
pub struct LocaleLoader {
    /// Base directory containing locale dataset files
    data_dir: PathBuf,
}

impl LocaleLoader {
    /// Create a new loader with the given dataset directory.
    ///
    /// # Errors
    /// Returns error if the directory doesn't exist.
    pub fn new(data_dir: impl Into<PathBuf>) -> Result<Self> {
        let data_dir = data_dir.into();

        if !data_dir.is_dir() {
            return Err(DataError::DirectoryNotFound {
                path: data_dir.display().to_string(),
            });
        }

        Ok(Self { data_dir })
    }

    /// Create a loader using the default dataset directory.
    ///
    /// Looks for `locale-data/` relative to the workspace root.
    ///
    /// # Errors
    /// Returns error if the default directory doesn't exist.
    pub fn with_default_dir() -> Result<Self> {
        // Find workspace root by looking for Cargo.toml with [workspace]
        let mut current_dir = std::env::current_dir()?;

        loop {
            let cargo_toml = current_dir.join("Cargo.toml");
            if cargo_toml.exists() {
                if let Ok(contents) = std::fs::read_to_string(&cargo_toml) {
                    if contents.contains("[workspace]") {
                        let data_dir = current_dir.join("locale-data");
                        return Self::new(data_dir);
                    }
                }
            }

            if let Some(parent) = current_dir.parent() {
                current_dir = parent.to_path_buf();
            } else {
                break;
            }
        }

        // Fallback: try relative path
        Self::new(PathBuf::from("locale-data"))
    }

    /// Load a single locale dataset by identifier.
    ///
    /// # Errors
    /// Returns error if the dataset file doesn't exist, can't be read, or
    /// is invalid.
    pub fn load(&self, locale: &LocaleId) -> Result<LocaleDataset> {
        let path = self.data_dir.join(format!("{}.toml", locale.as_str()));

        if !path.is_file() {
            return Err(DataError::NotFound {
                locale: locale.to_string(),
            });
        }

        let dataset = Self::load_from_path(&path)?;

        if dataset.locale != *locale {
            return Err(DataError::Validation {
                locale: locale.to_string(),
                reason: format!(
                    "dataset file {} declares locale {}",
                    path.display(),
                    dataset.locale
                ),
            });
        }

        debug!(
            locale = %dataset.locale,
            currencies = dataset.currencies.len(),
            "loaded locale dataset"
        );

        Ok(dataset)
    }

    /// Load all locale datasets from the data directory.
    ///
    /// Invalid files are logged as warnings and skipped.
    ///
    /// # Errors
    /// Returns error if the directory can't be read.
    pub fn load_all(&self) -> Result<Vec<LocaleDataset>> {
        let mut datasets = Vec::new();

        for entry in std::fs::read_dir(&self.data_dir)? {
            let entry = entry?;
            let path = entry.path();

            if path.extension().and_then(|s| s.to_str()) != Some("toml") {
                continue;
            }

            match Self::load_from_path(&path) {
                Ok(dataset) => datasets.push(dataset),
                Err(e) => {
                    warn!(
                        path = %path.display(),
                        error = %e,
                        "skipping invalid locale dataset"
                    );
                }
            }
        }

        info!(
            count = datasets.len(),
            dir = %self.data_dir.display(),
            "loaded locale datasets"
        );

        Ok(datasets)
    }

    /// Load and validate a dataset from a specific file path.
    fn load_from_path(path: &Path) -> Result<LocaleDataset> {
        let contents = std::fs::read_to_string(path).map_err(|e| DataError::Load {
            path: path.display().to_string(),
            source: Box::new(e),
        })?;

        let file: LocaleFile = toml::from_str(&contents).map_err(|e| DataError::Parse {
            path: path.display().to_string(),
            source: Box::new(e),
        })?;

        let locale = LocaleId::new(&file.locale)?;

        let mut currencies = HashMap::with_capacity(file.currencies.len());
        for (key, data) in file.currencies {
            let code = CurrencyCode::new(&key)?;
            if code.as_str() != key {
                return Err(DataError::Validation {
                    locale: locale.to_string(),
                    reason: format!("currency table key {key} is not in canonical form"),
                });
            }

            let record = CurrencyRecord::from_data(code.clone(), data);
            record.validate()?;
            currencies.insert(code, record);
        }

        Ok(LocaleDataset { locale, currencies })
    }
}
