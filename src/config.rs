//! Configuration management and validation.
//!
//! Everything the pipeline needs to know about its environment (where to
//! read, where to write, which header names to look for) is carried in a
//! `BuildConfig` and passed in explicitly, so tests can point the pipeline
//! at synthetic inputs and scratch output directories.

use crate::constants::{DEFAULT_CSV_PATH, DEFAULT_OUTPUT_PATH, MIN_KEY_LENGTH, columns};
use crate::error::{BinDataError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::debug;

/// Header names the resolver looks for in the first CSV line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnNames {
    /// Mandatory lookup key column
    pub key: String,
    pub brand: String,
    pub card_type: String,
    pub category: String,
    pub issuer: String,
    /// Two-letter country code, emitted as `co`
    pub country_code: String,
    /// Full country name, resolved for diagnostics only
    pub country_name: String,
}

impl Default for ColumnNames {
    fn default() -> Self {
        Self {
            key: columns::BIN.to_string(),
            brand: columns::BRAND.to_string(),
            card_type: columns::TYPE.to_string(),
            category: columns::CATEGORY.to_string(),
            issuer: columns::ISSUER.to_string(),
            country_code: columns::ISO_CODE_2.to_string(),
            country_name: columns::COUNTRY_NAME.to_string(),
        }
    }
}

/// Global configuration for a lookup table build
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildConfig {
    /// Source CSV file
    pub csv_path: PathBuf,

    /// Destination JSON file, overwritten on every run
    pub output_path: PathBuf,

    /// Recognized header names
    pub columns: ColumnNames,

    /// Rows whose key is shorter than this are skipped
    pub min_key_length: usize,

    /// Draw a progress bar while mapping rows
    pub show_progress: bool,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            csv_path: PathBuf::from(DEFAULT_CSV_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            columns: ColumnNames::default(),
            min_key_length: MIN_KEY_LENGTH,
            show_progress: true,
        }
    }
}

impl BuildConfig {
    /// Set the input CSV path
    pub fn with_csv_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.csv_path = path.into();
        self
    }

    /// Set the output JSON path
    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }

    /// Override the recognized header names
    pub fn with_columns(mut self, columns: ColumnNames) -> Self {
        self.columns = columns;
        self
    }

    /// Set the minimum accepted key length
    pub fn with_min_key_length(mut self, min_key_length: usize) -> Self {
        self.min_key_length = min_key_length;
        self
    }

    /// Disable the progress bar (quiet runs and tests)
    pub fn without_progress(mut self) -> Self {
        self.show_progress = false;
        self
    }

    /// Reject configurations that could never produce a sensible table
    pub fn validate(&self) -> Result<()> {
        if self.min_key_length == 0 {
            return Err(BinDataError::configuration(
                "min_key_length must be at least 1",
            ));
        }

        if self.columns.key.trim().is_empty() {
            return Err(BinDataError::configuration("key column name is empty"));
        }

        if self.csv_path == self.output_path {
            return Err(BinDataError::configuration(format!(
                "output path {} would overwrite the input CSV",
                self.output_path.display()
            )));
        }

        debug!("Configuration validated: {:?}", self);
        Ok(())
    }
}
