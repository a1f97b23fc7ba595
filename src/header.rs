//! Header resolution.
//!
//! Parses the first CSV line into column names and records where each
//! recognized column sits. Only the key column is mandatory; any other
//! column may be absent, in which case its attribute is never populated.

use crate::config::ColumnNames;
use crate::error::{BinDataError, Result};
use crate::tokenizer::tokenize_header;
use tracing::{debug, warn};

/// Positions of the recognized columns within a row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderIndex {
    pub key: usize,
    pub brand: Option<usize>,
    pub card_type: Option<usize>,
    pub category: Option<usize>,
    pub issuer: Option<usize>,
    pub country_code: Option<usize>,
    pub country_name: Option<usize>,
    /// All header names, in file order
    pub names: Vec<String>,
}

impl HeaderIndex {
    /// Resolve recognized columns from a raw header line
    pub fn resolve(line: &str, columns: &ColumnNames) -> Result<Self> {
        let names = tokenize_header(line);
        Self::from_names(names, columns)
    }

    /// Resolve recognized columns from already-split header names
    pub fn from_names(names: Vec<String>, columns: &ColumnNames) -> Result<Self> {
        let position = |wanted: &str| names.iter().position(|name| name == wanted);

        let key = position(&columns.key).ok_or_else(|| BinDataError::MissingKeyColumn {
            column: columns.key.clone(),
            headers: names.join(", "),
        })?;

        let index = Self {
            key,
            brand: position(&columns.brand),
            card_type: position(&columns.card_type),
            category: position(&columns.category),
            issuer: position(&columns.issuer),
            country_code: position(&columns.country_code),
            country_name: position(&columns.country_name),
            names,
        };

        for (name, slot) in index.optional_slots(columns) {
            match slot {
                Some(i) => debug!("Column '{}' resolved at index {}", name, i),
                None => warn!("Column '{}' not found; attribute will be omitted", name),
            }
        }

        Ok(index)
    }

    /// Optional columns paired with their resolved positions
    pub fn optional_slots<'a>(&self, columns: &'a ColumnNames) -> [(&'a str, Option<usize>); 6] {
        [
            (columns.brand.as_str(), self.brand),
            (columns.card_type.as_str(), self.card_type),
            (columns.category.as_str(), self.category),
            (columns.issuer.as_str(), self.issuer),
            (columns.country_code.as_str(), self.country_code),
            (columns.country_name.as_str(), self.country_name),
        ]
    }
}

/// Fetch a trimmed cell by optional index; missing or out-of-range is empty
pub fn cell(row: &[String], index: Option<usize>) -> &str {
    index
        .and_then(|i| row.get(i))
        .map(String::as_str)
        .unwrap_or("")
}
