//! Core data structures for lookup table builds.
//!
//! Defines the lookup table itself and the statistics reported once a
//! build finishes.

use crate::record::CanonicalRecord;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Key-field value to compacted record, in lexicographic key order
pub type LookupTable = BTreeMap<String, CanonicalRecord>;

/// Counters collected while mapping rows
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingStats {
    /// Data rows seen (header excluded)
    pub total_rows: usize,

    /// Rows accepted into the table, duplicates included
    pub accepted_rows: usize,

    /// Rows with a missing or too-short key
    pub skipped_short_key: usize,

    /// Rows with a valid key but no brand, type or issuer
    pub skipped_no_attributes: usize,
}

impl MappingStats {
    /// All skipped rows, whatever the reason
    pub fn skipped(&self) -> usize {
        self.skipped_short_key + self.skipped_no_attributes
    }

    /// Accepted rows that overwrote an earlier row with the same key
    pub fn duplicates(&self, entries: usize) -> usize {
        self.accepted_rows.saturating_sub(entries)
    }
}

/// Build statistics
#[derive(Debug, Default)]
pub struct BuildStats {
    pub mapping: MappingStats,
    /// Distinct keys in the emitted table
    pub entries: usize,
    pub output_path: PathBuf,
    pub output_bytes: usize,
    pub processing_time_ms: u128,
}

impl BuildStats {
    /// Skipped rows, as reported in the summary
    pub fn skipped(&self) -> usize {
        self.mapping.skipped()
    }

    /// Output size in mebibytes
    pub fn size_mib(&self) -> f64 {
        self.output_bytes as f64 / crate::constants::BYTES_PER_MIB
    }

    /// Output size in mebibytes, rounded to two decimals for display
    pub fn size_mib_display(&self) -> String {
        format!("{:.2}", self.size_mib())
    }
}
