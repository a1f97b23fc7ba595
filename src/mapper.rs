//! Row mapping and filtering.
//!
//! Turns tokenized data rows into lookup table entries. A row is accepted
//! when its key is at least `min_key_length` UTF-16 code units long and
//! at least one of brand, type or issuer is non-empty. Everything else is
//! counted as skipped; no row is ever an error. Later rows overwrite
//! earlier rows with the same key.

use crate::constants::{PROGRESS_TEMPLATE, PROGRESS_UPDATE_INTERVAL};
use crate::header::{HeaderIndex, cell};
use crate::models::{LookupTable, MappingStats};
use crate::record::CanonicalRecord;
use crate::tokenizer::tokenize_line;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::debug;

/// What happened to a single row
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowOutcome {
    Accepted {
        key: String,
        record: CanonicalRecord,
    },
    /// Key column missing, empty or shorter than the minimum
    SkippedShortKey,
    /// Key valid, but no brand, type or issuer
    SkippedNoAttributes,
}

/// Map one raw line against the resolved header
pub fn map_row(line: &str, index: &HeaderIndex, min_key_length: usize) -> RowOutcome {
    let row = tokenize_line(line);

    let key = match row.get(index.key) {
        Some(key) if key_length(key) >= min_key_length => key,
        _ => return RowOutcome::SkippedShortKey,
    };

    let record = CanonicalRecord::builder()
        .brand(cell(&row, index.brand))
        .card_type(cell(&row, index.card_type))
        .category(cell(&row, index.category))
        .issuer(cell(&row, index.issuer))
        .country(cell(&row, index.country_code))
        .build();

    if !record.is_meaningful() {
        return RowOutcome::SkippedNoAttributes;
    }

    RowOutcome::Accepted {
        key: key.clone(),
        record,
    }
}

/// Key length in UTF-16 code units, so astral characters count twice
pub fn key_length(key: &str) -> usize {
    key.encode_utf16().count()
}

/// Accumulates accepted rows into a lookup table
#[derive(Debug)]
pub struct RecordMapper<'a> {
    index: &'a HeaderIndex,
    min_key_length: usize,
    table: LookupTable,
    stats: MappingStats,
}

impl<'a> RecordMapper<'a> {
    pub fn new(index: &'a HeaderIndex, min_key_length: usize) -> Self {
        Self {
            index,
            min_key_length,
            table: LookupTable::new(),
            stats: MappingStats::default(),
        }
    }

    /// Map a single data row
    pub fn push(&mut self, line: &str) {
        self.stats.total_rows += 1;
        match map_row(line, self.index, self.min_key_length) {
            RowOutcome::Accepted { key, record } => {
                self.stats.accepted_rows += 1;
                self.table.insert(key, record);
            }
            RowOutcome::SkippedShortKey => self.stats.skipped_short_key += 1,
            RowOutcome::SkippedNoAttributes => self.stats.skipped_no_attributes += 1,
        }
    }

    /// Map every data row, optionally drawing a progress bar
    pub fn map_all<S: AsRef<str>>(
        mut self,
        rows: &[S],
        show_progress: bool,
    ) -> (LookupTable, MappingStats) {
        let pb = if show_progress {
            let pb = ProgressBar::new(rows.len() as u64);
            pb.set_style(
                ProgressStyle::default_bar()
                    .template(PROGRESS_TEMPLATE)
                    .unwrap_or_else(|_| ProgressStyle::default_bar())
                    .progress_chars("#>-"),
            );
            pb
        } else {
            ProgressBar::hidden()
        };

        for (i, row) in rows.iter().enumerate() {
            self.push(row.as_ref());
            if (i as u64 + 1) % PROGRESS_UPDATE_INTERVAL == 0 {
                pb.set_position(i as u64 + 1);
            }
        }
        pb.finish_and_clear();

        debug!(
            "Mapped {} rows: {} accepted, {} short keys, {} without attributes, {} distinct keys",
            self.stats.total_rows,
            self.stats.accepted_rows,
            self.stats.skipped_short_key,
            self.stats.skipped_no_attributes,
            self.table.len()
        );

        (self.table, self.stats)
    }
}
