//! Main processing engine.
//!
//! Runs the four stages in order: load the CSV, resolve the header, map
//! rows into the lookup table, then emit it. Both fatal conditions (missing
//! input, missing key column) are detected before anything is written.

use crate::config::BuildConfig;
use crate::emitter::write_table;
use crate::error::{BinDataError, Result};
use crate::header::HeaderIndex;
use crate::loader::load_lines;
use crate::mapper::RecordMapper;
use crate::models::BuildStats;

use colored::*;
use std::time::Instant;
use tracing::info;

/// Converts a BIN list CSV into a JSON lookup table
pub struct BinDataProcessor {
    config: BuildConfig,
}

impl BinDataProcessor {
    /// Create a processor, failing fast if the input CSV does not exist
    pub fn new(config: BuildConfig) -> Result<Self> {
        config.validate()?;

        if !config.csv_path.exists() {
            return Err(BinDataError::InputNotFound {
                path: config.csv_path.clone(),
            });
        }

        Ok(Self { config })
    }

    /// Main processing entry point
    pub fn process(&self) -> Result<BuildStats> {
        let start_time = Instant::now();
        let csv_path = &self.config.csv_path;

        println!(
            "{} {}",
            "Reading CSV from:".bright_cyan(),
            csv_path.display()
        );
        let lines = load_lines(csv_path)?;

        let (header_line, rows) = lines
            .split_first()
            .ok_or_else(|| BinDataError::EmptyInput {
                path: csv_path.clone(),
            })?;

        let index = HeaderIndex::resolve(header_line, &self.config.columns)?;
        println!("{} {}", "Headers:".bright_cyan(), index.names.join(", "));
        println!(
            "{} {}",
            "Total rows:".bright_cyan(),
            rows.len().to_string().bright_white().bold()
        );

        let (table, mapping) = RecordMapper::new(&index, self.config.min_key_length)
            .map_all(rows, self.config.show_progress);

        let output_bytes = write_table(&table, &self.config.output_path)?;

        let stats = BuildStats {
            entries: table.len(),
            mapping,
            output_path: self.config.output_path.clone(),
            output_bytes,
            processing_time_ms: start_time.elapsed().as_millis(),
        };

        info!(
            "Build finished in {}ms: {} entries, {} skipped, {} duplicate keys",
            stats.processing_time_ms,
            stats.entries,
            stats.skipped(),
            stats.mapping.duplicates(stats.entries)
        );

        Ok(stats)
    }
}

/// Print the human-readable summary block
pub fn print_summary(stats: &BuildStats) {
    println!();
    println!(
        "{} {}",
        "Generated:".bright_green().bold(),
        stats.output_path.display()
    );
    println!(
        "{} {}",
        "Entries:".bright_cyan(),
        stats.entries.to_string().bright_white().bold()
    );
    println!(
        "{} {}",
        "Skipped:".bright_cyan(),
        stats.skipped().to_string().bright_white()
    );
    println!(
        "{} {} MB",
        "File size:".bright_cyan(),
        stats.size_mib_display()
    );
}
