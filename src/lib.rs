//! BIN Data Builder Library
//!
//! Converts a delimited bank-card issuer-identification (BIN) list into a
//! compact JSON object keyed by BIN, suitable for low-memory prefix lookups.
//!
//! The pipeline has four stages:
//! - `loader`: read the whole CSV and drop blank lines
//! - `header`: locate recognized columns by exact name
//! - `mapper`: tokenize rows, filter them, build sparse records
//! - `emitter`: write the table as minimized JSON

pub mod cli;
pub mod config;
pub mod constants;
pub mod emitter;
pub mod error;
pub mod header;
pub mod loader;
pub mod mapper;
pub mod models;
pub mod processor;
pub mod record;
pub mod tokenizer;

pub use config::{BuildConfig, ColumnNames};
pub use error::{BinDataError, Result};
pub use models::{BuildStats, LookupTable};
pub use processor::BinDataProcessor;
pub use record::CanonicalRecord;
