//! Lookup table serialization.
//!
//! Writes the table as compact JSON (no whitespace). Keys come out in
//! `BTreeMap` order and record fields in declaration order, so the same
//! table always produces the same bytes.

use crate::error::Result;
use crate::models::LookupTable;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Serialize the table to minimized JSON
pub fn serialize_table(table: &LookupTable) -> Result<String> {
    Ok(serde_json::to_string(table)?)
}

/// Parse a previously emitted table
pub fn parse_table(json: &str) -> Result<LookupTable> {
    Ok(serde_json::from_str(json)?)
}

/// Write the table to `path`, creating parent directories and replacing any
/// existing file. Returns the number of bytes written.
pub fn write_table(table: &LookupTable, path: &Path) -> Result<usize> {
    let json = serialize_table(table)?;

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, json.as_bytes())?;

    debug!(
        "Wrote {} entries ({} bytes) to {}",
        table.len(),
        json.len(),
        path.display()
    );

    Ok(json.len())
}
