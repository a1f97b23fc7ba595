//! Whole-file CSV loading.
//!
//! The input is read into memory in one go and split on `\n`. Lines that
//! are empty or whitespace-only are dropped; everything else is kept
//! verbatim (including any trailing `\r`, which tokenizer trimming removes).

use crate::constants::BYTE_ORDER_MARK;
use crate::error::{BinDataError, Result};
use crate::tokenizer::trim_cell;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Read `path` and return its non-blank lines in order
pub fn load_lines(path: &Path) -> Result<Vec<String>> {
    if !path.exists() {
        return Err(BinDataError::InputNotFound {
            path: path.to_path_buf(),
        });
    }

    let bytes = fs::read(path)?;
    let text = String::from_utf8_lossy(&bytes);
    let lines = split_lines(&text);

    debug!(
        "Loaded {} bytes, {} non-blank lines from {}",
        bytes.len(),
        lines.len(),
        path.display()
    );

    Ok(lines)
}

/// Split on `\n`, discarding whitespace-only lines and a leading BOM
pub fn split_lines(text: &str) -> Vec<String> {
    let text = text.strip_prefix(BYTE_ORDER_MARK).unwrap_or(text);
    text.split('\n')
        .filter(|line| !trim_cell(line).is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_split_lines_drops_blank_lines() {
        let lines = split_lines("BIN,Brand\n\n424242,VISA\n   \n\t\n555555,MASTERCARD\n");
        assert_eq!(lines, vec!["BIN,Brand", "424242,VISA", "555555,MASTERCARD"]);
    }

    #[test]
    fn test_split_lines_keeps_carriage_returns() {
        let lines = split_lines("BIN,Brand\r\n424242,VISA\r\n\r\n");
        assert_eq!(lines, vec!["BIN,Brand\r", "424242,VISA\r"]);
    }

    #[test]
    fn test_split_lines_strips_byte_order_mark() {
        let lines = split_lines("\u{FEFF}BIN,Brand\n424242,VISA\n\u{FEFF}\n");
        assert_eq!(lines, vec!["BIN,Brand", "424242,VISA"]);
    }

    #[test]
    fn test_load_lines_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "BIN,Brand").unwrap();
        writeln!(temp_file).unwrap();
        writeln!(temp_file, "424242,VISA").unwrap();

        let lines = load_lines(temp_file.path()).unwrap();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1], "424242,VISA");
    }

    #[test]
    fn test_load_lines_missing_file() {
        let result = load_lines(Path::new("/definitely/not/here.csv"));
        match result {
            Err(BinDataError::InputNotFound { path }) => {
                assert_eq!(path, Path::new("/definitely/not/here.csv"));
            }
            other => panic!("Expected InputNotFound, got {:?}", other),
        }
    }
}
