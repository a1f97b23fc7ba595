//! Error handling for BIN data builds.
//!
//! Only run-level failures live here. Malformed rows are never errors:
//! they degrade to empty fields or are counted as skipped by the mapper.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BinDataError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV not found: {path}")]
    InputNotFound { path: PathBuf },

    #[error("CSV has no header line: {path}")]
    EmptyInput { path: PathBuf },

    #[error("{column} column not found in CSV (headers: {headers})")]
    MissingKeyColumn { column: String, headers: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl BinDataError {
    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Process exit code for this failure
    pub fn exit_code(&self) -> i32 {
        1
    }

    /// True when the input schema, rather than the environment, caused the failure
    pub fn is_schema_error(&self) -> bool {
        matches!(
            self,
            Self::MissingKeyColumn { .. } | Self::EmptyInput { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, BinDataError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = BinDataError::InputNotFound {
            path: PathBuf::from("missing.csv"),
        };
        assert_eq!(err.to_string(), "CSV not found: missing.csv");

        let err = BinDataError::MissingKeyColumn {
            column: "BIN".to_string(),
            headers: "Brand, Type".to_string(),
        };
        assert!(err.to_string().starts_with("BIN column not found"));
        assert!(err.is_schema_error());
    }

    #[test]
    fn test_all_fatal_errors_exit_with_one() {
        let errors = [
            BinDataError::InputNotFound {
                path: PathBuf::from("a.csv"),
            },
            BinDataError::configuration("bad"),
            BinDataError::Io(std::io::Error::other("disk")),
        ];
        for err in errors {
            assert_eq!(err.exit_code(), 1);
        }
    }
}
