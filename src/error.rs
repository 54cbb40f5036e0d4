//! Error types for the cleaning pipeline.
//!
//! Every failure in the pipeline is fatal: the run aborts with a diagnostic
//! naming the offending path, column, row, or value. Data-quality conditions
//! (duplicates, missing values, outliers) are not errors; they are remediated
//! in place and reported as counters.

use serde::Serialize;
use serde::ser::SerializeStruct;
use std::path::PathBuf;
use thiserror::Error;

/// The main error type for the cleaning pipeline.
#[derive(Error, Debug)]
pub enum CleaningError {
    /// Input file is missing, unreadable, or has an unparsable row shape.
    #[error("failed to load '{path}': {reason}")]
    Load { path: PathBuf, reason: String },

    /// Expected column absent, or column-name standardization collision.
    #[error("schema error: {0}")]
    Schema(String),

    /// A value in the enrollment-date column does not match the expected
    /// day-month-year pattern.
    #[error("row {row}: cannot parse '{value}' as a day-month-year date")]
    DateParse { row: usize, value: String },

    /// Output path is unwritable.
    #[error("failed to write '{path}': {reason}")]
    Write { path: PathBuf, reason: String },

    /// Polars error wrapper.
    #[error("polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CleaningError {
    /// Stable error code for diagnostics and serialized output.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Load { .. } => "LOAD_ERROR",
            Self::Schema(_) => "SCHEMA_ERROR",
            Self::DateParse { .. } => "DATE_PARSE_ERROR",
            Self::Write { .. } => "WRITE_ERROR",
            Self::Polars(_) => "POLARS_ERROR",
            Self::Io(_) => "IO_ERROR",
        }
    }
}

/// Errors are serialized as a struct with `code` and `message` fields.
impl Serialize for CleaningError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut state = serializer.serialize_struct("CleaningError", 2)?;
        state.serialize_field("code", &self.error_code())?;
        state.serialize_field("message", &self.to_string())?;
        state.end()
    }
}

/// Result type alias for cleaning operations.
pub type Result<T> = std::result::Result<T, CleaningError>;
