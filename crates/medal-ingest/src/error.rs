//! Error types for results ingestion.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// The two raw input tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableKind {
    Events,
    Regions,
}

impl TableKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TableKind::Events => "events",
            TableKind::Regions => "regions",
        }
    }
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors that can occur while loading and normalizing the input tables.
#[derive(Debug, Error)]
pub enum DataLoadError {
    // === File System Errors ===
    /// CSV file not found.
    #[error("CSV file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === CSV Parsing Errors ===
    /// Failed to parse CSV with Polars.
    #[error("failed to parse CSV {path}: {message}")]
    CsvParse { path: PathBuf, message: String },

    // === Schema Errors ===
    /// Required column not found in an input table.
    #[error("required column '{column}' not found in {table} table")]
    MissingColumn { table: TableKind, column: String },

    /// A cell that cannot be converted to its canonical type.
    #[error("invalid {column} value '{value}' in {table} table at row {row}")]
    InvalidValue {
        table: TableKind,
        row: usize,
        column: String,
        value: String,
    },

    // === DataFrame Errors ===
    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<polars::prelude::PolarsError> for DataLoadError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, DataLoadError>;
