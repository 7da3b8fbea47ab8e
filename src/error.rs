//! Error types for IFC Supplier Match.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when parsing IFC files.
#[derive(Debug, Error)]
pub enum ParseError {
    /// Failed to read the IFC file from disk.
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The STEP format is invalid or malformed.
    #[error("invalid STEP format: {message}")]
    InvalidStep { message: String },
}

/// Errors raised while loading the mapping and catalog resources.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// The classification mapping resource is missing or unreadable.
    #[error("failed to read classification mapping '{path}': {source}")]
    Config {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The supplier catalog could not be opened.
    #[error("failed to open supplier catalog '{path}': {source}")]
    CatalogOpen {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The supplier catalog is not valid delimited text.
    #[error("failed to read supplier catalog: {source}")]
    CatalogRead {
        #[from]
        source: csv::Error,
    },

    /// The supplier catalog header lacks required columns.
    #[error(
        "missing columns in supplier catalog: {}. Please check the CSV file has the correct column names",
        .missing.join(", ")
    )]
    Schema { missing: Vec<String> },
}

/// Errors that abort the matching pipeline.
#[derive(Debug, Error)]
pub enum MatchError {
    /// A ranking column holds a value that is not a number.
    #[error(
        "data quality error for classification '{classification}': column '{column}' has non-numeric value '{value}'"
    )]
    DataType {
        classification: String,
        column: &'static str,
        value: String,
    },

    /// A worker task panicked or was cancelled.
    #[error("worker task failed: {source}")]
    Worker {
        #[from]
        source: tokio::task::JoinError,
    },
}

/// Errors that can occur when exporting data.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Failed to create the output file.
    #[error("failed to create file '{path}': {source}")]
    FileCreate {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to write data to the file.
    #[error("failed to write data: {message}")]
    WriteError { message: String },

    /// Failed to write CSV data.
    #[error("CSV write failed: {source}")]
    CsvWrite {
        #[from]
        source: csv::Error,
    },
}

/// Errors raised after the model and resources are loaded.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Match(#[from] MatchError),

    #[error(transparent)]
    Export(#[from] ExportError),
}
