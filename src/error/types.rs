//! Error types
//!
//! Defines the errors raised by the record store and by startup.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Record store errors
///
/// Only write operations produce these; reads fall back to an empty table.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing file does not exist. The store never creates it.
    #[error("data file does not exist: {}", .0.display())]
    FileMissing(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl StoreError {
    /// Returns true when the failure was caused by a missing backing file.
    pub fn is_file_missing(&self) -> bool {
        matches!(self, StoreError::FileMissing(_))
    }
}

/// Top-level application error
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
