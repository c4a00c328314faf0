//! Error handlers
//!
//! Translates store errors into the messages the console prints.

use log::error;

use crate::error::types::{LedgerError, StoreError};

/// Store operations that report an outcome to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreOperation {
    Add,
    Update,
    Delete,
}

/// Log a fatal application error
pub fn handle_error(err: &LedgerError) {
    error!("customer-ledger error: {}", err);
}

/// Message shown after a failed store write
pub fn store_error_message(operation: StoreOperation, err: &StoreError) -> String {
    let action = match operation {
        StoreOperation::Add => "The customer could not be created",
        StoreOperation::Update => "The customer data could not be changed",
        StoreOperation::Delete => "The customer could not be deleted",
    };

    match err {
        StoreError::FileMissing(_) => format!("{action}: the data file does not exist!"),
        StoreError::Io(_) | StoreError::Csv(_) => {
            format!("{action}: no access to the database!")
        }
    }
}

/// Message shown after a successful store write
pub fn store_success_message(operation: StoreOperation) -> &'static str {
    match operation {
        StoreOperation::Add => "The customer was created successfully.",
        StoreOperation::Update => "The customer data was changed successfully.",
        StoreOperation::Delete => "The customer was deleted successfully.",
    }
}
