//! CSV-backed customer store

use log::{error, info};
use std::path::{Path, PathBuf};

use super::CustomerStore;
use super::filesystem::{append_row, load_table, rewrite_table};
use super::operations::next_free_id;
use crate::error::StoreError;
use crate::records::{CUSTOMER_COLUMNS, CustomerDraft, CustomerRecord};

/// Customer table kept in a single CSV file.
///
/// There is no locking: two processes adding at the same time can both
/// pick the same free id.
#[derive(Debug, Clone)]
pub struct CsvCustomerStore {
    path: PathBuf,
}

impl CsvCustomerStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn rewrite(&self, records: &[CustomerRecord], action: &str) -> Result<(), StoreError> {
        let rows: Vec<CustomerRecord> = records
            .iter()
            .cloned()
            .map(CustomerRecord::normalized)
            .collect();
        match rewrite_table(&self.path, &CUSTOMER_COLUMNS, &rows) {
            Ok(()) => {
                info!(
                    "{} {}: wrote {} customers",
                    action,
                    self.path.display(),
                    records.len()
                );
                Ok(())
            }
            Err(e) => {
                error!("{} {} failed: {}", action, self.path.display(), e);
                Err(e)
            }
        }
    }
}

impl CustomerStore for CsvCustomerStore {
    fn read_all(&self) -> Vec<CustomerRecord> {
        load_table(&self.path)
    }

    fn add(&self, draft: CustomerDraft) -> Result<CustomerRecord, StoreError> {
        let current = self.read_all();
        let record = draft.into_record(next_free_id(&current));

        match append_row(&self.path, &CUSTOMER_COLUMNS, &record) {
            Ok(()) => {
                info!(
                    "Added customer {} ({}) with id {}",
                    record.name, record.number, record.id
                );
                Ok(record)
            }
            Err(e) => {
                error!("Adding customer {} failed: {}", record.name, e);
                Err(e)
            }
        }
    }

    fn update(&self, records: &[CustomerRecord]) -> Result<(), StoreError> {
        self.rewrite(records, "Update")
    }

    fn delete(&self, records: &[CustomerRecord]) -> Result<(), StoreError> {
        self.rewrite(records, "Delete")
    }
}
