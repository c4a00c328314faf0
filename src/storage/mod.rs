//! Customer record storage
//!
//! Persists the customer table in a CSV file and implements the id and
//! duplicate rules the caller layer relies on.

pub mod csv_store;
pub mod filesystem;
pub mod operations;

pub use csv_store::CsvCustomerStore;
pub use operations::{Duplicate, find_duplicate, next_free_id, position_by_number};

use crate::error::StoreError;
use crate::records::{CustomerDraft, CustomerRecord};

/// Read/write access to the customer table.
///
/// Reads never fail; writes report `StoreError::FileMissing` when the
/// backing file is absent. Uniqueness is the caller's responsibility.
pub trait CustomerStore {
    /// Loads every customer row. An absent or malformed file yields no rows.
    fn read_all(&self) -> Vec<CustomerRecord>;

    /// Assigns the smallest free id to the draft and appends it.
    fn add(&self, draft: CustomerDraft) -> Result<CustomerRecord, StoreError>;

    /// Replaces the whole table with `records`.
    fn update(&self, records: &[CustomerRecord]) -> Result<(), StoreError>;

    /// Replaces the whole table with `records`, which the caller has already
    /// stripped of the deleted row.
    fn delete(&self, records: &[CustomerRecord]) -> Result<(), StoreError>;
}
