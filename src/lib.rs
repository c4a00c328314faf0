//! customer-ledger
//!
//! Login-gated customer and license records kept in CSV files.

pub mod auth;
pub mod config;
pub mod console;
pub mod error;
pub mod records;
pub mod session;
pub mod storage;

pub use auth::{AuthOutcome, Authenticator, Privilege};
pub use config::LedgerConfig;
pub use console::Console;
pub use error::{LedgerError, StoreError};
pub use records::{CustomerDraft, CustomerRecord};
pub use session::Session;
pub use storage::{CsvCustomerStore, CustomerStore};
