//! Customer records
//!
//! Data model, input-boundary validation and contract expiry status.

pub mod expiry;
pub mod model;
pub mod validation;

pub use expiry::ContractStatus;
pub use model::{CUSTOMER_COLUMNS, CustomerDraft, CustomerRecord, Field};
pub use validation::{ValidationError, validate_field};
