//! Contract expiry status
//!
//! Classifies a customer by how long its contract still runs.

use jiff::Zoned;
use jiff::civil::Date;
use std::fmt;

use super::validation::parse_contract_date;

/// How close a contract is to its end date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContractStatus {
    /// Ends today or has already ended.
    Expired,
    /// Ends within the warning window.
    Expiring,
    Active,
    /// The stored date could not be parsed.
    Unknown,
}

impl ContractStatus {
    /// Classifies an expiry date relative to `today`.
    pub fn classify(expiry: Date, today: Date, warning_days: i64) -> Self {
        let remaining = i64::from((expiry - today).get_days());
        if remaining <= 0 {
            ContractStatus::Expired
        } else if remaining <= warning_days {
            ContractStatus::Expiring
        } else {
            ContractStatus::Active
        }
    }

    /// Classifies a stored `D/M/YYYY` value.
    pub fn from_stored(value: &str, today: Date, warning_days: i64) -> Self {
        match parse_contract_date(value) {
            Ok(expiry) => Self::classify(expiry, today, warning_days),
            Err(_) => ContractStatus::Unknown,
        }
    }
}

impl fmt::Display for ContractStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ContractStatus::Expired => "expired",
            ContractStatus::Expiring => "expiring",
            ContractStatus::Active => "active",
            ContractStatus::Unknown => "unknown",
        };
        f.write_str(label)
    }
}

/// The local calendar date.
pub fn today() -> Date {
    Zoned::now().date()
}
