//! Input-boundary validation
//!
//! Field patterns checked before anything reaches the record store.

use jiff::civil::Date;
use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

use super::model::Field;

/// Earliest accepted contract expiry year.
pub const MIN_CONTRACT_YEAR: i16 = 2023;

static NAME: LazyLock<Regex> = LazyLock::new(|| compile(r"^.{1,30}$"));
static NUMBER: LazyLock<Regex> = LazyLock::new(|| compile(r"^[0-9]{1,5}$"));
static UC_VERSION: LazyLock<Regex> =
    LazyLock::new(|| compile(r"^[0-9]{2}\.[0-9]\.[0-9]\.[0-9]{5}-[0-9]{2}$"));
static EXP_VERSION: LazyLock<Regex> =
    LazyLock::new(|| compile(r"^X[0-9]{1,2}\.[0-9]\.[0-9]{1,2}$"));
static CONTRACT: LazyLock<Regex> =
    LazyLock::new(|| compile(r"^([0-9]{1,2})/([0-9]{1,2})/([0-9]{4})$"));

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("field patterns are valid regular expressions")
}

/// Rejected field input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} must not be empty")]
    Required(Field),

    #[error("{field} has an invalid format: {hint}")]
    Format { field: Field, hint: &'static str },

    #[error("contract {0} is not a valid date")]
    InvalidDate(String),

    #[error("contract year must be {MIN_CONTRACT_YEAR} or later")]
    YearTooEarly,
}

/// Checks a single field value against its pattern.
///
/// Optional version fields accept an empty value.
pub fn validate_field(field: Field, value: &str) -> Result<(), ValidationError> {
    match field {
        Field::Name => check_pattern(field, &NAME, value, "1 to 30 characters"),
        Field::Number => check_pattern(field, &NUMBER, value, "1 to 5 digits"),
        Field::Cucm | Field::Imp | Field::Cuc if value.is_empty() => Ok(()),
        Field::Cucm | Field::Imp | Field::Cuc => {
            check_pattern(field, &UC_VERSION, value, "e.g. 12.5.1.17900-22")
        }
        Field::Exp if value.is_empty() => Ok(()),
        Field::Exp => check_pattern(field, &EXP_VERSION, value, "e.g. X14.0.2"),
        Field::Contract => parse_contract_date(value).map(|_| ()),
    }
}

/// Parses a `D/M/YYYY` contract expiry date.
pub fn parse_contract_date(value: &str) -> Result<Date, ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::Required(Field::Contract));
    }

    let captures = CONTRACT.captures(value).ok_or(ValidationError::Format {
        field: Field::Contract,
        hint: "e.g. 1/10/2025",
    })?;

    let invalid = || ValidationError::InvalidDate(value.to_string());
    let day: i8 = captures[1].parse().map_err(|_| invalid())?;
    let month: i8 = captures[2].parse().map_err(|_| invalid())?;
    let year: i16 = captures[3].parse().map_err(|_| invalid())?;

    if year < MIN_CONTRACT_YEAR {
        return Err(ValidationError::YearTooEarly);
    }

    Date::new(year, month, day).map_err(|_| invalid())
}

fn check_pattern(
    field: Field,
    pattern: &Regex,
    value: &str,
    hint: &'static str,
) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::Required(field));
    }
    if pattern.is_match(value) {
        Ok(())
    } else {
        Err(ValidationError::Format { field, hint })
    }
}
