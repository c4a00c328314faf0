//! Customer data model
//!
//! Column names match the header of the customer table file.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Header row of the customer table file.
pub const CUSTOMER_COLUMNS: [&str; 8] = [
    "id",
    "name",
    "number",
    "cucm",
    "imp",
    "cuc",
    "exp",
    "contract-expire",
];

/// One persisted customer row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerRecord {
    pub id: u32,
    pub name: String,
    pub number: String,
    #[serde(rename = "cucm")]
    pub cucm_version: Option<String>,
    #[serde(rename = "imp")]
    pub imp_version: Option<String>,
    #[serde(rename = "cuc")]
    pub cuc_version: Option<String>,
    #[serde(rename = "exp")]
    pub exp_version: Option<String>,
    #[serde(rename = "contract-expire")]
    pub contract_expiry: String,
}

/// A customer as entered by the user, before an id is assigned.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomerDraft {
    pub name: String,
    pub number: String,
    pub cucm_version: Option<String>,
    pub imp_version: Option<String>,
    pub cuc_version: Option<String>,
    pub exp_version: Option<String>,
    pub contract_expiry: String,
}

impl CustomerDraft {
    /// Attaches an id, producing the row that gets persisted.
    pub fn into_record(self, id: u32) -> CustomerRecord {
        CustomerRecord {
            id,
            name: self.name,
            number: self.number,
            cucm_version: self.cucm_version,
            imp_version: self.imp_version,
            cuc_version: self.cuc_version,
            exp_version: self.exp_version,
            contract_expiry: self.contract_expiry,
        }
        .normalized()
    }

    /// Stores a value in the given field. Empty values clear optional fields.
    pub fn set(&mut self, field: Field, value: &str) {
        match field {
            Field::Name => self.name = value.to_string(),
            Field::Number => self.number = value.to_string(),
            Field::Cucm => self.cucm_version = optional(value),
            Field::Imp => self.imp_version = optional(value),
            Field::Cuc => self.cuc_version = optional(value),
            Field::Exp => self.exp_version = optional(value),
            Field::Contract => self.contract_expiry = value.to_string(),
        }
    }
}

impl CustomerRecord {
    /// Maps empty optional columns to `None`, the only form an empty cell
    /// reads back as.
    pub fn normalized(mut self) -> Self {
        for version in [
            &mut self.cucm_version,
            &mut self.imp_version,
            &mut self.cuc_version,
            &mut self.exp_version,
        ] {
            if version.as_deref() == Some("") {
                *version = None;
            }
        }
        self
    }

    /// Overwrites a single field. The id is not editable.
    pub fn set(&mut self, field: Field, value: &str) {
        match field {
            Field::Name => self.name = value.to_string(),
            Field::Number => self.number = value.to_string(),
            Field::Cucm => self.cucm_version = optional(value),
            Field::Imp => self.imp_version = optional(value),
            Field::Cuc => self.cuc_version = optional(value),
            Field::Exp => self.exp_version = optional(value),
            Field::Contract => self.contract_expiry = value.to_string(),
        }
    }
}

fn optional(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Editable customer fields, as named on the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Number,
    Cucm,
    Imp,
    Cuc,
    Exp,
    Contract,
}

impl FromStr for Field {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "name" => Ok(Field::Name),
            "number" => Ok(Field::Number),
            "cucm" => Ok(Field::Cucm),
            "imp" => Ok(Field::Imp),
            "cuc" => Ok(Field::Cuc),
            "exp" => Ok(Field::Exp),
            "contract" => Ok(Field::Contract),
            other => Err(format!("Unknown field: {other}")),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Name => "name",
            Field::Number => "number",
            Field::Cucm => "cucm",
            Field::Imp => "imp",
            Field::Cuc => "cuc",
            Field::Exp => "exp",
            Field::Contract => "contract",
        };
        f.write_str(name)
    }
}
