//! Table rendering
//!
//! Turns customer rows into text tables for the console.

use jiff::civil::Date;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::records::{ContractStatus, CustomerDraft, CustomerRecord};

#[derive(Tabled)]
struct CustomerRow<'a> {
    #[tabled(rename = "Name")]
    name: &'a str,
    #[tabled(rename = "Number")]
    number: &'a str,
    #[tabled(rename = "CUCM")]
    cucm: &'a str,
    #[tabled(rename = "IMP")]
    imp: &'a str,
    #[tabled(rename = "CUC")]
    cuc: &'a str,
    #[tabled(rename = "EXP")]
    exp: &'a str,
    #[tabled(rename = "Contract end")]
    contract: &'a str,
    #[tabled(rename = "Status")]
    status: ContractStatus,
}

#[derive(Tabled)]
struct FormRow<'a> {
    #[tabled(rename = "Field")]
    field: &'static str,
    #[tabled(rename = "Value")]
    value: &'a str,
}

/// Renders the customer table with a contract status column.
pub fn render_customers(records: &[CustomerRecord], today: Date, warning_days: i64) -> String {
    if records.is_empty() {
        return "No customers stored.".to_string();
    }

    let rows = records.iter().map(|record| CustomerRow {
        name: &record.name,
        number: &record.number,
        cucm: record.cucm_version.as_deref().unwrap_or_default(),
        imp: record.imp_version.as_deref().unwrap_or_default(),
        cuc: record.cuc_version.as_deref().unwrap_or_default(),
        exp: record.exp_version.as_deref().unwrap_or_default(),
        contract: &record.contract_expiry,
        status: ContractStatus::from_stored(&record.contract_expiry, today, warning_days),
    });

    Table::new(rows).with(Style::modern()).to_string()
}

/// Renders the values entered on the add screen.
pub fn render_form(draft: &CustomerDraft) -> String {
    let rows = [
        FormRow {
            field: "name",
            value: &draft.name,
        },
        FormRow {
            field: "number",
            value: &draft.number,
        },
        FormRow {
            field: "cucm",
            value: draft.cucm_version.as_deref().unwrap_or_default(),
        },
        FormRow {
            field: "imp",
            value: draft.imp_version.as_deref().unwrap_or_default(),
        },
        FormRow {
            field: "cuc",
            value: draft.cuc_version.as_deref().unwrap_or_default(),
        },
        FormRow {
            field: "exp",
            value: draft.exp_version.as_deref().unwrap_or_default(),
        },
        FormRow {
            field: "contract",
            value: &draft.contract_expiry,
        },
    ];

    Table::new(rows).with(Style::modern()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn customer_table_shows_status_and_blank_versions() {
        let today = Date::new(2026, 1, 1).unwrap();
        let records = vec![
            CustomerDraft {
                name: "Test AG".into(),
                number: "100".into(),
                exp_version: Some("X14.0.2".into()),
                contract_expiry: "1/10/2025".into(),
                ..CustomerDraft::default()
            }
            .into_record(1),
            CustomerDraft {
                name: "Software-Devs GmbH".into(),
                number: "200".into(),
                contract_expiry: "1/10/2030".into(),
                ..CustomerDraft::default()
            }
            .into_record(2),
        ];

        let table = render_customers(&records, today, 365);
        assert!(table.contains("Contract end"));
        assert!(table.contains("Test AG"));
        assert!(table.contains("X14.0.2"));
        assert!(table.contains("expired"));
        assert!(table.contains("active"));
        assert!(!table.contains("None"));
    }

    #[test]
    fn empty_table_renders_a_notice() {
        let today = Date::new(2026, 1, 1).unwrap();
        assert_eq!(render_customers(&[], today, 365), "No customers stored.");
    }
}
