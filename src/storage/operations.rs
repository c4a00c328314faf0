//! Table operations
//!
//! Pure functions over the in-memory customer table: id assignment,
//! duplicate detection and lookup by customer number.

use std::collections::HashSet;

use crate::records::CustomerRecord;

/// Returns the smallest positive id not used by any record.
///
/// Recomputed on every add; nothing is cached between calls.
pub fn next_free_id(records: &[CustomerRecord]) -> u32 {
    let used: HashSet<u32> = records.iter().map(|record| record.id).collect();
    let mut id = 1;
    while used.contains(&id) {
        id += 1;
    }
    id
}

/// Which unique column a new customer collides on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Duplicate {
    Name,
    Number,
    Both,
}

impl Duplicate {
    pub fn message(&self) -> &'static str {
        match self {
            Duplicate::Name => "Customer name already exists!",
            Duplicate::Number => "Customer number already exists!",
            Duplicate::Both => "Customer name and customer number already exist!",
        }
    }
}

/// Checks a name/number pair against every row of the table.
pub fn find_duplicate(records: &[CustomerRecord], name: &str, number: &str) -> Option<Duplicate> {
    let name_used = records.iter().any(|record| record.name == name);
    let number_used = records.iter().any(|record| record.number == number);

    match (name_used, number_used) {
        (true, true) => Some(Duplicate::Both),
        (true, false) => Some(Duplicate::Name),
        (false, true) => Some(Duplicate::Number),
        (false, false) => None,
    }
}

/// Index of the first row with the given customer number.
pub fn position_by_number(records: &[CustomerRecord], number: &str) -> Option<usize> {
    records.iter().position(|record| record.number == number)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::CustomerDraft;

    fn record(id: u32, name: &str, number: &str) -> CustomerRecord {
        CustomerDraft {
            name: name.into(),
            number: number.into(),
            contract_expiry: "1/1/2030".into(),
            ..CustomerDraft::default()
        }
        .into_record(id)
    }

    #[test]
    fn first_id_is_one() {
        assert_eq!(next_free_id(&[]), 1);
    }

    #[test]
    fn fills_the_lowest_gap() {
        let table = vec![record(1, "a", "1"), record(2, "b", "2"), record(4, "d", "4")];
        assert_eq!(next_free_id(&table), 3);

        let table = vec![record(3, "c", "3"), record(1, "a", "1"), record(2, "b", "2")];
        assert_eq!(next_free_id(&table), 4);
    }

    #[test]
    fn reports_which_column_collides() {
        let table = vec![record(1, "Test AG", "100"), record(2, "Other", "200")];

        assert_eq!(find_duplicate(&table, "Test AG", "300"), Some(Duplicate::Name));
        assert_eq!(find_duplicate(&table, "New", "200"), Some(Duplicate::Number));
        assert_eq!(find_duplicate(&table, "Test AG", "200"), Some(Duplicate::Both));
        assert_eq!(find_duplicate(&table, "New", "300"), None);
    }

    #[test]
    fn finds_rows_by_number() {
        let table = vec![record(1, "a", "12345"), record(2, "b", "54321")];
        assert_eq!(position_by_number(&table, "54321"), Some(1));
        assert_eq!(position_by_number(&table, "1"), None);
    }
}
