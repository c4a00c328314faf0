//! File system helpers
//!
//! Loading and saving of header-first CSV tables, shared by the customer
//! store and the credential table.

use log::{debug, warn};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use crate::error::StoreError;

/// Check if file exists
pub fn file_exists(path: &Path) -> bool {
    path.exists() && path.is_file()
}

/// Loads a table, treating any failure as an empty table.
pub fn load_table<T: DeserializeOwned>(path: &Path) -> Vec<T> {
    match try_load_table(path) {
        Ok(rows) => {
            debug!("Loaded {} rows from {}", rows.len(), path.display());
            rows
        }
        Err(e) => {
            warn!("Treating {} as empty: {}", path.display(), e);
            Vec::new()
        }
    }
}

fn try_load_table<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, csv::Error> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)?;

    reader.deserialize().collect()
}

/// Loads a table row by row, skipping rows that fail to decode.
///
/// A missing or unreadable file still yields an empty table.
pub fn load_valid_rows<T: DeserializeOwned>(path: &Path) -> Vec<T> {
    let mut reader = match csv::ReaderBuilder::new().has_headers(true).from_path(path) {
        Ok(reader) => reader,
        Err(e) => {
            warn!("Treating {} as empty: {}", path.display(), e);
            return Vec::new();
        }
    };

    let rows: Vec<T> = reader
        .deserialize()
        .enumerate()
        .filter_map(|(index, row)| match row {
            Ok(row) => Some(row),
            Err(e) => {
                warn!("Skipping row {} of {}: {}", index + 1, path.display(), e);
                None
            }
        })
        .collect();
    debug!("Loaded {} rows from {}", rows.len(), path.display());
    rows
}

/// Rewrites an existing file with a header row followed by `rows`.
pub fn rewrite_table<T: Serialize>(
    path: &Path,
    header: &[&str],
    rows: &[T],
) -> Result<(), StoreError> {
    if !file_exists(path) {
        return Err(StoreError::FileMissing(path.to_path_buf()));
    }

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)?;
    writer.write_record(header)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

/// Appends one row to an existing file without touching earlier content.
///
/// An empty file gets the header first.
pub fn append_row<T: Serialize>(path: &Path, header: &[&str], row: &T) -> Result<(), StoreError> {
    if !file_exists(path) {
        return Err(StoreError::FileMissing(path.to_path_buf()));
    }

    let existing = fs::read(path)?;
    let mut file = OpenOptions::new().append(true).open(path)?;
    if existing.last().is_some_and(|byte| *byte != b'\n') {
        file.write_all(b"\n")?;
    }

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(file);
    if existing.is_empty() {
        writer.write_record(header)?;
    }
    writer.serialize(row)?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use tempfile::tempdir;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Row {
        key: String,
        value: Option<String>,
    }

    #[test]
    fn missing_file_loads_as_empty() {
        let dir = tempdir().unwrap();
        let rows: Vec<Row> = load_table(&dir.path().join("absent.csv"));
        assert!(rows.is_empty());
    }

    #[test]
    fn malformed_file_loads_as_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.csv");
        fs::write(&path, "key,value\na,b,c,d\n").unwrap();
        let rows: Vec<Row> = load_table(&path);
        assert!(rows.is_empty());
    }

    #[test]
    fn cells_are_read_verbatim() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("table.csv");
        fs::write(&path, "key,value\n padded , x \n").unwrap();

        let rows: Vec<Row> = load_table(&path);
        assert_eq!(
            rows,
            vec![Row {
                key: " padded ".into(),
                value: Some(" x ".into()),
            }]
        );
    }

    #[test]
    fn valid_rows_survive_a_broken_neighbour() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("table.csv");
        fs::write(&path, "key,value\na,1\nb,2,extra\nc,3\n").unwrap();

        let keys: Vec<String> = load_valid_rows::<Row>(&path)
            .into_iter()
            .map(|row| row.key)
            .collect();
        assert_eq!(keys, vec!["a", "c"]);
        assert!(load_table::<Row>(&path).is_empty());
    }

    #[test]
    fn append_repairs_missing_trailing_newline() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("table.csv");
        fs::write(&path, "key,value\na,1").unwrap();

        let row = Row {
            key: "b".into(),
            value: None,
        };
        append_row(&path, &["key", "value"], &row).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "key,value\na,1\nb,\n");
    }

    #[test]
    fn append_to_empty_file_writes_header() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("table.csv");
        fs::write(&path, "").unwrap();

        let row = Row {
            key: "a".into(),
            value: Some("1".into()),
        };
        append_row(&path, &["key", "value"], &row).unwrap();

        let rows: Vec<Row> = load_table(&path);
        assert_eq!(rows, vec![row]);
    }

    #[test]
    fn writes_refuse_to_create_the_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("absent.csv");
        let rows: Vec<Row> = Vec::new();

        let err = rewrite_table(&path, &["key", "value"], &rows).unwrap_err();
        assert!(err.is_file_missing());
        assert!(!path.exists());
    }
}
