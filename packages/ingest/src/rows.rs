//! Header-keyed CSV row reading.

use std::path::Path;

use road_collisions_source_models::{RawRow, RawValue};

use crate::IngestError;

/// Reads `path` as CSV with a header row and calls `on_row` for each data
/// row, keyed by the trimmed header names. Cells are typed with
/// [`RawValue::from_cell`]; cells missing from short rows are
/// [`RawValue::Missing`].
///
/// The header row must name every column in `required`; the check runs
/// once, before any row is read. Rows the CSV reader cannot parse are logged
/// and skipped. Returns the number of rows passed to `on_row`.
///
/// # Errors
///
/// Returns [`IngestError::Csv`] if the file cannot be opened or its header
/// row cannot be read, and [`IngestError::MissingColumns`] if the header
/// lacks a required column.
pub fn read_rows(
    path: &Path,
    required: &[&str],
    mut on_row: impl FnMut(RawRow),
) -> Result<u64, IngestError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .map_err(|e| IngestError::Csv {
            path: path.display().to_string(),
            source: e,
        })?;

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| IngestError::Csv {
            path: path.display().to_string(),
            source: e,
        })?
        .iter()
        .map(|h| h.trim_start_matches('\u{feff}').trim().to_owned())
        .collect();

    let missing: Vec<String> = required
        .iter()
        .filter(|column| !headers.iter().any(|header| header == *column))
        .map(|column| (*column).to_owned())
        .collect();
    if !missing.is_empty() {
        return Err(IngestError::MissingColumns {
            path: path.display().to_string(),
            columns: missing,
        });
    }

    let mut count = 0u64;
    for result in reader.records() {
        let record = match result {
            Ok(r) => r,
            Err(e) => {
                log::warn!("Skipping malformed row in {}: {e}", path.display());
                continue;
            }
        };

        let row: RawRow = headers
            .iter()
            .enumerate()
            .map(|(i, header)| {
                let value = record.get(i).map_or(RawValue::Missing, RawValue::from_cell);
                (header.clone(), value)
            })
            .collect();

        on_row(row);
        count += 1;
    }

    Ok(count)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use crate::test_support::scratch_dir;

    #[test]
    fn rows_are_keyed_by_trimmed_headers() {
        let tmp = scratch_dir("rows_headers");
        let path = tmp.join("ca.csv");
        fs::write(&path, " C_YEAR ,C_MNTH,P_SEX\n2017,03,F\n2016,UU\n").unwrap();

        let mut rows = Vec::new();
        let count = read_rows(&path, &["C_YEAR"], |row| rows.push(row)).unwrap();

        assert_eq!(count, 2);
        assert_eq!(rows[0].get("C_YEAR"), Some(&RawValue::Int(2017)));
        assert_eq!(rows[0].get("C_MNTH"), Some(&RawValue::Int(3)));
        assert_eq!(rows[0].get("P_SEX"), Some(&RawValue::from("F")));
        assert_eq!(rows[1].get("C_MNTH"), Some(&RawValue::from("UU")));
        assert_eq!(rows[1].get("P_SEX"), Some(&RawValue::Missing));

        let _ = fs::remove_dir_all(&tmp);
    }

    #[test]
    fn missing_required_columns_fail_before_any_row() {
        let tmp = scratch_dir("rows_missing_columns");
        let path = tmp.join("old.csv");
        fs::write(&path, "C_YEAR,C_MNTH\n2017,03\n2017,04\n").unwrap();

        let mut seen = 0;
        let result = read_rows(&path, &["C_YEAR", "C_CASE", "P_USER"], |_| seen += 1);

        match result {
            Err(IngestError::MissingColumns { columns, .. }) => {
                assert_eq!(columns, ["C_CASE", "P_USER"]);
            }
            other => panic!("expected missing columns, got {other:?}"),
        }
        assert_eq!(seen, 0);

        let _ = fs::remove_dir_all(&tmp);
    }

    #[test]
    fn header_only_files_have_no_rows() {
        let tmp = scratch_dir("rows_header_only");
        let path = tmp.join("empty.csv");
        fs::write(&path, "C_YEAR,C_MNTH\n").unwrap();

        assert_eq!(read_rows(&path, &[], |_| panic!("no rows expected")).unwrap(), 0);

        let _ = fs::remove_dir_all(&tmp);
    }

    #[test]
    fn missing_files_are_csv_errors() {
        let tmp = scratch_dir("rows_missing");
        assert!(matches!(
            read_rows(&tmp.join("nope.csv"), &[], |_| {}),
            Err(IngestError::Csv { .. })
        ));
        let _ = fs::remove_dir_all(&tmp);
    }
}
