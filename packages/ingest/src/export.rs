//! Writing collections out as JSON, JSON lines or CSV.

use std::io::Write;

use road_collisions_ingest_models::ExportFormat;
use road_collisions_source::Collection;
use road_collisions_source_models::Field;

use crate::IngestError;

/// Writes `collisions` to `writer` in `format`.
///
/// # Errors
///
/// Returns an [`IngestError`] if serialization or the write fails.
pub fn write<W: Write>(
    collisions: &Collection,
    format: ExportFormat,
    writer: W,
) -> Result<(), IngestError> {
    match format {
        ExportFormat::Json => write_json(collisions, writer),
        ExportFormat::JsonLines => write_json_lines(collisions, writer),
        ExportFormat::Csv => write_csv(collisions, writer),
    }
}

/// Writes a pretty-printed JSON array of records.
///
/// # Errors
///
/// Returns an [`IngestError`] if serialization or the write fails.
pub fn write_json<W: Write>(collisions: &Collection, mut writer: W) -> Result<(), IngestError> {
    serde_json::to_writer_pretty(&mut writer, collisions)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

/// Writes one compact JSON object per record per line.
///
/// # Errors
///
/// Returns an [`IngestError`] if serialization or the write fails.
pub fn write_json_lines<W: Write>(
    collisions: &Collection,
    mut writer: W,
) -> Result<(), IngestError> {
    for record in collisions {
        serde_json::to_writer(&mut writer, record)?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;
    Ok(())
}

/// Writes CSV with one column per field. Null values are empty cells.
///
/// # Errors
///
/// Returns an [`IngestError`] if the write fails.
pub fn write_csv<W: Write>(collisions: &Collection, writer: W) -> Result<(), IngestError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(Field::ALL.map(<&'static str>::from))?;

    for record in collisions {
        csv_writer.write_record(Field::ALL.map(|field| record.get(field).to_string()))?;
    }

    csv_writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use road_collisions_source::Record;
    use road_collisions_source_models::{RawRow, RawValue};

    use super::*;
    use crate::test_support::{HEADER, data_row};

    fn sample() -> Collection {
        let columns: Vec<&str> = HEADER.split(',').collect();
        [data_row(2017, "2", "3", 1), data_row(2016, "3", "UU", 2)]
            .iter()
            .map(|line| {
                let row: RawRow = columns
                    .iter()
                    .zip(line.split(','))
                    .map(|(column, cell)| ((*column).to_owned(), RawValue::from_cell(cell)))
                    .collect();
                Record::decode(row).unwrap()
            })
            .collect()
    }

    #[test]
    fn json_is_an_array_of_field_maps() {
        let mut out = Vec::new();
        write(&sample(), ExportFormat::Json, &mut out).unwrap();

        let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
        let records = json.as_array().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0]["c_weather"], "raining");
        assert_eq!(records[0]["c_severity"], "injury");
        assert_eq!(records[1]["c_weather"], serde_json::Value::Null);
        assert_eq!(records[1]["c_severity"], "fatality");
    }

    #[test]
    fn json_lines_has_one_object_per_line() {
        let mut out = Vec::new();
        write(&sample(), ExportFormat::JsonLines, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first["c_year"], 2017);
        assert_eq!(first["p_id"], 1);
    }

    #[test]
    fn csv_has_field_header_and_empty_nulls() {
        let mut out = Vec::new();
        write(&sample(), ExportFormat::Csv, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let mut lines = text.lines();
        let header = lines.next().unwrap();
        assert!(header.starts_with("c_year,c_month,c_weekday,c_hour,c_severity"));
        assert!(header.ends_with(",c_case"));

        let second: Vec<&str> = lines.nth(1).unwrap().split(',').collect();
        assert_eq!(second.len(), Field::ALL.len());
        assert_eq!(second[0], "2016");
        assert_eq!(second[8], "", "undecodable weather exports as an empty cell");
    }
}
