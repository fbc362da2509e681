//! CSV output writer.

use std::fs::File;
use std::io::Write;

use super::ExportRow;
use crate::error::ChatstatError;
use crate::record::RecordTable;

/// Writes the table to CSV with semicolon delimiter.
///
/// # Format
/// - Delimiter: `;`
/// - Columns: [`COLUMNS`](super::COLUMNS), header row first
/// - Multi-line texts are quoted, line breaks kept
/// - Encoding: UTF-8
pub fn write_csv(table: &RecordTable, output_path: &str) -> Result<(), ChatstatError> {
    let file = File::create(output_path)?;
    write_rows(table, file)
}

/// Converts the table to a CSV string.
///
/// Same format as [`write_csv`], but returns a String instead of writing to
/// a file.
pub fn to_csv(table: &RecordTable) -> Result<String, ChatstatError> {
    let mut buffer = Vec::new();
    write_rows(table, &mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}

fn write_rows<W: Write>(table: &RecordTable, out: W) -> Result<(), ChatstatError> {
    // has_headers(true) emits the header from the first serialized row, which
    // an empty table never produces, so the header is written by hand.
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b';')
        .has_headers(false)
        .from_writer(out);

    writer.write_record(super::COLUMNS)?;
    for record in table {
        writer.serialize(ExportRow::from_record(record))?;
    }

    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse;
    use tempfile::NamedTempFile;

    const EXPORT: &str = "\
05/03/24, 9:15 pm - Alice: hello
05/03/24, 9:16 pm - Bob: two
lines
";

    #[test]
    fn test_to_csv_header_and_rows() {
        let table = parse(EXPORT).unwrap();
        let csv = to_csv(&table).unwrap();

        let mut lines = csv.lines();
        assert_eq!(
            lines.next().unwrap(),
            "timestamp;year;month_number;month_name;day_of_month;weekday_name;calendar_date;hour;minute;sender;text"
        );
        assert!(csv.contains("2024-03-05 21:15;2024;3;March;5;Tuesday;2024-03-05;21;15;Alice;\"hello\n\""));
    }

    #[test]
    fn test_to_csv_multiline_roundtrips_through_reader() {
        let table = parse(EXPORT).unwrap();
        let csv = to_csv(&table).unwrap();

        let mut reader = csv::ReaderBuilder::new()
            .delimiter(b';')
            .from_reader(csv.as_bytes());
        let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();

        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[1][9], "Bob");
        assert_eq!(&rows[1][10], "two\nlines\n");
    }

    #[test]
    fn test_to_csv_empty_table_has_header_only() {
        let csv = to_csv(&RecordTable::default()).unwrap();
        assert_eq!(csv.lines().count(), 1);
        assert!(csv.starts_with("timestamp;"));
    }

    #[test]
    fn test_write_csv() {
        let table = parse(EXPORT).unwrap();

        let temp_file = NamedTempFile::new().unwrap();
        let path = temp_file.path().to_str().unwrap();
        write_csv(&table, path).unwrap();

        let content = std::fs::read_to_string(path).unwrap();
        assert_eq!(content, to_csv(&table).unwrap());
    }
}
