//! JSON output writer.

use std::fs::File;
use std::io::Write;

use super::ExportRow;
use crate::error::ChatstatError;
use crate::record::RecordTable;

/// Writes the table to a JSON file as a pretty-printed array.
///
/// # Format
/// ```json
/// [
///   {"timestamp": "2024-03-05 21:15", "year": 2024, ..., "sender": "Alice", "text": "hi\n"}
/// ]
/// ```
pub fn write_json(table: &RecordTable, output_path: &str) -> Result<(), ChatstatError> {
    let json = to_json(table)?;
    let mut file = File::create(output_path)?;
    file.write_all(json.as_bytes())?;
    Ok(())
}

/// Converts the table to a JSON array string.
///
/// Same format as [`write_json`], but returns a String instead of writing to
/// a file.
pub fn to_json(table: &RecordTable) -> Result<String, ChatstatError> {
    let rows: Vec<ExportRow<'_>> = table.iter().map(ExportRow::from_record).collect();
    Ok(serde_json::to_string_pretty(&rows)?)
}
