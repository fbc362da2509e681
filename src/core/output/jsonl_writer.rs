//! JSON Lines (JSONL) output writer.

use std::fs::File;
use std::io::{BufWriter, Write};

use super::ExportRow;
use crate::error::ChatstatError;
use crate::record::RecordTable;

/// Writes the table to JSONL (JSON Lines) format.
///
/// Each line is one record as a compact JSON object:
/// ```jsonl
/// {"timestamp":"2024-03-05 21:15","year":2024,...,"sender":"Alice","text":"hi\n"}
/// {"timestamp":"2024-03-05 21:16","year":2024,...,"sender":"Bob","text":"yo\n"}
/// ```
pub fn write_jsonl(table: &RecordTable, output_path: &str) -> Result<(), ChatstatError> {
    let file = File::create(output_path)?;
    let mut writer = BufWriter::new(file);
    write_lines(table, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Converts the table to a JSONL string.
///
/// Same format as [`write_jsonl`], but returns a String instead of writing to
/// a file.
pub fn to_jsonl(table: &RecordTable) -> Result<String, ChatstatError> {
    let mut buffer = Vec::new();
    write_lines(table, &mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}

fn write_lines<W: Write>(table: &RecordTable, out: &mut W) -> Result<(), ChatstatError> {
    for record in table {
        let line = serde_json::to_string(&ExportRow::from_record(record))?;
        writeln!(out, "{line}")?;
    }
    Ok(())
}
