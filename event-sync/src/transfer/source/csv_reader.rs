//! Read event rows from a CSV export of the sheet

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};

use super::unique_headers;
use crate::transfer::{CellValue, SpreadsheetRow};

/// Read rows from a CSV file with a header line
pub fn read_csv_rows(path: &Path) -> Result<Vec<SpreadsheetRow>> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("Failed to open CSV file: {}", path.display()))?;
    read_csv_from(file).with_context(|| format!("Failed to parse CSV file: {}", path.display()))
}

/// Every non-empty field is text; numbers are coerced later by the transform
fn read_csv_from<R: Read>(reader: R) -> Result<Vec<SpreadsheetRow>> {
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(reader);

    let headers = unique_headers(
        reader
            .headers()
            .context("Failed to read CSV header")?
            .iter()
            .map(|h| h.trim().to_string()),
    );

    let mut rows = Vec::new();
    for (idx, record) in reader.records().enumerate() {
        let record = record.with_context(|| format!("Row {}: malformed CSV record", idx + 2))?;
        let mut row = SpreadsheetRow::new(idx + 2);

        for (col_idx, field) in record.iter().enumerate() {
            let header = headers.get(col_idx).map(|s| s.as_str()).unwrap_or("");
            if header.is_empty() || field.is_empty() {
                continue;
            }
            row.insert(header, CellValue::text(field));
        }

        if row.is_empty() {
            continue;
        }
        rows.push(row);
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_csv_multiline_rules() {
        let data = "Event Name,Category,Rules,POC name,POC mobile\n\
                    Hack Day,Software,\"1. Be kind\n2. Ship it\",Asha,555\n\
                    ,,,,\n\
                    ,,,Ravi,777\n";

        let rows = read_csv_from(data.as_bytes()).unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].row_number, 2);
        assert_eq!(rows[0].get("Rules"), &CellValue::text("1. Be kind\n2. Ship it"));
        assert!(rows[1].get("Event Name").is_absent());
        assert_eq!(rows[1].get("POC name"), &CellValue::text("Ravi"));
        assert_eq!(rows[1].row_number, 4);
    }

    #[test]
    fn test_repeated_headers_keep_first_column() {
        let data = "Event Name,Category,POC name,POC mobile,POC name,POC mobile\n\
                    Hack Day,Software,Asha,555,Ravi,777\n\
                    ,,,,Meera,888\n";

        let rows = read_csv_from(data.as_bytes()).unwrap();

        assert_eq!(rows[0].get("POC name"), &CellValue::text("Asha"));
        assert_eq!(rows[0].get("POC mobile"), &CellValue::text("555"));
        assert_eq!(rows[0].get("POC name.1"), &CellValue::text("Ravi"));
        assert!(rows[1].get("POC name").is_absent());
        assert_eq!(rows[1].get("POC name.1"), &CellValue::text("Meera"));
    }

    #[test]
    fn test_short_records_are_accepted() {
        let data = "Event Name,Category,Venue\nQuiz Tank,Quiz\n";
        let rows = read_csv_from(data.as_bytes()).unwrap();

        assert_eq!(rows.len(), 1);
        assert!(rows[0].get("Venue").is_absent());
    }

    #[test]
    fn test_read_csv_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("events.csv");
        std::fs::write(&path, "Event Name,Category\nBGMI,Gaming\n").unwrap();

        let rows = read_csv_rows(&path).unwrap();
        assert_eq!(rows[0].get("Category"), &CellValue::text("Gaming"));
    }
}
