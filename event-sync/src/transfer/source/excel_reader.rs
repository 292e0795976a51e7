//! Read event rows from a workbook (xlsx, xlsm, xls, ods)

use std::path::Path;

use anyhow::{Context, Result};
use calamine::{Data, ExcelDateTime, Reader, open_workbook_auto};
use chrono::NaiveTime;

use super::unique_headers;
use crate::transfer::{CellValue, SpreadsheetRow};

/// Read rows from `sheet`, or from the first sheet when none is given
pub fn read_excel_rows(path: &Path, sheet: Option<&str>) -> Result<Vec<SpreadsheetRow>> {
    let mut workbook = open_workbook_auto(path)
        .with_context(|| format!("Failed to open Excel file: {}", path.display()))?;

    let sheet_name = match sheet {
        Some(name) => name.to_string(),
        None => workbook
            .sheet_names()
            .first()
            .context("Excel file has no sheets")?
            .clone(),
    };

    let range = workbook
        .worksheet_range(&sheet_name)
        .with_context(|| format!("Failed to read sheet: {}", sheet_name))?;

    // rows() starts at the first used row, which may not be row 1
    let first_row = range.start().map(|(r, _)| r as usize).unwrap_or(0);
    let rows = rows_from_cells(range.rows(), first_row);

    log::debug!(
        "Read {} rows from sheet '{}' of {}",
        rows.len(),
        sheet_name,
        path.display()
    );
    Ok(rows)
}

/// Turn raw cell rows (header first) into keyed rows
fn rows_from_cells<'a>(
    mut cells: impl Iterator<Item = &'a [Data]>,
    first_row: usize,
) -> Vec<SpreadsheetRow> {
    let headers = match cells.next() {
        Some(header) => unique_headers(header.iter().map(|c| c.to_string().trim().to_string())),
        None => return Vec::new(),
    };

    let mut rows = Vec::new();
    for (idx, cells) in cells.enumerate() {
        // header is sheet row first_row + 1, data starts one below it
        let mut row = SpreadsheetRow::new(first_row + idx + 2);

        for (col_idx, cell) in cells.iter().enumerate() {
            let header = headers.get(col_idx).map(|s| s.as_str()).unwrap_or("");
            if header.is_empty() {
                continue;
            }
            row.insert(header, cell_to_value(cell));
        }

        if row.is_empty() {
            continue;
        }
        rows.push(row);
    }
    rows
}

/// Convert an Excel cell to a CellValue
fn cell_to_value(cell: &Data) -> CellValue {
    match cell {
        Data::Empty | Data::Error(_) => CellValue::Absent,
        Data::String(s) if s.is_empty() => CellValue::Absent,
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Float(f) => CellValue::Number(*f),
        Data::Bool(b) => CellValue::Bool(*b),
        Data::DateTime(dt) => CellValue::Text(format_excel_datetime(dt)),
        Data::DateTimeIso(s) => CellValue::Text(s.clone()),
        Data::DurationIso(s) => CellValue::Text(s.clone()),
    }
}

/// Render dates the way the sheet headers ask for them
///
/// Time-only cells become "HH:MM", date-only cells "DD/MM/YY".
fn format_excel_datetime(dt: &ExcelDateTime) -> String {
    if dt.is_duration() {
        let minutes = (dt.as_f64() * 24.0 * 60.0).round() as i64;
        return format!("{}:{:02}", minutes / 60, minutes % 60);
    }

    let Some(naive) = dt.as_datetime() else {
        return dt.as_f64().to_string();
    };

    if dt.as_f64() < 1.0 {
        naive.format("%H:%M").to_string()
    } else if naive.time() == NaiveTime::MIN {
        naive.format("%d/%m/%y").to_string()
    } else {
        naive.format("%d/%m/%y %H:%M").to_string()
    }
}
