//! A single spreadsheet row keyed by header name

use std::collections::HashMap;

use super::CellValue;

static ABSENT: CellValue = CellValue::Absent;

/// One data row of the source sheet
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SpreadsheetRow {
    /// 1-based row number in the sheet (header is row 1)
    pub row_number: usize,
    cells: HashMap<String, CellValue>,
}

impl SpreadsheetRow {
    /// Create an empty row
    pub fn new(row_number: usize) -> Self {
        Self {
            row_number,
            cells: HashMap::new(),
        }
    }

    #[cfg(test)]
    pub fn with(mut self, column: impl Into<String>, value: impl Into<CellValue>) -> Self {
        self.insert(column, value);
        self
    }

    /// Set a cell. Absent values are not stored.
    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<CellValue>) {
        let value = value.into();
        if value.is_absent() {
            return;
        }
        self.cells.insert(column.into(), value);
    }

    /// Look up a cell by header name; missing columns read as absent
    pub fn get(&self, column: &str) -> &CellValue {
        self.cells.get(column).unwrap_or(&ABSENT)
    }

    /// True when no cell carries a value
    pub fn is_empty(&self) -> bool {
        self.cells.values().all(|v| v.is_blank())
    }
}
