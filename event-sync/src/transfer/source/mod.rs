//! Load sheet rows from workbook or CSV files

mod csv_reader;
mod excel_reader;

use std::collections::HashSet;
use std::path::Path;

use anyhow::{Result, bail};

use crate::transfer::SpreadsheetRow;

pub use csv_reader::read_csv_rows;
pub use excel_reader::read_excel_rows;

/// Supported input formats, chosen by file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Workbook,
    Csv,
}

impl SourceFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_lowercase();
        match ext.as_str() {
            "xlsx" | "xlsm" | "xlsb" | "xls" | "ods" => Some(SourceFormat::Workbook),
            "csv" => Some(SourceFormat::Csv),
            _ => None,
        }
    }
}

/// Make repeated header names unique: the first keeps its name, later
/// copies become `Name.1`, `Name.2`, ... Blank headers stay blank.
fn unique_headers(raw: impl IntoIterator<Item = String>) -> Vec<String> {
    let mut seen = HashSet::new();
    raw.into_iter()
        .map(|name| {
            if name.is_empty() {
                return name;
            }
            let mut candidate = name.clone();
            let mut n = 1;
            while !seen.insert(candidate.clone()) {
                candidate = format!("{}.{}", name, n);
                n += 1;
            }
            candidate
        })
        .collect()
}

/// Load all data rows from `path`
///
/// `sheet` selects a worksheet for workbooks and is ignored for CSV.
pub fn load_rows(path: &Path, sheet: Option<&str>) -> Result<Vec<SpreadsheetRow>> {
    if !path.exists() {
        bail!("{} not found", path.display());
    }

    match SourceFormat::from_path(path) {
        Some(SourceFormat::Workbook) => read_excel_rows(path, sheet),
        Some(SourceFormat::Csv) => read_csv_rows(path),
        None => bail!(
            "Unsupported file type: {} (expected .xlsx, .xls, .ods or .csv)",
            path.display()
        ),
    }
}
