//! Spreadsheet cell value representation

use serde::{Deserialize, Serialize};

/// A single cell as seen by the transform
///
/// `Absent` is distinct from an empty string and from zero so that field
/// defaults only kick in when the sheet really has nothing in the cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(tag = "type", content = "value")]
pub enum CellValue {
    /// Empty cell, error cell or missing column
    #[default]
    Absent,
    /// Text cell (dates and times are rendered to text by the loader)
    Text(String),
    /// Numeric cell (Excel stores integers as floats)
    Number(f64),
    /// Boolean cell
    Bool(bool),
}

impl CellValue {
    /// Build a text value
    pub fn text(s: impl Into<String>) -> Self {
        CellValue::Text(s.into())
    }

    /// Check if this value is absent
    pub fn is_absent(&self) -> bool {
        matches!(self, CellValue::Absent)
    }

    /// Absent, or text that is empty after trimming
    pub fn is_blank(&self) -> bool {
        match self {
            CellValue::Absent => true,
            CellValue::Text(s) => s.trim().is_empty(),
            _ => false,
        }
    }

    /// Render the value as text, or None when absent
    ///
    /// Whole numbers render without a trailing ".0" so phone numbers and
    /// prize amounts typed as numbers survive intact.
    pub fn as_text(&self) -> Option<String> {
        match self {
            CellValue::Absent => None,
            CellValue::Text(s) => Some(s.clone()),
            CellValue::Number(f) => {
                if f.fract() == 0.0 && f.is_finite() && f.abs() < i64::MAX as f64 {
                    Some((*f as i64).to_string())
                } else {
                    Some(f.to_string())
                }
            }
            CellValue::Bool(b) => Some(b.to_string()),
        }
    }

    /// Trimmed text, empty string when absent
    pub fn trimmed(&self) -> String {
        self.as_text()
            .map(|s| s.trim().to_string())
            .unwrap_or_default()
    }
}

impl std::fmt::Display for CellValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.as_text() {
            Some(s) => write!(f, "{}", s),
            None => write!(f, "(absent)"),
        }
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

impl From<f64> for CellValue {
    fn from(f: f64) -> Self {
        CellValue::Number(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_detection() {
        assert!(CellValue::Absent.is_blank());
        assert!(CellValue::text("   ").is_blank());
        assert!(!CellValue::text("x").is_blank());
        assert!(!CellValue::Number(0.0).is_blank());
    }

    #[test]
    fn test_whole_numbers_render_without_fraction() {
        assert_eq!(
            CellValue::Number(9876543210.0).as_text(),
            Some("9876543210".to_string())
        );
        assert_eq!(CellValue::Number(2.5).as_text(), Some("2.5".to_string()));
        assert_eq!(CellValue::Absent.as_text(), None);
    }

    #[test]
    fn test_trimmed_defaults_to_empty() {
        assert_eq!(CellValue::Absent.trimmed(), "");
        assert_eq!(CellValue::text("  Venue A \n").trimmed(), "Venue A");
    }
}
