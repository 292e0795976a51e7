//! Total numeric conversions for cell values
//!
//! None of these fail: anything that does not convert cleanly yields the
//! caller's default.

use crate::transfer::CellValue;

/// Convert to an integer, truncating numbers toward zero
///
/// Text must hold a plain integer ("3", " 12 "); "2.5" in a text cell is
/// treated as unparseable rather than truncated.
pub fn coerce_int(value: &CellValue, default: i64) -> i64 {
    match value {
        CellValue::Absent => default,
        CellValue::Number(f) => {
            if f.is_finite() && *f >= i64::MIN as f64 && *f <= i64::MAX as f64 {
                f.trunc() as i64
            } else {
                default
            }
        }
        CellValue::Text(s) => s.trim().parse().unwrap_or(default),
        CellValue::Bool(b) => *b as i64,
    }
}

/// Convert to a float
pub fn coerce_float(value: &CellValue, default: f64) -> f64 {
    let parsed = match value {
        CellValue::Absent => None,
        CellValue::Number(f) => Some(*f),
        CellValue::Text(s) => s.trim().parse::<f64>().ok(),
        CellValue::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
    };
    parsed.filter(|f| f.is_finite()).unwrap_or(default)
}

/// Convert to a non-negative count (team sizes) that fits a BSON int32
pub fn coerce_count(value: &CellValue, default: i32) -> i32 {
    let n = coerce_int(value, -1);
    i32::try_from(n).ok().filter(|n| *n >= 0).unwrap_or(default)
}

/// Convert to a non-negative amount (fees)
pub fn coerce_amount(value: &CellValue, default: f64) -> f64 {
    let f = coerce_float(value, f64::NAN);
    if f.is_nan() || f < 0.0 { default } else { f }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coerce_int() {
        assert_eq!(coerce_int(&CellValue::Absent, 1), 1);
        assert_eq!(coerce_int(&CellValue::Number(4.0), 1), 4);
        assert_eq!(coerce_int(&CellValue::Number(3.9), 1), 3);
        assert_eq!(coerce_int(&CellValue::Number(-2.7), 1), -2);
        assert_eq!(coerce_int(&CellValue::text(" 12 "), 1), 12);
        assert_eq!(coerce_int(&CellValue::text("2.5"), 1), 1);
        assert_eq!(coerce_int(&CellValue::text("two"), 7), 7);
        assert_eq!(coerce_int(&CellValue::Number(f64::NAN), 5), 5);
    }

    #[test]
    fn test_coerce_float() {
        assert_eq!(coerce_float(&CellValue::Absent, 0.0), 0.0);
        assert_eq!(coerce_float(&CellValue::Number(150.5), 0.0), 150.5);
        assert_eq!(coerce_float(&CellValue::text("200"), 0.0), 200.0);
        assert_eq!(coerce_float(&CellValue::text("free"), 0.0), 0.0);
        assert_eq!(coerce_float(&CellValue::text("inf"), 3.0), 3.0);
    }

    #[test]
    fn test_coerce_count_rejects_negative() {
        assert_eq!(coerce_count(&CellValue::Number(4.0), 1), 4);
        assert_eq!(coerce_count(&CellValue::Number(0.0), 1), 0);
        assert_eq!(coerce_count(&CellValue::Number(-1.0), 1), 1);
        assert_eq!(coerce_count(&CellValue::text("abc"), 2), 2);
        assert_eq!(coerce_count(&CellValue::Number(3_000_000_000.0), 1), 1);
    }

    #[test]
    fn test_coerce_amount_rejects_negative() {
        assert_eq!(coerce_amount(&CellValue::Number(-50.0), 0.0), 0.0);
        assert_eq!(coerce_amount(&CellValue::Number(99.0), 0.0), 99.0);
        assert_eq!(coerce_amount(&CellValue::Absent, 0.0), 0.0);
    }
}
