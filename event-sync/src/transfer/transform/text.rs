//! Free-text field cleanup

use crate::transfer::CellValue;

use super::diagnostics::{Diagnostic, DiagnosticSink};

/// Split a multi-line rules cell into one entry per non-blank line
///
/// A line starting with a digit loses everything up to the first "." so
/// "1. Wear shoes" becomes "Wear shoes". The check is deliberately naive:
/// "2.5x multiplier" becomes "5x multiplier".
pub fn clean_rules(text: &str) -> Vec<String> {
    let mut rules = Vec::new();
    for line in text.split('\n') {
        let mut line = line.trim();
        if line.is_empty() {
            continue;
        }
        let starts_with_digit = line.chars().next().is_some_and(|c| c.is_ascii_digit());
        if starts_with_digit {
            if let Some((_, rest)) = line.split_once('.') {
                line = rest.trim();
            }
        }
        rules.push(line.to_string());
    }
    rules
}

/// Split a comma-separated club list, dropping empty entries
pub fn split_clubs(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(str::to_string)
        .collect()
}

/// Accept a banner URL only if it starts with `prefix`
///
/// Rejections are reported to `sink` and yield an empty string.
pub fn validate_banner(
    value: &CellValue,
    prefix: &str,
    row: usize,
    sink: &mut dyn DiagnosticSink,
) -> String {
    let Some(link) = value.as_text() else {
        return String::new();
    };
    let link = link.trim();
    if link.starts_with(prefix) {
        return link.to_string();
    }
    sink.emit(Diagnostic::InvalidBanner {
        row,
        url: link.to_string(),
    });
    String::new()
}
