//! Warnings raised while transforming rows

/// A rejected value or dropped record
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// Event-start row whose category is not in the allowed set; the event
    /// and any POC rows up to the next event-start row are dropped
    InvalidCategory {
        row: usize,
        event_name: String,
        category: String,
    },
    /// Banner that does not point at the allowed image host; replaced by ""
    InvalidBanner { row: usize, url: String },
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Diagnostic::InvalidCategory {
                row,
                event_name,
                category,
            } => write!(
                f,
                "Row {}: invalid category '{}' for '{}', skipping",
                row, category, event_name
            ),
            Diagnostic::InvalidBanner { row, url } => {
                write!(f, "Row {}: invalid banner URL: {}", row, url)
            }
        }
    }
}

/// Receiver for transform diagnostics
pub trait DiagnosticSink {
    fn emit(&mut self, diagnostic: Diagnostic);
}

impl DiagnosticSink for Vec<Diagnostic> {
    fn emit(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}
