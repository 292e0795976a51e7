//! Row-to-event transform
//!
//! Rows come in sheet order. A row with a non-blank event name opens a new
//! event; POC columns on that row and on every following row attach to the
//! open event until the next event-start row.

use crate::transfer::{Event, PointOfContact, SpreadsheetRow, TransformConfig};

use super::coerce::{coerce_amount, coerce_count};
use super::diagnostics::{Diagnostic, DiagnosticSink};
use super::text::{clean_rules, split_clubs, validate_banner};

/// Transform engine for turning sheet rows into event documents
#[derive(Debug, Clone, Default)]
pub struct EventTransformer {
    config: TransformConfig,
}

impl EventTransformer {
    pub fn new(config: TransformConfig) -> Self {
        Self { config }
    }

    /// Group rows into events
    ///
    /// Never fails. Invalid categories drop the event (and its trailing POC
    /// rows); rejected banners are blanked. Both are reported to `sink`.
    pub fn transform(&self, rows: &[SpreadsheetRow], sink: &mut dyn DiagnosticSink) -> Vec<Event> {
        let cols = &self.config.columns;
        let mut events = Vec::new();
        let mut current: Option<Event> = None;

        for row in rows {
            if let Some(event_name) = self.event_name(row) {
                if let Some(finished) = current.take() {
                    events.push(finished);
                }

                let category = row.get(&cols.category).trimmed();
                if !self.config.is_allowed_category(&category) {
                    sink.emit(Diagnostic::InvalidCategory {
                        row: row.row_number,
                        event_name,
                        category,
                    });
                    continue;
                }

                log::debug!("Row {}: starting event '{}'", row.row_number, event_name);
                current = Some(self.build_event(row, event_name, category, sink));
            }

            if let Some(event) = current.as_mut() {
                if let Some(poc) = self.point_of_contact(row) {
                    event.add_poc(poc);
                }
            }
        }

        events.extend(current);
        events
    }

    /// Trimmed event name if this row starts a new event
    fn event_name(&self, row: &SpreadsheetRow) -> Option<String> {
        let name = row.get(&self.config.columns.event_name).trimmed();
        (!name.is_empty()).then_some(name)
    }

    fn build_event(
        &self,
        row: &SpreadsheetRow,
        event_name: String,
        category: String,
        sink: &mut dyn DiagnosticSink,
    ) -> Event {
        let cols = &self.config.columns;
        let mut event = Event::new(event_name, category);

        event.date = row.get(&cols.date).trimmed();
        event.time = row.get(&cols.time).trimmed();
        event.duration = row.get(&cols.duration).trimmed();
        event.venue = row.get(&cols.venue).trimmed();
        event.description = row.get(&cols.description).trimmed();
        event.doc = row.get(&cols.rulebook).trimmed();
        event.banner = validate_banner(
            row.get(&cols.banner),
            &self.config.banner_prefix,
            row.row_number,
            sink,
        );

        if let Some(rules) = row.get(&cols.rules).as_text() {
            event.rules = clean_rules(&rules);
        }
        if let Some(clubs) = row.get(&cols.clubs).as_text() {
            event.clubs = split_clubs(&clubs);
        }

        let min_members = coerce_count(row.get(&cols.min_members), 1);
        let max_members = coerce_count(row.get(&cols.max_members), min_members);
        event.set_team_size(min_members, max_members);
        event.set_fees(coerce_amount(row.get(&cols.fees), 0.0));

        let prize_pool = row.get(&cols.prize_pool).trimmed();
        event.prize_pool = if prize_pool.is_empty() {
            self.config.prize_pool_placeholder.clone()
        } else {
            prize_pool
        };

        event
    }

    fn point_of_contact(&self, row: &SpreadsheetRow) -> Option<PointOfContact> {
        let cols = &self.config.columns;
        let name = row.get(&cols.poc_name).trimmed();
        if name.is_empty() {
            return None;
        }
        Some(PointOfContact::new(name, row.get(&cols.poc_mobile).trimmed()))
    }
}
