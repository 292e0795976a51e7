//! Event documents produced by the transform

use serde::{Deserialize, Serialize};

/// Point of contact listed under an event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointOfContact {
    pub name: String,
    pub mobile: String,
}

impl PointOfContact {
    pub fn new(name: impl Into<String>, mobile: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            mobile: mobile.into(),
        }
    }
}

/// Event document as written to the events collection
///
/// Only fields owned by the spreadsheet live here. `registrations` and
/// `isActive` are initialised by the writer on first insert and must never
/// appear in this struct, otherwise an update would reset them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Upsert key
    pub event_name: String,
    pub category: String,
    pub date: String,
    pub time: String,
    pub duration: String,
    pub venue: String,
    pub description: String,
    /// Validated banner URL or empty
    pub banner: String,
    /// Rulebook link
    pub doc: String,
    pub rules: Vec<String>,
    pub clubs: Vec<String>,
    pub is_team_event: bool,
    /// Stored as BSON int32, like the documents the web app already holds
    pub min_members_per_team: i32,
    pub max_members_per_team: i32,
    pub is_paid_event: bool,
    pub fees: f64,
    pub prize_pool: String,
    pub is_food_provided: bool,
    pub max_food_servings_per_participant: i32,
    pub pocs: Vec<PointOfContact>,
}

impl Event {
    /// Create an event with every optional field at its default
    pub fn new(event_name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            event_name: event_name.into(),
            category: category.into(),
            date: String::new(),
            time: String::new(),
            duration: String::new(),
            venue: String::new(),
            description: String::new(),
            banner: String::new(),
            doc: String::new(),
            rules: Vec::new(),
            clubs: Vec::new(),
            is_team_event: false,
            min_members_per_team: 1,
            max_members_per_team: 1,
            is_paid_event: false,
            fees: 0.0,
            prize_pool: String::new(),
            is_food_provided: false,
            max_food_servings_per_participant: 1,
            pocs: Vec::new(),
        }
    }

    /// Set team size bounds and the derived team flag
    pub fn set_team_size(&mut self, min: i32, max: i32) {
        self.min_members_per_team = min;
        self.max_members_per_team = max;
        self.is_team_event = max > 1;
    }

    /// Set the entry fee and the derived paid flag
    pub fn set_fees(&mut self, fees: f64) {
        self.fees = fees;
        self.is_paid_event = fees > 0.0;
    }

    /// Attach a point of contact
    pub fn add_poc(&mut self, poc: PointOfContact) {
        self.pocs.push(poc);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_flags() {
        let mut event = Event::new("Robo War", "Hardware");
        event.set_team_size(1, 4);
        event.set_fees(0.0);
        assert!(event.is_team_event);
        assert!(!event.is_paid_event);

        event.set_team_size(1, 1);
        event.set_fees(150.0);
        assert!(!event.is_team_event);
        assert!(event.is_paid_event);
    }

    #[test]
    fn test_serializes_camel_case_without_writer_fields() {
        let event = Event::new("Hack Day", "Software");
        let json = serde_json::to_value(&event).unwrap();
        let obj = json.as_object().unwrap();

        assert_eq!(obj["eventName"], "Hack Day");
        assert_eq!(obj["minMembersPerTeam"], 1);
        assert!(obj.contains_key("maxFoodServingsPerParticipant"));
        assert!(!obj.contains_key("registrations"));
        assert!(!obj.contains_key("isActive"));
    }
}
