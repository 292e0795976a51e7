//! Transform configuration

use serde::{Deserialize, Serialize};

/// Categories accepted when no config file overrides them
pub const DEFAULT_CATEGORIES: &[&str] = &[
    "Software",
    "Hardware",
    "Entrepreneurship",
    "Quiz",
    "Gaming",
    "Design and Prototyping",
];

/// Only images hosted here are accepted as banners
pub const DEFAULT_BANNER_PREFIX: &str = "https://res.cloudinary.com/";

pub const DEFAULT_PRIZE_POOL: &str = "TBD";

/// Settings that drive the row-to-event transform
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransformConfig {
    /// Exact (case-sensitive) category names an event may use
    pub allowed_categories: Vec<String>,
    /// Required prefix for banner URLs
    pub banner_prefix: String,
    /// Prize pool text used when the cell is blank
    pub prize_pool_placeholder: String,
    /// Header names of the source sheet
    pub columns: ColumnNames,
}

impl Default for TransformConfig {
    fn default() -> Self {
        Self {
            allowed_categories: DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect(),
            banner_prefix: DEFAULT_BANNER_PREFIX.to_string(),
            prize_pool_placeholder: DEFAULT_PRIZE_POOL.to_string(),
            columns: ColumnNames::default(),
        }
    }
}

impl TransformConfig {
    /// Check a trimmed category against the allowed set
    pub fn is_allowed_category(&self, category: &str) -> bool {
        self.allowed_categories.iter().any(|c| c == category)
    }
}

/// Header names, one per event field read from the sheet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnNames {
    pub event_name: String,
    pub category: String,
    pub date: String,
    pub time: String,
    pub duration: String,
    pub venue: String,
    pub description: String,
    pub banner: String,
    pub rulebook: String,
    pub rules: String,
    pub clubs: String,
    pub min_members: String,
    pub max_members: String,
    pub fees: String,
    pub prize_pool: String,
    pub poc_name: String,
    pub poc_mobile: String,
}

impl Default for ColumnNames {
    fn default() -> Self {
        Self {
            event_name: "Event Name".to_string(),
            category: "Category".to_string(),
            date: "Date (DD/MM/YY)".to_string(),
            time: "Time (hh:mm)".to_string(),
            duration: "Duration".to_string(),
            venue: "Venue".to_string(),
            description: "Description".to_string(),
            banner: "Banner".to_string(),
            rulebook: "Rulebook Link".to_string(),
            rules: "Rules".to_string(),
            clubs: "Club".to_string(),
            min_members: "Minimum members per team".to_string(),
            max_members: "Maximum members per team".to_string(),
            fees: "Fees".to_string(),
            prize_pool: "Prize Pool".to_string(),
            poc_name: "POC name".to_string(),
            poc_mobile: "POC mobile".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_categories() {
        let config = TransformConfig::default();
        assert!(config.is_allowed_category("Design and Prototyping"));
        assert!(config.is_allowed_category("Quiz"));
        assert!(!config.is_allowed_category("quiz"));
        assert!(!config.is_allowed_category(""));
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: TransformConfig = toml::from_str(
            r#"
            allowed_categories = ["Workshop"]

            [columns]
            event_name = "Name"
            "#,
        )
        .unwrap();

        assert_eq!(config.allowed_categories, vec!["Workshop".to_string()]);
        assert_eq!(config.banner_prefix, DEFAULT_BANNER_PREFIX);
        assert_eq!(config.columns.event_name, "Name");
        assert_eq!(config.columns.poc_name, "POC name");
    }
}
