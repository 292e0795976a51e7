//! Team registration limits applied to existing events

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result, bail};

/// Stored for events without a real cap (JavaScript's Number.MAX_SAFE_INTEGER,
/// so the web client can still compare against it)
pub const UNLIMITED_TEAMS: i64 = 9_007_199_254_740_991;

/// Maximum number of teams one event accepts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamLimit {
    pub event_name: String,
    pub team_limit: i64,
}

impl TeamLimit {
    pub fn new(event_name: impl Into<String>, team_limit: i64) -> Self {
        Self {
            event_name: event_name.into(),
            team_limit,
        }
    }
}

/// Parse a limit cell: a non-negative integer, or "max"/"unlimited"
pub fn parse_limit(raw: &str) -> Option<i64> {
    let raw = raw.trim();
    match raw.to_lowercase().as_str() {
        "max" | "unlimited" => Some(UNLIMITED_TEAMS),
        _ => raw
            .parse::<i64>()
            .ok()
            .filter(|n| (0..=UNLIMITED_TEAMS).contains(n)),
    }
}

/// Read limits from a CSV file with `eventName,teamLimit` headers
pub fn read_team_limits(path: &Path) -> Result<Vec<TeamLimit>> {
    if !path.exists() {
        bail!("{} not found", path.display());
    }
    let file = std::fs::File::open(path)
        .with_context(|| format!("Failed to open team limit file: {}", path.display()))?;
    read_team_limits_from(file)
        .with_context(|| format!("Failed to read team limit file: {}", path.display()))
}

fn read_team_limits_from<R: Read>(reader: R) -> Result<Vec<TeamLimit>> {
    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);

    let headers = reader.headers().context("Failed to read header")?.clone();
    let name_col = headers
        .iter()
        .position(|h| h == "eventName")
        .context("Missing 'eventName' column")?;
    let limit_col = headers
        .iter()
        .position(|h| h == "teamLimit")
        .context("Missing 'teamLimit' column")?;

    let mut limits = Vec::new();
    for (idx, record) in reader.records().enumerate() {
        let line = idx + 2;
        let record = record.with_context(|| format!("Line {}: malformed record", line))?;

        let name = record.get(name_col).unwrap_or("");
        if name.is_empty() {
            bail!("Line {}: empty eventName", line);
        }

        let raw_limit = record.get(limit_col).unwrap_or("");
        let Some(team_limit) = parse_limit(raw_limit) else {
            bail!("Line {}: invalid teamLimit '{}' for '{}'", line, raw_limit, name);
        };

        limits.push(TeamLimit::new(name, team_limit));
    }
    Ok(limits)
}
