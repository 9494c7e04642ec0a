use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::channel::{Channel, Priority};
use crate::ConfigError;

/// Rule for flagging a single record whose reply count is unusually high.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngagementRule {
    pub channel: Channel,
    /// Alert fires when the reply count is strictly greater than this.
    pub min_replies: usize,
    pub priority: Priority,
}

/// Thresholds used by the alert generator.
///
/// Every `*_min_mentions` value is an exclusive lower bound: an entity with
/// exactly that many mentions does not qualify.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlertThresholds {
    pub negative_below: f64,
    pub negative_min_mentions: u64,
    pub drop_margin: f64,
    pub drop_min_mentions: u64,
    pub positive_above: f64,
    pub positive_min_mentions: u64,
    pub engagement: Vec<EngagementRule>,
}

impl Default for AlertThresholds {
    fn default() -> Self {
        Self {
            negative_below: 0.4,
            negative_min_mentions: 10,
            drop_margin: 0.15,
            drop_min_mentions: 5,
            positive_above: 0.7,
            positive_min_mentions: 10,
            engagement: vec![
                EngagementRule {
                    channel: Channel::Facebook,
                    min_replies: 120,
                    priority: Priority::Medium,
                },
                EngagementRule {
                    channel: Channel::Twitter,
                    min_replies: 25,
                    priority: Priority::Low,
                },
            ],
        }
    }
}

/// Longest trend series a watchlist may request.
pub const MAX_LOOKBACK_DAYS: u32 = 366;

/// Shape of the synthesized trend series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrendSettings {
    pub lookback_days: u32,
    pub top_topics: usize,
}

impl Default for TrendSettings {
    fn default() -> Self {
        Self {
            lookback_days: 7,
            top_topics: 5,
        }
    }
}

/// The monitored entities and topics, plus the thresholds applied to them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WatchlistFile {
    pub entities: Vec<String>,
    pub topics: Vec<String>,
    #[serde(default)]
    pub alerts: AlertThresholds,
    #[serde(default)]
    pub trend: TrendSettings,
}

/// Load and validate the watchlist from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_watchlist(path: &Path) -> Result<WatchlistFile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::WatchlistFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    parse_watchlist(&content)
}

/// Parse and validate watchlist YAML already in memory.
///
/// # Errors
///
/// Returns `ConfigError` if the YAML is malformed or fails validation.
pub fn parse_watchlist(content: &str) -> Result<WatchlistFile, ConfigError> {
    let watchlist: WatchlistFile = serde_yaml::from_str(content)?;
    validate_watchlist(&watchlist)?;
    Ok(watchlist)
}

fn validate_names(kind: &str, names: &[String]) -> Result<(), ConfigError> {
    if names.is_empty() {
        return Err(ConfigError::Validation(format!(
            "watchlist must list at least one {kind}"
        )));
    }

    let mut seen = HashSet::new();
    for name in names {
        if name.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "{kind} name must be non-empty"
            )));
        }
        // Names are matched case-sensitively against reply text, so
        // duplicates are exact-match only.
        if !seen.insert(name.as_str()) {
            return Err(ConfigError::Validation(format!(
                "duplicate {kind} name: '{name}'"
            )));
        }
    }

    Ok(())
}

fn validate_watchlist(watchlist: &WatchlistFile) -> Result<(), ConfigError> {
    validate_names("entity", &watchlist.entities)?;
    validate_names("topic", &watchlist.topics)?;

    let alerts = &watchlist.alerts;
    for (field, value) in [
        ("negative_below", alerts.negative_below),
        ("drop_margin", alerts.drop_margin),
        ("positive_above", alerts.positive_above),
    ] {
        if !(0.0..=1.0).contains(&value) {
            return Err(ConfigError::Validation(format!(
                "alerts.{field} is {value}; must be within [0, 1]"
            )));
        }
    }

    let mut rule_channels = HashSet::new();
    for rule in &alerts.engagement {
        if !rule_channels.insert(rule.channel) {
            return Err(ConfigError::Validation(format!(
                "duplicate engagement rule for channel '{}'",
                rule.channel
            )));
        }
    }

    let lookback = watchlist.trend.lookback_days;
    if !(1..=MAX_LOOKBACK_DAYS).contains(&lookback) {
        return Err(ConfigError::Validation(format!(
            "trend.lookback_days is {lookback}; must be within [1, {MAX_LOOKBACK_DAYS}]"
        )));
    }

    Ok(())
}

#[cfg(test)]
#[path = "watchlist_test.rs"]
mod tests;
