use serde::Deserialize;
use std::path::PathBuf;

/// The root configuration structure for the entire application.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub analytics: AnalyticsSettings,
    #[serde(default)]
    pub logging: Logging,
}

/// How the engine treats the order of the incoming trade history.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "snake_case")]
pub enum TradeOrdering {
    /// Trust the caller: the history is already chronological.
    #[default]
    AsGiven,
    /// Sort by trade date and time before the order-dependent metrics.
    Chronological,
}

/// Parameters for the performance analytics engine.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AnalyticsSettings {
    pub ordering: TradeOrdering,
    /// How many entries `mostUsedTags` keeps.
    pub most_used_tags_limit: usize,
    /// How many entries `mostProfitableTags` keeps.
    pub most_profitable_tags_limit: usize,
}

impl Default for AnalyticsSettings {
    fn default() -> Self {
        Self {
            ordering: TradeOrdering::AsGiven,
            most_used_tags_limit: 10,
            most_profitable_tags_limit: 5,
        }
    }
}

/// Where and how verbosely the application logs.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Logging {
    /// A `tracing` filter directive, e.g. "info" or "analytics=debug".
    pub level: String,
    /// When set, logs are also written to daily-rolling files in this directory.
    pub directory: Option<PathBuf>,
}

impl Default for Logging {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            directory: None,
        }
    }
}
