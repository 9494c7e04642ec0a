//! Shared configuration and domain enums for parlwatch.

pub mod app_config;
pub mod channel;
pub mod config;
pub mod watchlist;

pub use app_config::{AppConfig, Environment};
pub use channel::{Channel, Priority};
pub use config::{load_app_config, load_app_config_from_env};
pub use watchlist::{
    load_watchlist, parse_watchlist, AlertThresholds, EngagementRule, TrendSettings, WatchlistFile,
    MAX_LOOKBACK_DAYS,
};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read watchlist file {path}: {source}")]
    WatchlistFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse watchlist file: {0}")]
    WatchlistFileParse(#[from] serde_yaml::Error),

    #[error("watchlist validation failed: {0}")]
    Validation(String),
}
