use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Every variable has a default, so an empty environment yields a usable config.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let env = parse_environment(&or_default("PARLWATCH_ENV", "development"))?;
    let log_level = or_default("PARLWATCH_LOG_LEVEL", "info");
    let data_dir = PathBuf::from(or_default("PARLWATCH_DATA_DIR", "./data"));
    let watchlist_path = PathBuf::from(or_default(
        "PARLWATCH_WATCHLIST_PATH",
        "./config/watchlist.yaml",
    ));

    let posts_per_outlet = parse_usize("PARLWATCH_POSTS_PER_OUTLET", "10")?;

    let seed = match lookup("PARLWATCH_SEED") {
        Ok(raw) => Some(
            raw.parse::<u64>()
                .map_err(|e| ConfigError::InvalidEnvVar {
                    var: "PARLWATCH_SEED".to_string(),
                    reason: e.to_string(),
                })?,
        ),
        Err(_) => None,
    };

    Ok(AppConfig {
        env,
        log_level,
        data_dir,
        watchlist_path,
        posts_per_outlet,
        seed,
    })
}

/// Parse a string into an `Environment` variant.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "PARLWATCH_ENV".to_string(),
            reason: format!("unknown environment '{other}'"),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
