//! Application-level configuration loading: setup bounds, live match retention and read-back limits.

use std::{env, fs, io::ErrorKind, ops::RangeInclusive, path::PathBuf, time::Duration};

use serde::Deserialize;
use tracing::{info, warn};

/// Default location on disk where the server looks for the JSON configuration.
const DEFAULT_CONFIG_PATH: &str = "config/app.json";
/// Environment variable that overrides [`DEFAULT_CONFIG_PATH`].
const CONFIG_PATH_ENV: &str = "SNOOKER_SCORER_CONFIG_PATH";

const DEFAULT_HISTORY_LIMIT: usize = 10;
const DEFAULT_CENTURY_MIN_PLAYERS: usize = 2;
const DEFAULT_CENTURY_MAX_PLAYERS: usize = 6;
const DEFAULT_LIVE_MATCH_IDLE_TTL_SECS: u64 = 4 * 60 * 60;
const DEFAULT_LIVE_MATCH_SWEEP_INTERVAL_SECS: u64 = 60;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Immutable runtime configuration shared across the application.
pub struct AppConfig {
    history_limit: usize,
    century_players: RangeInclusive<usize>,
    live_match_idle_ttl: Duration,
    live_match_sweep_interval: Duration,
}

impl AppConfig {
    /// Load the application configuration from disk, falling back to built-in defaults.
    pub fn load() -> Self {
        let path = resolve_config_path();
        match fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str::<RawConfig>(&contents) {
                Ok(raw) => {
                    let app_config: Self = raw.into();
                    info!(
                        path = %path.display(),
                        history_limit = app_config.history_limit,
                        century_min_players = app_config.century_players.start(),
                        century_max_players = app_config.century_players.end(),
                        live_match_idle_ttl_secs = app_config.live_match_idle_ttl.as_secs(),
                        "loaded configuration"
                    );
                    app_config
                }
                Err(err) => {
                    warn!(
                        path = %path.display(),
                        error = %err,
                        "failed to parse config; falling back to defaults"
                    );
                    Self::default()
                }
            },
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!(
                    path = %path.display(),
                    "config file not found; using built-in defaults"
                );
                Self::default()
            }
            Err(err) => {
                warn!(
                    path = %path.display(),
                    error = %err,
                    "failed to read config; falling back to defaults"
                );
                Self::default()
            }
        }
    }

    /// Maximum number of records returned by the match history.
    pub fn history_limit(&self) -> usize {
        self.history_limit
    }

    /// Accepted number of players for a Century match.
    pub fn century_players(&self) -> RangeInclusive<usize> {
        self.century_players.clone()
    }

    /// How long a live match may go untouched before it is discarded.
    pub fn live_match_idle_ttl(&self) -> Duration {
        self.live_match_idle_ttl
    }

    /// Period of the idle live match sweep.
    pub fn live_match_sweep_interval(&self) -> Duration {
        self.live_match_sweep_interval
    }

    /// Same configuration with a different idle TTL.
    pub fn with_live_match_idle_ttl(mut self, ttl: Duration) -> Self {
        self.live_match_idle_ttl = ttl;
        self
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            history_limit: DEFAULT_HISTORY_LIMIT,
            century_players: DEFAULT_CENTURY_MIN_PLAYERS..=DEFAULT_CENTURY_MAX_PLAYERS,
            live_match_idle_ttl: Duration::from_secs(DEFAULT_LIVE_MATCH_IDLE_TTL_SECS),
            live_match_sweep_interval: Duration::from_secs(DEFAULT_LIVE_MATCH_SWEEP_INTERVAL_SECS),
        }
    }
}

#[derive(Debug, Deserialize)]
/// JSON representation of the configuration file located at [`DEFAULT_CONFIG_PATH`].
struct RawConfig {
    #[serde(default = "default_history_limit")]
    history_limit: usize,
    #[serde(default = "default_century_min_players")]
    century_min_players: usize,
    #[serde(default = "default_century_max_players")]
    century_max_players: usize,
    #[serde(default = "default_live_match_idle_ttl_secs")]
    live_match_idle_ttl_secs: u64,
    #[serde(default = "default_live_match_sweep_interval_secs")]
    live_match_sweep_interval_secs: u64,
}

impl From<RawConfig> for AppConfig {
    fn from(value: RawConfig) -> Self {
        let min = value.century_min_players.max(1);
        let max = value.century_max_players.max(min);
        if min != value.century_min_players || max != value.century_max_players {
            warn!(
                min = value.century_min_players,
                max = value.century_max_players,
                "inconsistent century player bounds; clamped to {min}..={max}"
            );
        }

        Self {
            history_limit: value.history_limit.max(1),
            century_players: min..=max,
            live_match_idle_ttl: Duration::from_secs(value.live_match_idle_ttl_secs.max(1)),
            live_match_sweep_interval: Duration::from_secs(
                value.live_match_sweep_interval_secs.max(1),
            ),
        }
    }
}

fn default_history_limit() -> usize {
    DEFAULT_HISTORY_LIMIT
}

fn default_century_min_players() -> usize {
    DEFAULT_CENTURY_MIN_PLAYERS
}

fn default_century_max_players() -> usize {
    DEFAULT_CENTURY_MAX_PLAYERS
}

fn default_live_match_idle_ttl_secs() -> u64 {
    DEFAULT_LIVE_MATCH_IDLE_TTL_SECS
}

fn default_live_match_sweep_interval_secs() -> u64 {
    DEFAULT_LIVE_MATCH_SWEEP_INTERVAL_SECS
}

/// Resolve the configuration path taking the environment override into account.
fn resolve_config_path() -> PathBuf {
    env::var_os(CONFIG_PATH_ENV)
        .map(PathBuf::from)
        .filter(|path| !path.as_os_str().is_empty())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_use_defaults() {
        let raw: RawConfig = serde_json::from_str(r#"{ "history_limit": 25 }"#).unwrap();
        let config = AppConfig::from(raw);
        assert_eq!(config.history_limit(), 25);
        assert_eq!(config.century_players(), 2..=6);
        assert_eq!(config.live_match_idle_ttl(), Duration::from_secs(4 * 60 * 60));
        assert_eq!(config.live_match_sweep_interval(), Duration::from_secs(60));
    }

    #[test]
    fn live_match_retention_is_configurable_and_never_zero() {
        let raw: RawConfig = serde_json::from_str(
            r#"{ "live_match_idle_ttl_secs": 900, "live_match_sweep_interval_secs": 0 }"#,
        )
        .unwrap();
        let config = AppConfig::from(raw);
        assert_eq!(config.live_match_idle_ttl(), Duration::from_secs(900));
        assert_eq!(config.live_match_sweep_interval(), Duration::from_secs(1));
    }

    #[test]
    fn inverted_bounds_are_clamped() {
        let raw: RawConfig = serde_json::from_str(
            r#"{ "history_limit": 0, "century_min_players": 5, "century_max_players": 3 }"#,
        )
        .unwrap();
        let config = AppConfig::from(raw);
        assert_eq!(config.history_limit(), 1);
        assert_eq!(config.century_players(), 5..=5);
    }
}
