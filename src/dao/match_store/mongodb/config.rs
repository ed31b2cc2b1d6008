//! Connection settings of the MongoDB match archive.

use std::time::Duration;

use mongodb::options::ClientOptions;

use super::error::{MongoDaoError, MongoResult};

const DEFAULT_DB: &str = "snooker_scorer";

/// Backoff applied while waiting for the archive to answer its first ping.
///
/// The delay doubles after every failed ping and is capped at `max_delay`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConnectRetry {
    /// Pings sent before the connection attempt is abandoned.
    pub max_attempts: u32,
    /// Wait after the first failed ping.
    pub initial_delay: Duration,
    /// Upper bound on a single wait.
    pub max_delay: Duration,
}

impl Default for ConnectRetry {
    fn default() -> Self {
        Self {
            max_attempts: 10,
            initial_delay: Duration::from_millis(250),
            max_delay: Duration::from_secs(5),
        }
    }
}

impl ConnectRetry {
    /// Wait that follows the `failed`-th failed ping (1-based).
    pub fn delay_after(&self, failed: u32) -> Duration {
        let doublings = failed.saturating_sub(1).min(31);
        self.initial_delay
            .saturating_mul(1u32 << doublings)
            .min(self.max_delay)
    }
}

/// Where the match archive lives and how hard to try reaching it.
#[derive(Clone)]
pub struct MongoConfig {
    /// Parsed driver options.
    pub options: ClientOptions,
    /// Database holding the `matches` collection.
    pub database_name: String,
    /// Startup and reconnect backoff.
    pub connect_retry: ConnectRetry,
}

impl MongoConfig {
    /// Parse `uri`; `db_name` falls back to `snooker_scorer`.
    pub async fn from_uri(uri: &str, db_name: Option<&str>) -> MongoResult<Self> {
        let database_name = db_name.unwrap_or(DEFAULT_DB).to_owned();
        let options = ClientOptions::parse(uri)
            .await
            .map_err(|source| MongoDaoError::InvalidUri {
                uri: uri.to_owned(),
                source,
            })?;

        Ok(Self {
            options,
            database_name,
            connect_retry: ConnectRetry::default(),
        })
    }

    /// Replace the connection backoff. A zero attempt count is raised to one.
    pub fn with_connect_retry(mut self, mut retry: ConnectRetry) -> Self {
        retry.max_attempts = retry.max_attempts.max(1);
        self.connect_retry = retry;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backoff_doubles_until_the_cap() {
        let retry = ConnectRetry::default();
        assert_eq!(retry.delay_after(1), Duration::from_millis(250));
        assert_eq!(retry.delay_after(2), Duration::from_millis(500));
        assert_eq!(retry.delay_after(4), Duration::from_secs(2));
        assert_eq!(retry.delay_after(5), Duration::from_secs(4));
        assert_eq!(retry.delay_after(6), Duration::from_secs(5));
        assert_eq!(retry.delay_after(u32::MAX), Duration::from_secs(5));
    }

    #[tokio::test]
    async fn uri_parsing_keeps_the_default_backoff() {
        let config = MongoConfig::from_uri("mongodb://localhost:27017", None)
            .await
            .unwrap();
        assert_eq!(config.database_name, DEFAULT_DB);
        assert_eq!(config.connect_retry, ConnectRetry::default());

        let config = config.with_connect_retry(ConnectRetry {
            max_attempts: 0,
            ..ConnectRetry::default()
        });
        assert_eq!(config.connect_retry.max_attempts, 1);
    }

    #[tokio::test]
    async fn malformed_uri_is_reported_with_the_uri() {
        let err = MongoConfig::from_uri("not-a-uri", Some("x"))
            .await
            .err()
            .unwrap();
        assert!(matches!(err, MongoDaoError::InvalidUri { ref uri, .. } if uri == "not-a-uri"));
    }
}
