//! Configuration Module
//!
//! Handles loading and managing proxy configuration from environment variables.

use std::env;
use std::time::Duration;

/// Channel listed when a request does not name one.
pub const DEFAULT_CHANNEL_ID: &str = "UCCpx-Awdsz14iEAsTDTz3ZQ";

/// Upstream search endpoint.
pub const DEFAULT_SEARCH_ENDPOINT: &str = "https://www.googleapis.com/youtube/v3/search";

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Upstream API key; requests fail with a configuration error without it
    pub api_key: Option<String>,
    /// Channel used when the request omits `channelId`
    pub default_channel_id: Option<String>,
    /// Upstream search endpoint URL
    pub search_endpoint: String,
    /// HTTP server port
    pub server_port: u16,
    /// Cache TTL in seconds
    pub cache_ttl: u64,
    /// Maximum pages fetched per aggregation, None = unbounded
    pub max_pages: Option<usize>,
    /// Per-page request timeout in seconds, None = no client timeout
    pub request_timeout: Option<u64>,
    /// Treat a page without `items` as an error instead of the last page
    pub strict_pages: bool,
    /// Background cleanup task interval in seconds
    pub cleanup_interval: u64,
    /// Allowed CORS origin, `*` for any
    pub cors_origin: String,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `YT_API_KEY` - Upstream API key (no default)
    /// - `DEFAULT_CHANNEL_ID` - Fallback channel (default: built-in channel)
    /// - `SEARCH_ENDPOINT` - Upstream search URL (default: YouTube Data API v3)
    /// - `SERVER_PORT` - HTTP server port (default: 5000)
    /// - `CACHE_TTL` - Cache TTL in seconds (default: 600)
    /// - `MAX_PAGES` - Pagination cap, 0 disables it (default: 20)
    /// - `REQUEST_TIMEOUT` - Per-page timeout in seconds (default: none)
    /// - `STRICT_PAGES` - Missing `items` is an error (default: false)
    /// - `CLEANUP_INTERVAL` - Cleanup frequency in seconds (default: 60)
    /// - `CORS_ORIGIN` - Allowed origin (default: `*`)
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            api_key: non_empty_var("YT_API_KEY"),
            default_channel_id: non_empty_var("DEFAULT_CHANNEL_ID")
                .or(defaults.default_channel_id),
            search_endpoint: non_empty_var("SEARCH_ENDPOINT").unwrap_or(defaults.search_endpoint),
            server_port: parsed_var("SERVER_PORT").unwrap_or(defaults.server_port),
            cache_ttl: parsed_var("CACHE_TTL").unwrap_or(defaults.cache_ttl),
            max_pages: match parsed_var::<usize>("MAX_PAGES") {
                Some(0) => None,
                Some(n) => Some(n),
                None => defaults.max_pages,
            },
            request_timeout: parsed_var::<u64>("REQUEST_TIMEOUT").filter(|secs| *secs > 0),
            strict_pages: parsed_var("STRICT_PAGES").unwrap_or(defaults.strict_pages),
            cleanup_interval: parsed_var("CLEANUP_INTERVAL").unwrap_or(defaults.cleanup_interval),
            cors_origin: non_empty_var("CORS_ORIGIN").unwrap_or(defaults.cors_origin),
        }
    }

    /// Cache TTL as a Duration.
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl)
    }

    /// Per-page request timeout as a Duration, if configured.
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout.map(Duration::from_secs)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            default_channel_id: Some(DEFAULT_CHANNEL_ID.to_string()),
            search_endpoint: DEFAULT_SEARCH_ENDPOINT.to_string(),
            server_port: 5000,
            cache_ttl: 600,
            max_pages: Some(20),
            request_timeout: None,
            strict_pages: false,
            cleanup_interval: 60,
            cors_origin: "*".to_string(),
        }
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn parsed_var<T: std::str::FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.trim().parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.api_key.is_none());
        assert_eq!(config.default_channel_id.as_deref(), Some(DEFAULT_CHANNEL_ID));
        assert_eq!(config.server_port, 5000);
        assert_eq!(config.cache_ttl, 600);
        assert_eq!(config.cache_ttl(), Duration::from_secs(600));
        assert_eq!(config.max_pages, Some(20));
        assert!(config.request_timeout().is_none());
        assert!(!config.strict_pages);
    }

    // Single test touching the environment so parallel tests don't race on it.
    #[test]
    fn test_config_from_env() {
        for name in [
            "YT_API_KEY",
            "DEFAULT_CHANNEL_ID",
            "SEARCH_ENDPOINT",
            "SERVER_PORT",
            "CACHE_TTL",
            "MAX_PAGES",
            "REQUEST_TIMEOUT",
            "STRICT_PAGES",
            "CLEANUP_INTERVAL",
            "CORS_ORIGIN",
        ] {
            env::remove_var(name);
        }

        let config = Config::from_env();
        assert!(config.api_key.is_none());
        assert_eq!(config.server_port, 5000);
        assert_eq!(config.max_pages, Some(20));
        assert_eq!(config.search_endpoint, DEFAULT_SEARCH_ENDPOINT);

        env::set_var("YT_API_KEY", "secret");
        env::set_var("MAX_PAGES", "0");
        env::set_var("REQUEST_TIMEOUT", "5");
        env::set_var("STRICT_PAGES", "true");
        env::set_var("CACHE_TTL", "not-a-number");

        let config = Config::from_env();
        assert_eq!(config.api_key.as_deref(), Some("secret"));
        assert_eq!(config.max_pages, None);
        assert_eq!(config.request_timeout(), Some(Duration::from_secs(5)));
        assert!(config.strict_pages);
        assert_eq!(config.cache_ttl, 600);

        for name in ["YT_API_KEY", "MAX_PAGES", "REQUEST_TIMEOUT", "STRICT_PAGES", "CACHE_TTL"] {
            env::remove_var(name);
        }
    }
}
