//! Client configuration
//!
//! Layered the usual way: built-in defaults, then an optional TOML file
//! (per-user config directory, overridable with an explicit path), then
//! `TICKDECK_*` environment variables. `TICKDECK_API__BASE_URL` overrides
//! `[api] base_url`, and so on with `__` separating nesting levels.

use crate::error::Result;
use config::{Config, Environment, File};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

const DEFAULT_BASE_URL: &str = "http://localhost:3000/api";
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_TICKETS_STALE_SECS: u64 = 5 * 60;
const DEFAULT_USERS_STALE_SECS: u64 = 10 * 60;

/// API endpoint settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL of the REST surface, including the `/api` path
    pub base_url: String,
    /// Bound on each request, surfaced as a transport failure when exceeded
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl ApiConfig {
    /// Per-call request timeout
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Staleness windows for the query caches
///
/// Users change less often than tickets, so their window is twice as long
/// by default.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    pub tickets_stale_secs: u64,
    pub users_stale_secs: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            tickets_stale_secs: DEFAULT_TICKETS_STALE_SECS,
            users_stale_secs: DEFAULT_USERS_STALE_SECS,
        }
    }
}

impl CacheConfig {
    /// Staleness window for ticket queries
    #[must_use]
    pub const fn tickets_stale_after(&self) -> Duration {
        Duration::from_secs(self.tickets_stale_secs)
    }

    /// Staleness window for user queries
    #[must_use]
    pub const fn users_stale_after(&self) -> Duration {
        Duration::from_secs(self.users_stale_secs)
    }
}

/// Complete client configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub api: ApiConfig,
    pub cache: CacheConfig,
}

impl ClientConfig {
    /// Load configuration from the default locations
    ///
    /// Missing files are fine; malformed files are an error.
    pub fn load() -> Result<Self> {
        Self::load_from(Self::default_config_path().as_deref())
    }

    /// Load configuration with an explicit file path taking the place of
    /// the per-user config file
    pub fn load_from(path: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder()
            .set_default("api.base_url", DEFAULT_BASE_URL)?
            .set_default("api.timeout_secs", DEFAULT_TIMEOUT_SECS)?
            .set_default("cache.tickets_stale_secs", DEFAULT_TICKETS_STALE_SECS)?
            .set_default("cache.users_stale_secs", DEFAULT_USERS_STALE_SECS)?;

        if let Some(path) = path {
            builder = builder.add_source(File::from(path).required(false));
        }

        let settings = builder
            .add_source(Environment::with_prefix("TICKDECK").separator("__"))
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// Location of the per-user config file, if a home directory exists
    #[must_use]
    pub fn default_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "tickdeck")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn defaults_match_the_documented_windows() {
        let config = ClientConfig::default();
        assert_eq!(config.api.base_url, "http://localhost:3000/api");
        assert_eq!(config.api.timeout(), Duration::from_secs(30));
        assert_eq!(config.cache.tickets_stale_after(), Duration::from_secs(300));
        assert_eq!(config.cache.users_stale_after(), Duration::from_secs(600));
    }

    #[test]
    fn file_values_override_defaults() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("config.toml");
        let mut file = std::fs::File::create(&path).expect("create config");
        writeln!(
            file,
            "[api]\nbase_url = \"https://tickets.example.com/api\"\n\n[cache]\ntickets_stale_secs = 60"
        )
        .expect("write config");

        let config = ClientConfig::load_from(Some(&path)).expect("load config");
        assert_eq!(config.api.base_url, "https://tickets.example.com/api");
        assert_eq!(config.cache.tickets_stale_after(), Duration::from_secs(60));
        // Untouched values keep their defaults.
        assert_eq!(config.cache.users_stale_after(), Duration::from_secs(600));
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("does-not-exist.toml");

        let config = ClientConfig::load_from(Some(&path)).expect("load config");
        assert_eq!(config.api.base_url, "http://localhost:3000/api");
    }

    #[test]
    fn malformed_file_is_a_config_error() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "api = \"not a table\"").expect("write config");

        let result = ClientConfig::load_from(Some(&path));
        assert!(matches!(
            result,
            Err(crate::error::TickdeckError::Config(_))
        ));
    }
}
