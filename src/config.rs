//! Process and integration configuration.
//!
//! Process settings come from the environment once at startup. Integration
//! settings come from the persisted `setting` table and are turned into an
//! immutable [`IntegrationsConfig`] snapshot every time they are (re)loaded.

use std::{collections::HashMap, time::Duration};

use crate::error::config::ConfigError;

/// Adapter timeout used when `REMOVARR_REQUEST_TIMEOUT_SECS` is unset.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
/// Sync interval used when `sync_frequency` is unset or unparseable.
pub const DEFAULT_SYNC_INTERVAL: Duration = Duration::from_secs(5 * 60);

const DEFAULT_LOG_FILTER: &str = "info";

/// Persisted setting keys.
pub mod keys {
    pub const SYNC_FREQUENCY: &str = "sync_frequency";

    pub const QBITTORRENT_ENABLED: &str = "qbittorrent.enabled";
    pub const QBITTORRENT_URL: &str = "qbittorrent.url";
    pub const QBITTORRENT_USERNAME: &str = "qbittorrent.username";
    pub const QBITTORRENT_PASSWORD: &str = "qbittorrent.password";

    pub fn enabled(service: &str) -> String {
        format!("{service}.enabled")
    }

    pub fn url(service: &str) -> String {
        format!("{service}.url")
    }

    pub fn api_key(service: &str) -> String {
        format!("{service}.api_key")
    }
}

pub struct Config {
    pub database_url: String,
    pub log_filter: String,
    pub request_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url = std::env::var("DATABASE_URL")
            .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let log_filter =
            std::env::var("REMOVARR_LOG").unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string());

        let request_timeout = match std::env::var("REMOVARR_REQUEST_TIMEOUT_SECS") {
            Ok(value) => {
                let secs = value
                    .parse::<u64>()
                    .map_err(|e| ConfigError::InvalidEnvValue {
                        var: "REMOVARR_REQUEST_TIMEOUT_SECS".to_string(),
                        reason: e.to_string(),
                    })?;
                Duration::from_secs(secs)
            }
            Err(_) => DEFAULT_REQUEST_TIMEOUT,
        };

        Ok(Self {
            database_url,
            log_filter,
            request_timeout,
        })
    }
}

/// Base URL and API key for a service authenticated by key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServiceConfig {
    pub url: String,
    pub api_key: String,
}

/// Base URL and WebUI credentials for the torrent client.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QBittorrentConfig {
    pub url: String,
    pub username: String,
    pub password: String,
}

/// Immutable snapshot of every integration's settings.
///
/// `None` means the integration is disabled or has no URL configured.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IntegrationsConfig {
    pub sonarr: Option<ServiceConfig>,
    pub radarr: Option<ServiceConfig>,
    pub overseerr: Option<ServiceConfig>,
    pub prowlarr: Option<ServiceConfig>,
    pub qbittorrent: Option<QBittorrentConfig>,
    pub request_timeout: Duration,
}

impl Default for IntegrationsConfig {
    fn default() -> Self {
        Self {
            sonarr: None,
            radarr: None,
            overseerr: None,
            prowlarr: None,
            qbittorrent: None,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

impl IntegrationsConfig {
    /// Builds a snapshot from the persisted key/value settings.
    ///
    /// # Arguments
    /// - `settings` - All persisted settings keyed by setting key
    /// - `request_timeout` - Per-call timeout applied to every adapter
    ///
    /// # Returns
    /// A config where each service is `Some` only if it is enabled and has a base URL
    pub fn from_settings(settings: &HashMap<String, String>, request_timeout: Duration) -> Self {
        let service = |name: &str| -> Option<ServiceConfig> {
            if !is_enabled(settings, &keys::enabled(name)) {
                return None;
            }
            let url = base_url(settings.get(&keys::url(name)))?;
            Some(ServiceConfig {
                url,
                api_key: settings.get(&keys::api_key(name)).cloned().unwrap_or_default(),
            })
        };

        let qbittorrent = if is_enabled(settings, keys::QBITTORRENT_ENABLED) {
            base_url(settings.get(keys::QBITTORRENT_URL)).map(|url| QBittorrentConfig {
                url,
                username: settings
                    .get(keys::QBITTORRENT_USERNAME)
                    .cloned()
                    .unwrap_or_default(),
                password: settings
                    .get(keys::QBITTORRENT_PASSWORD)
                    .cloned()
                    .unwrap_or_default(),
            })
        } else {
            None
        };

        Self {
            sonarr: service("sonarr"),
            radarr: service("radarr"),
            overseerr: service("overseerr"),
            prowlarr: service("prowlarr"),
            qbittorrent,
            request_timeout,
        }
    }
}

/// Reads the sync interval from the persisted settings.
///
/// Accepts human durations such as `5m`, `1h` or `90s`. A missing, unparseable
/// or zero value falls back to [`DEFAULT_SYNC_INTERVAL`].
pub fn sync_interval(settings: &HashMap<String, String>) -> Duration {
    let Some(raw) = settings.get(keys::SYNC_FREQUENCY) else {
        return DEFAULT_SYNC_INTERVAL;
    };

    match humantime::parse_duration(raw.trim()) {
        Ok(interval) if !interval.is_zero() => interval,
        Ok(_) => DEFAULT_SYNC_INTERVAL,
        Err(e) => {
            tracing::warn!(
                "Invalid {} value {:?}, using default: {}",
                keys::SYNC_FREQUENCY,
                raw,
                e
            );
            DEFAULT_SYNC_INTERVAL
        }
    }
}

fn is_enabled(settings: &HashMap<String, String>, key: &str) -> bool {
    settings
        .get(key)
        .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "true" | "1" | "yes" | "on"))
        .unwrap_or(false)
}

fn base_url(value: Option<&String>) -> Option<String> {
    let url = value?.trim().trim_end_matches('/');
    if url.is_empty() {
        None
    } else {
        Some(url.to_string())
    }
}
