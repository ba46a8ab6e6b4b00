//! Placeholder credentials used by every mocked integration.
//!
//! None of these are real; the mock server accepts anything.

/// API key configured for Sonarr, Radarr, Overseerr and Prowlarr.
pub static TEST_API_KEY: &str = "test-api-key";

/// qBittorrent WebUI username.
pub static TEST_QBITTORRENT_USERNAME: &str = "admin";

/// qBittorrent WebUI password.
pub static TEST_QBITTORRENT_PASSWORD: &str = "adminadmin";

/// Session ID handed out by the mocked qBittorrent login endpoint.
pub static TEST_SESSION_ID: &str = "test-session-id";

/// Services configured by key, as named in the persisted settings.
pub static KEYED_SERVICES: [&str; 4] = ["sonarr", "radarr", "overseerr", "prowlarr"];
