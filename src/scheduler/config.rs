use std::time::Duration;

/// How often persisted settings are checked for a new sync interval or changed
/// integration settings.
pub const SETTINGS_CHECK_INTERVAL: Duration = Duration::from_secs(60);
