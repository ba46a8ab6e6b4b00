//! Persisted settings and seeding overrides.

use std::{collections::HashMap, time::Duration};

use sea_orm::DatabaseConnection;

use crate::{
    config::{self, IntegrationsConfig},
    data::{
        seeding_override::{SeedingOverrideInput, SeedingOverrideRepository},
        setting::SettingRepository,
    },
    error::{config::ConfigError, Error},
    integration::{Integrations, IntegrationsHandle, Service},
    model::db::{SeedingOverrideModel, SettingModel},
};

pub struct SettingsService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SettingsService<'a> {
    /// Creates a new instance of [`SettingsService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<HashMap<String, String>, Error> {
        Ok(SettingRepository::new(self.db).get_all().await?)
    }

    pub async fn set(&self, key: &str, value: &str) -> Result<SettingModel, Error> {
        Ok(SettingRepository::new(self.db).set(key, value).await?)
    }

    /// Builds an integrations snapshot from the stored settings.
    pub async fn integrations_config(
        &self,
        request_timeout: Duration,
    ) -> Result<IntegrationsConfig, Error> {
        let settings = self.get_all().await?;

        Ok(IntegrationsConfig::from_settings(&settings, request_timeout))
    }

    /// Interval between scheduled syncs as currently stored.
    pub async fn sync_interval(&self) -> Result<Duration, Error> {
        let settings = self.get_all().await?;

        Ok(config::sync_interval(&settings))
    }

    /// Rebuilds every adapter from the stored settings and swaps them in.
    ///
    /// Operations already holding a snapshot keep using the old adapters. Settings
    /// equal to the active config leave the registry untouched.
    ///
    /// # Returns
    /// - `Ok(IntegrationsConfig)` - The snapshot that is now active
    /// - `Err(Error)` - Reading settings or building a client failed; the active registry is unchanged
    pub async fn reload(
        &self,
        handle: &IntegrationsHandle,
        request_timeout: Duration,
    ) -> Result<IntegrationsConfig, Error> {
        let config = self.integrations_config(request_timeout).await?;
        if handle.apply(config.clone())? {
            tracing::info!("Reloaded integration settings");
        } else {
            tracing::debug!("Integration settings unchanged, reload skipped");
        }

        Ok(config)
    }

    /// Checks that `service` is reachable and accepts the credentials in `config`.
    ///
    /// `config` need not be the persisted one, so unsaved settings can be tried
    /// before they are stored. A throwaway client is built; the active registry
    /// is not touched.
    ///
    /// # Returns
    /// - `Ok(())` - The service answered its listing endpoint
    /// - `Err(Error::ConfigError)` - The service is not configured or lacks credentials
    /// - `Err(Error::IntegrationError)` - The call failed; `status()` carries the HTTP status if any
    pub async fn test_integration(
        &self,
        service: Service,
        config: &IntegrationsConfig,
    ) -> Result<(), Error> {
        let has_credentials = match service {
            Service::Sonarr => config.sonarr.as_ref().map(|c| !c.api_key.trim().is_empty()),
            Service::Radarr => config.radarr.as_ref().map(|c| !c.api_key.trim().is_empty()),
            Service::Overseerr => config.overseerr.as_ref().map(|c| !c.api_key.trim().is_empty()),
            Service::Prowlarr => config.prowlarr.as_ref().map(|c| !c.api_key.trim().is_empty()),
            Service::QBittorrent => config
                .qbittorrent
                .as_ref()
                .map(|c| !c.username.trim().is_empty() && !c.password.trim().is_empty()),
        };
        match has_credentials {
            None => return Err(ConfigError::IntegrationDisabled(service).into()),
            Some(false) => return Err(ConfigError::MissingCredentials(service).into()),
            Some(true) => {}
        }

        let integrations = Integrations::from_config(config)?;
        let result = match service {
            Service::Sonarr => integrations.sonarr.require(service)?.list_all().await.map(drop),
            Service::Radarr => integrations.radarr.require(service)?.list_all().await.map(drop),
            Service::Overseerr => integrations.overseerr.require(service)?.list_all().await.map(drop),
            Service::Prowlarr => integrations.prowlarr.require(service)?.list_all().await.map(drop),
            Service::QBittorrent => integrations
                .qbittorrent
                .require(service)?
                .list_all()
                .await
                .map(drop),
        };

        match result {
            Ok(()) => {
                tracing::info!("{} connection test succeeded", service);
                Ok(())
            }
            Err(e) => {
                if matches!(e.status(), Some(401 | 403)) {
                    tracing::warn!("{} rejected the configured credentials", service);
                } else {
                    tracing::warn!("{} connection test failed: {}", service, e);
                }
                Err(e.into())
            }
        }
    }

    pub async fn list_overrides(&self) -> Result<Vec<SeedingOverrideModel>, Error> {
        Ok(SeedingOverrideRepository::new(self.db).find_all().await?)
    }

    /// Creates a seeding override; takes effect on the next torrent sync.
    pub async fn create_override(
        &self,
        input: SeedingOverrideInput,
    ) -> Result<SeedingOverrideModel, Error> {
        validate_override(&input)?;

        Ok(SeedingOverrideRepository::new(self.db).create(input).await?)
    }

    pub async fn update_override(
        &self,
        id: i32,
        input: SeedingOverrideInput,
    ) -> Result<Option<SeedingOverrideModel>, Error> {
        validate_override(&input)?;

        Ok(SeedingOverrideRepository::new(self.db)
            .update(id, input)
            .await?)
    }

    pub async fn delete_override(&self, id: i32) -> Result<bool, Error> {
        Ok(SeedingOverrideRepository::new(self.db).delete(id).await?)
    }
}

/// An override must identify a tracker and carry non-negative thresholds.
fn validate_override(input: &SeedingOverrideInput) -> Result<(), Error> {
    let has_name = input
        .tracker_name
        .as_deref()
        .is_some_and(|n| !n.trim().is_empty());
    if input.tracker_id.is_none() && !has_name {
        return Err(Error::InvalidOverride(
            "a tracker id or name is required".to_string(),
        ));
    }

    if input.min_seeding_time_seconds.is_some_and(|s| s < 0) {
        return Err(Error::InvalidOverride(
            "minimum seeding time cannot be negative".to_string(),
        ));
    }
    if input.min_ratio.is_some_and(|r| r < 0.0 || r.is_nan()) {
        return Err(Error::InvalidOverride("minimum ratio cannot be negative".to_string()));
    }

    Ok(())
}
